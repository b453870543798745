//! Domain layer - Core exam-management entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence identity is owned by the repositories; here it only shows up
//! as an optional id on each entity.

pub mod category;
pub mod constants;
pub mod entity;
pub mod error;
pub mod exam;
pub mod password;
pub mod question;
pub mod user;

pub use category::Category;
pub use constants::*;
pub use entity::{Entity, EntityId};
pub use error::{DomainError, DomainResult};
pub use exam::Exam;
pub use password::Password;
pub use question::{Evaluation, Question};
pub use user::{reconcile_roles, Role, RoleChanges, User, UserRole};
