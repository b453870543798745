//! Repository layer for data access.
//!
//! Services depend on the traits declared here; the `*Store` types are the
//! SeaORM-backed implementations.

mod base;
pub mod entities;
mod exam_repository;
mod question_repository;
mod user_repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use base::{CategoryRepository, CategoryStore, CrudRepository};
pub use exam_repository::{ExamRepository, ExamStore};
pub use question_repository::{QuestionRepository, QuestionStore};
pub use user_repository::{
    RoleRepository, RoleStore, UserRepository, UserRoleRepository, UserRoleStore, UserStore,
};
