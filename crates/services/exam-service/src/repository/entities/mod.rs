//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod exam;
pub mod question;
pub mod role;
pub mod user;
pub mod user_role;
