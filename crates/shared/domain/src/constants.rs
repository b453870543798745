//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Administrator role name
pub const ROLE_ADMIN: &str = "ADMIN";

/// Regular (student) role name
pub const ROLE_NORMAL: &str = "NORMAL";

/// Fixed id of the administrator role
pub const ROLE_ADMIN_ID: i64 = 1;

/// Fixed id of the regular role
pub const ROLE_NORMAL_ID: i64 = 2;

// =============================================================================
// Users
// =============================================================================

/// Profile picture assigned to accounts that never uploaded one
pub const DEFAULT_PROFILE_PICTURE: &str = "default.png";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
