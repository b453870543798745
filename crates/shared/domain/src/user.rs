//! User, role and the user-role association.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PROFILE_PICTURE, ROLE_ADMIN, ROLE_ADMIN_ID, ROLE_NORMAL, ROLE_NORMAL_ID,
};
use crate::entity::{Entity, EntityId};

/// User account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: Option<EntityId>,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub enabled: bool,
    /// Profile picture file name
    pub profile: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            enabled: true,
            profile: DEFAULT_PROFILE_PICTURE.to_string(),
        }
    }
}

impl User {
    /// Create an unpersisted, enabled user with the default profile picture
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }
}

impl Entity for User {
    const NAME: &'static str = "user";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Named role. Ids are assigned by the application, not the database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
}

impl Role {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The administrator role
    pub fn admin() -> Self {
        Self::new(ROLE_ADMIN_ID, ROLE_ADMIN)
    }

    /// The regular student role
    pub fn normal() -> Self {
        Self::new(ROLE_NORMAL_ID, ROLE_NORMAL)
    }
}

impl Entity for Role {
    const NAME: &'static str = "role";

    fn id(&self) -> Option<EntityId> {
        Some(self.id)
    }
}

/// Association granting one role to one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRole {
    pub id: Option<EntityId>,
    pub user_id: EntityId,
    pub role_id: EntityId,
}

impl UserRole {
    /// Create an unpersisted association
    pub fn new(user_id: EntityId, role_id: EntityId) -> Self {
        Self {
            id: None,
            user_id,
            role_id,
        }
    }
}

impl Entity for UserRole {
    const NAME: &'static str = "user_role";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Writes needed to turn a user's current associations into a desired set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleChanges {
    /// Roles to grant, ordered by id
    pub to_add: Vec<Role>,
    /// Existing associations to revoke
    pub to_remove: Vec<UserRole>,
}

impl RoleChanges {
    /// True when the current associations already match
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Diff `current` associations against `desired` roles, keyed by role id.
///
/// Associations present on both sides appear in neither list.
pub fn reconcile_roles(current: &[UserRole], desired: &HashSet<Role>) -> RoleChanges {
    let current_ids: HashSet<EntityId> = current.iter().map(|assoc| assoc.role_id).collect();
    let desired_by_id: BTreeMap<EntityId, &Role> =
        desired.iter().map(|role| (role.id, role)).collect();

    let to_add = desired_by_id
        .iter()
        .filter(|(id, _)| !current_ids.contains(id))
        .map(|(_, role)| (*role).clone())
        .collect();

    let to_remove = current
        .iter()
        .filter(|assoc| !desired_by_id.contains_key(&assoc.role_id))
        .cloned()
        .collect();

    RoleChanges { to_add, to_remove }
}
