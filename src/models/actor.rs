//! Actor context
//!
//! The acting user's role and granted permission codes, threaded explicitly
//! through guards and services instead of read from ambient session state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::roles;

/// Actor role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Educator,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => roles::ADMIN,
            Self::Educator => roles::EDUCATOR,
            Self::Student => roles::STUDENT,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            roles::ADMIN => Ok(Self::Admin),
            roles::EDUCATOR => Ok(Self::Educator),
            roles::STUDENT => Ok(Self::Student),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The acting user, as seen by guards and services
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub role: Role,
    pub username: String,
    permissions: HashSet<String>,
}

impl ActorContext {
    pub fn new(
        role: Role,
        username: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            role,
            username: username.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_educator(&self) -> bool {
        self.role == Role::Educator
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    /// Whether the actor holds the given permission code
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.contains(code)
    }

    /// Whether the actor holds every permission code in the slice
    pub fn has_all_permissions(&self, codes: &[&str]) -> bool {
        codes.iter().all(|code| self.has_permission(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::permissions;

    #[test]
    fn test_permission_lookup() {
        let actor = ActorContext::new(
            Role::Educator,
            "lan.pham",
            [permissions::SIMULATION_CREATE, permissions::SIMULATION_UPDATE],
        );
        assert!(actor.has_permission(permissions::SIMULATION_CREATE));
        assert!(!actor.has_permission(permissions::SIMULATION_APPROVE));
        assert!(actor.has_all_permissions(&[
            permissions::SIMULATION_CREATE,
            permissions::SIMULATION_UPDATE,
        ]));
        assert!(!actor.has_all_permissions(&[
            permissions::SIMULATION_CREATE,
            permissions::SIMULATION_APPROVE,
        ]));
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in [Role::Admin, Role::Educator, Role::Student] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("organizer".parse::<Role>().is_err());
    }
}
