//! Actor roles for the tourism platform.

use serde::{Deserialize, Serialize};

/// Role held by a user, fixed at registration.
///
/// The set is closed: every permission lookup is total over these five
/// variants, which is what makes the permission table testable for
/// completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Moderator,
    BusinessFood,
    BusinessAccommodation,
    Guide,
}

impl Role {
    /// All roles, for table-completeness checks.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Moderator,
        Role::BusinessFood,
        Role::BusinessAccommodation,
        Role::Guide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Moderator => "MODERATOR",
            Role::BusinessFood => "BUSINESS_FOOD",
            Role::BusinessAccommodation => "BUSINESS_ACCOMMODATION",
            Role::Guide => "GUIDE",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MODERATOR" => Ok(Role::Moderator),
            "BUSINESS_FOOD" => Ok(Role::BusinessFood),
            "BUSINESS_ACCOMMODATION" => Ok(Role::BusinessAccommodation),
            "GUIDE" => Ok(Role::Guide),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
