use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ShellError;

/// Category of authenticated user. Decides every navigation permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Warehouse,
    Supplier,
    Community,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Warehouse, Role::Supplier, Role::Community];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Warehouse => "warehouse",
            Role::Supplier => "supplier",
            Role::Community => "community",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Warehouse => "Warehouse Manager",
            Role::Supplier => "Supplier",
            Role::Community => "Community Health Worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ShellError;

    /// Exact match on the lowercase name; anything else is an invalid role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ShellError::InvalidRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("warehouse".parse::<Role>().unwrap(), Role::Warehouse);
        assert_eq!("supplier".parse::<Role>().unwrap(), Role::Supplier);
        assert_eq!("community".parse::<Role>().unwrap(), Role::Community);
    }

    #[test]
    fn test_parse_rejects_unknown_and_mixed_case() {
        for raw in ["not-a-role", "Admin", " admin", ""] {
            match raw.parse::<Role>() {
                Err(ShellError::InvalidRole(text)) => assert_eq!(text, raw),
                other => panic!("expected InvalidRole for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
