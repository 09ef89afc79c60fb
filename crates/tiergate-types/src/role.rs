//! The closed role hierarchy.
//!
//! Roles form a total order by rank. A subject holding a role of rank R
//! may perform any action requiring rank ≤ R. Ranks are fixed at compile
//! time and never mutated at runtime.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A subject's permission tier.
///
/// The set is closed: an unknown tag coming in from a serialization
/// boundary is a [`RoleParseError`], never silently ranked.
///
/// # Rank Order
///
/// | Role | Rank |
/// |------|------|
/// | `User` | 0 |
/// | `Member` | 1 |
/// | `Support` | 2 |
/// | `Admin` | 3 |
/// | `SuperAdmin` | 4 |
///
/// Derived ordering agrees with [`rank`](Self::rank), so `Role::Admin >
/// Role::Support` holds.
///
/// # Wire Format
///
/// Roles cross serialization boundaries as snake_case text tags
/// (`"user"`, `"member"`, `"support"`, `"admin"`, `"super_admin"`),
/// matching the external database's text column.
///
/// # Example
///
/// ```
/// use tiergate_types::Role;
///
/// assert_eq!(Role::Support.rank(), 2);
/// assert_eq!("super_admin".parse::<Role>(), Ok(Role::SuperAdmin));
/// assert!("owner".parse::<Role>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Role {
    /// Signed-up visitor with no active subscription.
    User = 0,

    /// Paying subscriber.
    Member = 1,

    /// Support staff handling tickets.
    Support = 2,

    /// Administrator managing orders, coupons, and content.
    Admin = 3,

    /// Full administrative control, including role changes.
    SuperAdmin = 4,
}

impl Role {
    /// Every role, in ascending rank order.
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Member,
        Role::Support,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Returns the role's rank in the total order.
    ///
    /// Pure and total: defined for every value of the closed set.
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the wire tag for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Member => "member",
            Role::Support => "support",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role tag outside the closed set was encountered.
///
/// Raised at serialization boundaries only; inside the process the closed
/// enum makes unknown roles unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role tag: {found:?}")]
pub struct RoleParseError {
    /// The rejected tag.
    pub found: String,
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "member" => Ok(Role::Member),
            "support" => Ok(Role::Support),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(RoleParseError {
                found: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_fixed() {
        assert_eq!(Role::User.rank(), 0);
        assert_eq!(Role::Member.rank(), 1);
        assert_eq!(Role::Support.rank(), 2);
        assert_eq!(Role::Admin.rank(), 3);
        assert_eq!(Role::SuperAdmin.rank(), 4);
    }

    #[test]
    fn ordering_agrees_with_rank() {
        for a in Role::ALL {
            for b in Role::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn all_is_ascending() {
        for pair in Role::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn parse_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = "owner".parse::<Role>().unwrap_err();
        assert_eq!(err.found, "owner");
        assert!(err.to_string().contains("owner"));
    }

    #[test]
    fn parse_rejects_case_variants() {
        // The wire format is exact; "Admin" is not a valid tag.
        assert!("Admin".parse::<Role>().is_err());
        assert!("SUPER_ADMIN".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&Role::SuperAdmin).expect("serialize role");
        assert_eq!(json, "\"super_admin\"");

        let role: Role = serde_json::from_str("\"support\"").expect("deserialize role");
        assert_eq!(role, Role::Support);
    }

    #[test]
    fn serde_rejects_unknown_tag() {
        let result: Result<Role, _> = serde_json::from_str("\"owner\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_wire_tag() {
        assert_eq!(format!("{}", Role::Admin), "admin");
        assert_eq!(format!("{}", Role::SuperAdmin), "super_admin");
    }
}
