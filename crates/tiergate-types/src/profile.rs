//! The role-bearing profile record.

use crate::{Role, SubjectId};
use serde::{Deserialize, Serialize};

/// The persisted record associating a subject with its role.
///
/// Profiles are created by the external signup flow and mutated only by
/// privileged administrative actions; the guard layer reads them. The
/// display attributes are irrelevant to authorization decisions but are
/// carried so call sites resolving a profile don't need a second fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The subject this profile belongs to (shared with the auth record).
    pub subject: SubjectId,

    /// The subject's permission tier.
    pub role: Role,

    /// Display name, if set.
    pub name: Option<String>,

    /// Contact email, if set.
    pub email: Option<String>,

    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Creates a profile with no display attributes.
    #[must_use]
    pub fn new(subject: SubjectId, role: Role) -> Self {
        Self {
            subject,
            role,
            name: None,
            email: None,
            avatar_url: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_has_no_display_attributes() {
        let profile = Profile::new(SubjectId::new(), Role::User);
        assert!(profile.name.is_none());
        assert!(profile.email.is_none());
        assert!(profile.avatar_url.is_none());
    }

    #[test]
    fn builders_set_attributes() {
        let profile = Profile::new(SubjectId::new(), Role::Member)
            .with_name("Ada")
            .with_email("ada@example.com");
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn serde_roundtrip() {
        let profile = Profile::new(SubjectId::new(), Role::Admin).with_name("Ada");
        let json = serde_json::to_string(&profile).expect("serialize profile");
        let back: Profile = serde_json::from_str(&json).expect("deserialize profile");
        assert_eq!(profile, back);
    }

    #[test]
    fn role_tag_is_snake_case_in_json() {
        let profile = Profile::new(SubjectId::new(), Role::SuperAdmin);
        let json = serde_json::to_string(&profile).expect("serialize profile");
        assert!(json.contains("\"super_admin\""));
    }
}
