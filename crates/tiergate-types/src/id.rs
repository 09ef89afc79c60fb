//! Identifier types for Tiergate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for an authenticated subject.
///
/// The id is shared with the external authentication record: the signup
/// flow creates both under the same UUID, and the profile row is keyed
/// by it.
///
/// # Example
///
/// ```
/// use tiergate_types::SubjectId;
///
/// let a = SubjectId::new();
/// let b = SubjectId::new();
/// assert_ne!(a, b);
/// assert!(format!("{a}").starts_with("subject:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub Uuid);

impl SubjectId {
    /// Creates a new random subject id (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one read from the auth record.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subject:{}", self.0)
    }
}

/// Opaque request-scoped session credential.
///
/// In the original deployment this is a cookie value. It is always passed
/// explicitly through the call chain rather than read from ambient state,
/// which keeps guard operations pure and testable.
///
/// # Why No `Debug` Value?
///
/// The token authenticates its holder. `Debug` and `Display` redact the
/// value so a token never leaks into logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the raw value for handing to a session backend.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_id_uniqueness() {
        let a = SubjectId::new();
        let b = SubjectId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn subject_id_from_uuid_is_stable() {
        let uuid = Uuid::new_v4();
        let a = SubjectId::from_uuid(uuid);
        let b = SubjectId::from_uuid(uuid);
        assert_eq!(a, b);
        assert_eq!(a.uuid(), uuid);
    }

    #[test]
    fn subject_id_display() {
        let id = SubjectId::new();
        let display = format!("{id}");
        assert!(display.starts_with("subject:"));
        assert!(display.contains(&id.uuid().to_string()));
    }

    #[test]
    fn subject_id_serde_roundtrip() {
        let id = SubjectId::new();
        let json = serde_json::to_string(&id).expect("serialize id");
        let back: SubjectId = serde_json::from_str(&json).expect("deserialize id");
        assert_eq!(id, back);
    }

    #[test]
    fn session_token_equality_on_value() {
        let a = SessionToken::new("tok-1");
        let b = SessionToken::new("tok-1");
        let c = SessionToken::new("tok-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn session_token_debug_redacts() {
        let token = SessionToken::new("s3cret-cookie-value");
        let debug = format!("{token:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("redacted"));
        assert_eq!(format!("{token}"), "<redacted>");
    }

    #[test]
    fn session_token_exposes_raw_value() {
        let token = SessionToken::new("tok-1");
        assert_eq!(token.expose(), "tok-1");
    }
}
