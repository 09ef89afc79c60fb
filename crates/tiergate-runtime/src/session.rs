//! In-memory session provider.

use std::collections::HashMap;
use std::sync::RwLock;
use tiergate_guard::{SessionProvider, StoreError};
use tiergate_types::{SessionToken, SubjectId};

/// Thread-safe, in-memory token table.
///
/// Implements [`SessionProvider`] using `RwLock<HashMap>` for concurrent
/// read/write access. Read-heavy workloads (one lookup per request)
/// benefit from concurrent read access.
///
/// # Example
///
/// ```
/// use tiergate_runtime::MemorySessionProvider;
/// use tiergate_types::{SessionToken, SubjectId};
///
/// let provider = MemorySessionProvider::new();
/// let subject = SubjectId::new();
/// provider.insert(SessionToken::new("tok-1"), subject);
///
/// # let _ = &provider;
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionProvider {
    sessions: RwLock<HashMap<SessionToken, SubjectId>>,
}

impl MemorySessionProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as authenticating `subject`.
    ///
    /// An existing entry for the same token is overwritten.
    pub fn insert(&self, token: SessionToken, subject: SubjectId) {
        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.insert(token, subject);
            }
            Err(e) => {
                tracing::error!("session provider: lock poisoned on insert: {e}");
            }
        }
    }

    /// Revokes a token. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &SessionToken) {
        match self.sessions.write() {
            Ok(mut sessions) => {
                sessions.remove(token);
            }
            Err(e) => {
                tracing::error!("session provider: lock poisoned on revoke: {e}");
            }
        }
    }

    /// Returns the number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl SessionProvider for MemorySessionProvider {
    async fn subject_for(&self, token: &SessionToken) -> Result<Option<SubjectId>, StoreError> {
        match self.sessions.read() {
            Ok(sessions) => Ok(sessions.get(token).copied()),
            Err(e) => {
                tracing::error!("session provider: lock poisoned on lookup: {e}");
                Err(StoreError::unavailable(
                    "session provider",
                    "lock poisoned",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let provider = MemorySessionProvider::new();
        let subject = provider
            .subject_for(&SessionToken::new("nope"))
            .await
            .expect("lookup");
        assert!(subject.is_none());
    }

    #[tokio::test]
    async fn inserted_token_resolves() {
        let provider = MemorySessionProvider::new();
        let subject = SubjectId::new();
        provider.insert(SessionToken::new("tok"), subject);

        let resolved = provider
            .subject_for(&SessionToken::new("tok"))
            .await
            .expect("lookup");
        assert_eq!(resolved, Some(subject));
        assert_eq!(provider.session_count(), 1);
    }

    #[tokio::test]
    async fn revoked_token_stops_resolving() {
        let provider = MemorySessionProvider::new();
        let token = SessionToken::new("tok");
        provider.insert(token.clone(), SubjectId::new());
        provider.revoke(&token);

        let resolved = provider.subject_for(&token).await.expect("lookup");
        assert!(resolved.is_none());
        assert_eq!(provider.session_count(), 0);
    }

    #[tokio::test]
    async fn reinsert_overwrites_subject() {
        let provider = MemorySessionProvider::new();
        let token = SessionToken::new("tok");
        let first = SubjectId::new();
        let second = SubjectId::new();
        provider.insert(token.clone(), first);
        provider.insert(token.clone(), second);

        let resolved = provider.subject_for(&token).await.expect("lookup");
        assert_eq!(resolved, Some(second));
        assert_eq!(provider.session_count(), 1);
    }

    #[test]
    fn revoke_unknown_is_noop() {
        let provider = MemorySessionProvider::new();
        provider.revoke(&SessionToken::new("ghost"));
        assert_eq!(provider.session_count(), 0);
    }
}
