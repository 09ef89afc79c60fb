//! Session provider abstraction.
//!
//! The [`SessionProvider`] trait maps a request-scoped credential to the
//! authenticated subject behind it. The credential is always an explicit
//! parameter; nothing in the guard reads ambient request state.

use crate::StoreError;
use std::future::Future;
use tiergate_types::{SessionToken, SubjectId};

/// Maps a session token to the subject it authenticates.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
///
/// # Absence vs Failure
///
/// - `Ok(Some(subject))` — the token authenticates `subject`
/// - `Ok(None)` — the token is unknown, expired, or revoked; not an error
///   by itself, callers decide whether absence is fatal
/// - `Err(StoreError)` — the backing session service could not answer
///
/// # Example
///
/// ```no_run
/// use tiergate_guard::{SessionProvider, StoreError};
/// use tiergate_types::SessionToken;
///
/// async fn who_is(provider: &impl SessionProvider, token: &SessionToken) -> Result<(), StoreError> {
///     match provider.subject_for(token).await? {
///         Some(subject) => println!("authenticated as {subject}"),
///         None => println!("no session"),
///     }
///     Ok(())
/// }
/// ```
pub trait SessionProvider: Send + Sync {
    /// Resolves the subject a token authenticates, if any.
    fn subject_for(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<Option<SubjectId>, StoreError>> + Send;
}
