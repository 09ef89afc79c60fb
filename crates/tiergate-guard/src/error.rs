//! Guard and resolution error types.
//!
//! Two layers, two enums:
//!
//! ```text
//! SessionProvider / ProfileStore ──► StoreError   (resolution layer)
//!           AccessGuard          ──► AuthError    (decision layer)
//! ```
//!
//! [`AuthError`] keeps denial (`Unauthorized`, `Forbidden`,
//! `ProfileNotFound`) distinct from backend failure (`Store`) so operators
//! can tell "denied" apart from "backing service unavailable".

use thiserror::Error;
use tiergate_types::{Role, RoleParseError, SubjectId};

/// Failure in the session or profile backend during resolution.
///
/// Absence is not a `StoreError`: an unknown token or a missing profile
/// row is reported as `Ok(None)` by the backend traits. This enum covers
/// the cases where the backend could not answer at all, or answered with
/// a record the closed role set rejects.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing service did not answer.
    #[error("{service} unavailable: {reason}")]
    Unavailable {
        /// Which backend failed ("session provider", "profile store").
        service: &'static str,
        /// Backend-specific detail.
        reason: String,
    },

    /// A stored role tag falls outside the closed set.
    ///
    /// Rejected rather than silently ranked; a deployment that wrote an
    /// unknown tag needs operator attention, not a default tier.
    #[error("profile carries an unknown role: {0}")]
    InvalidRole(#[from] RoleParseError),

    /// A stored record could not be decoded.
    #[error("malformed record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates an `Unavailable` error.
    pub fn unavailable(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            reason: reason.into(),
        }
    }
}

/// Outcome of a failed privileged check.
///
/// Callers at page-loader boundaries typically match on the variant:
/// `Unauthorized` redirects to login, `Forbidden` to an access-denied
/// view, `Store` to an error page.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authenticated session was present at the time of the check.
    #[error("unauthorized: no authenticated session")]
    Unauthorized,

    /// The subject's role rank is insufficient for the required rank.
    ///
    /// The message names both roles for diagnostics.
    #[error("forbidden: requires {required}, current role is {actual}")]
    Forbidden {
        /// The role the action requires.
        required: Role,
        /// The role the subject actually holds.
        actual: Role,
    },

    /// A session exists but no profile row is associated with it yet
    /// (e.g. a race between signup and profile provisioning).
    #[error("no profile found for {0}")]
    ProfileNotFound(SubjectId),

    /// The session or profile backend failed; not an authorization
    /// verdict.
    #[error("authorization backend failure: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns `true` if this is an authorization verdict (the caller was
    /// actually denied) rather than a backend failure.
    #[must_use]
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::Forbidden { .. } | Self::ProfileNotFound(_)
        )
    }
}
