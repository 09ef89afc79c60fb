//! Profile store abstraction and the privileged read credential.
//!
//! The profile table's own read policy may depend on role lookups, so
//! reading it with the caller's restricted credential would recurse. The
//! [`ProfileStore`] read path therefore runs under a [`ServiceCredential`]
//! that bypasses row-level policies — a capability held by the store, not
//! by call sites.

use crate::StoreError;
use std::future::Future;
use tiergate_types::{Profile, SubjectId};

/// Capability credential for the policy-bypassing profile read path.
///
/// Modeled as a distinct type so its blast radius stays auditable: only a
/// [`ProfileStore`] construction site can hold one, and it is deliberately
/// not `Clone` — a second copy requires going back to the secret source.
///
/// # Why Redacted `Debug`?
///
/// The credential bypasses row-level authorization. Its value must never
/// reach logs or error messages.
pub struct ServiceCredential {
    secret: String,
}

impl ServiceCredential {
    /// Wraps the privileged secret (e.g. a service-role key from the
    /// deployment environment).
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exposes the raw secret for handing to a backing-store client.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ServiceCredential(<redacted>)")
    }
}

/// Reads profile records by subject id under the privileged credential.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
///
/// # Absence vs Failure
///
/// - `Ok(Some(profile))` — the subject's profile row, role validated into
///   the closed set
/// - `Ok(None)` — no profile row yet (race between signup and profile
///   provisioning); callers decide whether to escalate
/// - `Err(StoreError)` — the backing store failed, or the stored role tag
///   is outside the closed set ([`StoreError::InvalidRole`])
pub trait ProfileStore: Send + Sync {
    /// Fetches the profile for a subject, bypassing row-level policies.
    fn fetch(
        &self,
        subject: SubjectId,
    ) -> impl Future<Output = Result<Option<Profile>, StoreError>> + Send;
}
