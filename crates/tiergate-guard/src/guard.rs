//! The access guard.
//!
//! [`has_role`] is the single source of truth for rank comparisons.
//! [`AccessGuard`] wires it to session and profile backends and exposes
//! the two variants call sites need:
//!
//! | Operation | Consumer | On violation |
//! |-----------|----------|--------------|
//! | [`AccessGuard::require_role`] | server-side mutation entry points | returns [`AuthError`] |
//! | [`AccessGuard::check_role`] | render-time conditionals | returns `false` |

use crate::{resolve, AuthError, ProfileStore, Resolution, SessionProvider, StoreError};
use tiergate_types::{Profile, Role, SessionToken};

/// Returns `true` if `current` may perform an action requiring `required`.
///
/// Pure and total: `current.rank() >= required.rank()`. Every
/// authorization decision routes through this function; call sites must
/// not re-derive rank comparisons.
///
/// # Example
///
/// ```
/// use tiergate_guard::has_role;
/// use tiergate_types::Role;
///
/// assert!(has_role(Role::Admin, Role::Support));
/// assert!(!has_role(Role::User, Role::Member));
/// assert!(has_role(Role::SuperAdmin, Role::SuperAdmin));
/// ```
#[must_use]
pub fn has_role(current: Role, required: Role) -> bool {
    current.rank() >= required.rank()
}

/// Request-scoped authorization over pluggable backends.
///
/// Each check is stateless: one session lookup followed by at most one
/// profile read, sequential, fresh every time. No decision is cached, so
/// an administrative role change takes effect on the very next request.
///
/// # Example
///
/// ```no_run
/// use tiergate_guard::{AccessGuard, AuthError, ProfileStore, SessionProvider};
/// use tiergate_types::{Role, SessionToken};
///
/// async fn delete_coupon<S: SessionProvider, P: ProfileStore>(
///     guard: &AccessGuard<S, P>,
///     token: Option<&SessionToken>,
/// ) -> Result<(), AuthError> {
///     let profile = guard.require_role(token, Role::Admin).await?;
///     // ... perform the privileged mutation as `profile.subject` ...
///     # let _ = profile;
///     Ok(())
/// }
/// ```
pub struct AccessGuard<S, P> {
    sessions: S,
    profiles: P,
}

impl<S, P> AccessGuard<S, P>
where
    S: SessionProvider,
    P: ProfileStore,
{
    /// Creates a guard over the given backends.
    pub fn new(sessions: S, profiles: P) -> Self {
        Self { sessions, profiles }
    }

    /// Resolves the caller's profile without applying a rank requirement.
    ///
    /// Exposed for call sites that treat absence as non-fatal (e.g. a
    /// dashboard loader that renders a signed-out view on
    /// [`Resolution::NoSession`]).
    pub async fn resolve(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Resolution, StoreError> {
        resolve(&self.sessions, &self.profiles, token).await
    }

    /// Fail-loud variant: resolves the caller and demands `required`.
    ///
    /// Used at the entry of privileged server-side operations where a
    /// violation must abort the operation.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Unauthorized`] — no authenticated session
    /// - [`AuthError::ProfileNotFound`] — session exists, profile row
    ///   does not
    /// - [`AuthError::Forbidden`] — rank insufficient; names both roles
    /// - [`AuthError::Store`] — a backend failed; not a verdict
    pub async fn require_role(
        &self,
        token: Option<&SessionToken>,
        required: Role,
    ) -> Result<Profile, AuthError> {
        match self.resolve(token).await? {
            Resolution::NoSession => Err(AuthError::Unauthorized),
            Resolution::NoProfile(subject) => Err(AuthError::ProfileNotFound(subject)),
            Resolution::Found(profile) => {
                if has_role(profile.role, required) {
                    Ok(profile)
                } else {
                    tracing::warn!(
                        subject = %profile.subject,
                        required = %required,
                        actual = %profile.role,
                        "role check failed"
                    );
                    Err(AuthError::Forbidden {
                        required,
                        actual: profile.role,
                    })
                }
            }
        }
    }

    /// Fail-quiet variant: `true` if the caller holds `required`.
    ///
    /// Safe to call anywhere — every failure becomes `false`, including
    /// backend failures (fail-closed). Swallowed backend failures are
    /// logged at WARN so an outage is not mistaken for a wave of denials.
    pub async fn check_role(&self, token: Option<&SessionToken>, required: Role) -> bool {
        match self.require_role(token, required).await {
            Ok(_) => true,
            Err(AuthError::Store(err)) => {
                tracing::warn!(
                    required = %required,
                    error = %err,
                    "check_role: backend failure treated as denial"
                );
                false
            }
            Err(_) => false,
        }
    }
}
