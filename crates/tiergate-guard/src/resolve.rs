//! Profile resolution.
//!
//! Maps the caller's session credential to its role-bearing profile in
//! two sequential steps: session lookup, then one privileged profile
//! read. There is no fan-out — the profile fetch depends on the session
//! result — and no caching or retry; every request resolves fresh.

use crate::{ProfileStore, SessionProvider, StoreError};
use tiergate_types::{Profile, SessionToken, SubjectId};

/// Outcome of resolving a session credential to a profile.
///
/// The two absence cases are distinct non-fatal outcomes. Only the guard
/// operations turn them into hard errors; callers using [`resolve`]
/// directly decide for themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No token was presented, or the token authenticates nobody.
    NoSession,

    /// The session authenticates a subject, but no profile row exists
    /// for it yet.
    NoProfile(SubjectId),

    /// The subject's profile, role validated into the closed set.
    Found(Profile),
}

impl Resolution {
    /// Returns `true` if a profile was resolved.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the resolved profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Found(profile) => Some(profile),
            _ => None,
        }
    }

    /// Returns the authenticated subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<SubjectId> {
        match self {
            Self::NoSession => None,
            Self::NoProfile(subject) => Some(*subject),
            Self::Found(profile) => Some(profile.subject),
        }
    }
}

/// Resolves a session credential to its profile.
///
/// `None` short-circuits to [`Resolution::NoSession`] without touching
/// either backend. Backend failures propagate as [`StoreError`]; absence
/// at either step is an outcome, not an error.
pub async fn resolve<S, P>(
    sessions: &S,
    profiles: &P,
    token: Option<&SessionToken>,
) -> Result<Resolution, StoreError>
where
    S: SessionProvider,
    P: ProfileStore,
{
    let Some(token) = token else {
        return Ok(Resolution::NoSession);
    };

    let Some(subject) = sessions.subject_for(token).await? else {
        return Ok(Resolution::NoSession);
    };

    match profiles.fetch(subject).await? {
        Some(profile) => Ok(Resolution::Found(profile)),
        None => Ok(Resolution::NoProfile(subject)),
    }
}
