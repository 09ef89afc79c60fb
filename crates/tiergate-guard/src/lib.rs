//! Access-guard primitives for Tiergate.
//!
//! This crate decides whether a subject may perform an action requiring a
//! given role, and resolves the subject's role-bearing profile on the way.
//!
//! # Authorization Model
//!
//! ```text
//! Decision = has_role( resolve(Session(WHO)).role , required )
//! ```
//!
//! | Layer | Type | Controls |
//! |-------|------|----------|
//! | [`Role`] rank | Enum | Which tier an action requires |
//! | [`SessionProvider`] | Trait | Who is calling (token → subject) |
//! | [`ProfileStore`] | Trait | The subject's current role (privileged read) |
//!
//! # Crate Architecture
//!
//! ```text
//! tiergate-types  (SubjectId, SessionToken, Role, Profile)
//!        ↑
//! tiergate-guard  ◄── THIS CRATE
//! (AccessGuard, SessionProvider, ProfileStore, ServiceCredential)
//!        ↑
//! tiergate-runtime (MemorySessionProvider, MemoryProfileStore)
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers** —
//!   `tiergate-runtime` provides concrete backends
//! - **One source of truth** — every decision routes through
//!   [`has_role`]; call sites never re-derive rank comparisons
//! - **Two failure tolerances** — [`AccessGuard::require_role`] aborts
//!   loudly at mutation entry points; [`AccessGuard::check_role`] degrades
//!   to `false` for render-time gating
//! - **Stateless and fresh** — every check re-resolves the profile; a role
//!   change takes effect on the very next request

pub mod error;
pub mod guard;
pub mod resolve;
pub mod session;
pub mod store;

pub use error::{AuthError, StoreError};
pub use guard::{has_role, AccessGuard};
pub use resolve::{resolve, Resolution};
pub use session::SessionProvider;
pub use store::{ProfileStore, ServiceCredential};

// Re-export the type vocabulary for convenience
pub use tiergate_types::{Profile, Role, SessionToken, SubjectId};
