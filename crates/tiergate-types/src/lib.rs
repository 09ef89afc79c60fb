//! Core types for Tiergate.
//!
//! This crate provides the identity and role vocabulary shared by every
//! layer of the access guard.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Type Layer                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  tiergate-types   : SubjectId, SessionToken, Role, Profile  │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Guard Layer                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  tiergate-guard   : AccessGuard, resolution traits, errors  │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Runtime Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  tiergate-runtime : concrete session/profile backends       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Types live here (not in `tiergate-guard`) so that backends and call
//! sites can exchange [`Profile`] and [`Role`] values without depending
//! on guard logic.
//!
//! # Identifier Design
//!
//! Subject identifiers are UUID-based: they are shared with an external
//! authentication record, globally unique without coordination, and have
//! first-class serde support.
//!
//! # Example
//!
//! ```
//! use tiergate_types::{Profile, Role, SubjectId};
//!
//! let subject = SubjectId::new();
//! let profile = Profile::new(subject, Role::Member);
//!
//! assert_eq!(profile.role, Role::Member);
//! assert!(Role::Admin > Role::Support);
//! ```

mod id;
mod profile;
mod role;

pub use id::{SessionToken, SubjectId};
pub use profile::Profile;
pub use role::{Role, RoleParseError};
