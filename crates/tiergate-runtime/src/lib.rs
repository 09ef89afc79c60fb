//! Runtime backends for the Tiergate access guard.
//!
//! Trait definitions live in `tiergate-guard`; this crate provides the
//! concrete implementations:
//!
//! ```text
//! SessionProvider trait (tiergate-guard)   ← abstract definition
//!          │
//!          └── MemorySessionProvider (THIS CRATE)
//!
//! ProfileStore trait (tiergate-guard)      ← abstract definition
//!          │
//!          └── MemoryProfileStore (THIS CRATE)
//! ```
//!
//! The in-memory backends serve single-process deployments and tests. A
//! hosted-database backend implements the same traits against its client
//! SDK, with [`ProfileRow`] mirroring the row shape it reads.

mod profile_store;
mod session;

pub use profile_store::{MemoryProfileStore, ProfileRow};
pub use session::MemorySessionProvider;
