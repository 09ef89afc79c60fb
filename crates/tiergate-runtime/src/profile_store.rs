//! In-memory profile store.
//!
//! Stores profile rows the way the external database does — with the
//! role as a text column — and validates the tag into the closed [`Role`]
//! set on every read. An unknown tag surfaces as
//! [`StoreError::InvalidRole`] rather than a default tier.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tiergate_guard::{ProfileStore, ServiceCredential, StoreError};
use tiergate_types::{Profile, Role, SubjectId};

/// A profile row as persisted, role still in wire form.
///
/// Mirrors the backing table's shape so a database-backed store can reuse
/// it directly as its deserialization target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// Row key, shared with the auth record.
    pub subject: SubjectId,
    /// Role tag as stored (text column).
    pub role: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// Contact email, if set.
    pub email: Option<String>,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

impl ProfileRow {
    /// Builds a row from a validated profile.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            subject: profile.subject,
            role: profile.role.as_str().to_string(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }

    /// Validates the row into a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRole`] if the stored tag is outside
    /// the closed set.
    pub fn into_profile(self) -> Result<Profile, StoreError> {
        let role: Role = self.role.parse()?;
        Ok(Profile {
            subject: self.subject,
            role,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
        })
    }
}

/// Thread-safe, in-memory profile table read under a privileged credential.
///
/// The external profile table's read policy depends on role lookups, so
/// it must be read with a policy-bypassing [`ServiceCredential`]; the
/// store takes ownership of it at construction to keep the capability's
/// blast radius to this one read path.
///
/// # Example
///
/// ```
/// use tiergate_guard::ServiceCredential;
/// use tiergate_runtime::MemoryProfileStore;
/// use tiergate_types::{Profile, Role, SubjectId};
///
/// let store = MemoryProfileStore::new(ServiceCredential::new("service-key"));
/// store.upsert(&Profile::new(SubjectId::new(), Role::Member));
/// ```
#[derive(Debug)]
pub struct MemoryProfileStore {
    /// Held for the lifetime of the store; the privileged read path.
    credential: ServiceCredential,
    rows: RwLock<HashMap<SubjectId, ProfileRow>>,
}

impl MemoryProfileStore {
    /// Creates an empty store owning the privileged credential.
    #[must_use]
    pub fn new(credential: ServiceCredential) -> Self {
        Self {
            credential,
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the credential this store reads under.
    #[must_use]
    pub fn credential(&self) -> &ServiceCredential {
        &self.credential
    }

    /// Inserts or replaces a profile row.
    pub fn upsert(&self, profile: &Profile) {
        self.upsert_row(ProfileRow::from_profile(profile));
    }

    /// Inserts or replaces a raw row, tag unvalidated.
    ///
    /// Validation happens on read, matching the external database where
    /// writes from other services cannot be intercepted here.
    pub fn upsert_row(&self, row: ProfileRow) {
        match self.rows.write() {
            Ok(mut rows) => {
                rows.insert(row.subject, row);
            }
            Err(e) => {
                tracing::error!("profile store: lock poisoned on upsert: {e}");
            }
        }
    }

    /// Changes a subject's role.
    ///
    /// Takes effect on the next request — the guard never caches
    /// decisions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the subject has no row.
    pub fn set_role(&self, subject: SubjectId, role: Role) -> Result<(), StoreError> {
        match self.rows.write() {
            Ok(mut rows) => match rows.get_mut(&subject) {
                Some(row) => {
                    row.role = role.as_str().to_string();
                    Ok(())
                }
                None => Err(StoreError::unavailable(
                    "profile store",
                    format!("no row for {subject}"),
                )),
            },
            Err(e) => {
                tracing::error!("profile store: lock poisoned on set_role: {e}");
                Err(StoreError::unavailable("profile store", "lock poisoned"))
            }
        }
    }

    /// Removes a subject's row. Removing an absent row is a no-op.
    pub fn remove(&self, subject: SubjectId) {
        match self.rows.write() {
            Ok(mut rows) => {
                rows.remove(&subject);
            }
            Err(e) => {
                tracing::error!("profile store: lock poisoned on remove: {e}");
            }
        }
    }

    /// Returns the number of stored rows.
    pub fn row_count(&self) -> usize {
        self.rows.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn fetch(&self, subject: SubjectId) -> Result<Option<Profile>, StoreError> {
        let row = match self.rows.read() {
            Ok(rows) => rows.get(&subject).cloned(),
            Err(e) => {
                tracing::error!("profile store: lock poisoned on fetch: {e}");
                return Err(StoreError::unavailable("profile store", "lock poisoned"));
            }
        };

        match row {
            Some(row) => row.into_profile().map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryProfileStore {
        MemoryProfileStore::new(ServiceCredential::new("test-key"))
    }

    #[tokio::test]
    async fn missing_row_fetches_none() {
        let store = store();
        let fetched = store.fetch(SubjectId::new()).await.expect("fetch");
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn upsert_then_fetch_roundtrips() {
        let store = store();
        let profile = Profile::new(SubjectId::new(), Role::Member).with_name("Ada");
        store.upsert(&profile);

        let fetched = store.fetch(profile.subject).await.expect("fetch");
        assert_eq!(fetched, Some(profile));
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn set_role_takes_effect_on_next_fetch() {
        let store = store();
        let profile = Profile::new(SubjectId::new(), Role::Member);
        store.upsert(&profile);

        store.set_role(profile.subject, Role::Support).expect("set_role");

        let fetched = store
            .fetch(profile.subject)
            .await
            .expect("fetch")
            .expect("row exists");
        assert_eq!(fetched.role, Role::Support);
    }

    #[test]
    fn set_role_on_missing_row_fails() {
        let store = store();
        let err = store
            .set_role(SubjectId::new(), Role::Admin)
            .expect_err("no row");
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn unknown_role_tag_is_rejected_on_read() {
        let store = store();
        let subject = SubjectId::new();
        store.upsert_row(ProfileRow {
            subject,
            role: "owner".to_string(),
            name: None,
            email: None,
            avatar_url: None,
        });

        let err = store.fetch(subject).await.expect_err("invalid tag");
        assert!(matches!(err, StoreError::InvalidRole(_)));
        assert!(err.to_string().contains("owner"));
    }

    #[tokio::test]
    async fn remove_deletes_row() {
        let store = store();
        let profile = Profile::new(SubjectId::new(), Role::User);
        store.upsert(&profile);
        store.remove(profile.subject);

        let fetched = store.fetch(profile.subject).await.expect("fetch");
        assert!(fetched.is_none());
        assert_eq!(store.row_count(), 0);
    }

    #[test]
    fn row_roundtrip_through_json() {
        let profile = Profile::new(SubjectId::new(), Role::Admin).with_email("a@b.c");
        let row = ProfileRow::from_profile(&profile);
        let json = serde_json::to_string(&row).expect("serialize row");
        let back: ProfileRow = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(back.into_profile().expect("valid role"), profile);
    }

    #[test]
    fn credential_is_reachable_but_redacted() {
        let store = store();
        assert_eq!(store.credential().expose(), "test-key");
        assert!(!format!("{store:?}").contains("test-key"));
    }
}
