//! services/app/src/adapters/store.rs
//!
//! File-backed state store, the concrete implementation of the `StateStore`
//! port from the `core` crate. One JSON document holds the two logical keys
//! of the persisted layout: the active-account pointer and the map from
//! email to that account's serialized snapshot.

use async_trait::async_trait;
use codegenio_core::domain::AccountState;
use codegenio_core::ports::{PortError, PortResult, StateStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

//=========================================================================================
// On-Disk Document
//=========================================================================================

/// The serialized layout of the whole store. Rewritten in full on every save.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    active_email: Option<String>,
    accounts: HashMap<String, AccountState>,
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A JSON-file store standing in for the browser's local storage.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a new `JsonFileStore` rooted at `path`. The file is created
    /// lazily on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the full document. A missing file is a cold start; a corrupt or
    /// unreadable one is logged and treated the same way.
    async fn read_document(&self) -> StoreDocument {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return StoreDocument::default()
            }
            Err(e) => {
                warn!("Failed to read state store {:?}: {}", self.path, e);
                return StoreDocument::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!("Ignoring corrupt state store {:?}: {}", self.path, e);
                StoreDocument::default()
            }
        }
    }

    async fn write_document(&self, document: &StoreDocument) -> PortResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PortError::Unexpected(e.to_string()))?;
            }
        }
        let raw = serde_json::to_string_pretty(document)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }
}

//=========================================================================================
// `StateStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load_active_account_state(&self) -> Option<AccountState> {
        let mut document = self.read_document().await;
        let email = document.active_email?;
        document.accounts.remove(&email)
    }

    async fn save_account_state(&self, email: &str, state: &AccountState) -> PortResult<()> {
        let mut document = self.read_document().await;
        document.accounts.insert(email.to_string(), state.clone());
        self.write_document(&document).await
    }

    async fn set_active_account(&self, email: Option<&str>) -> PortResult<()> {
        let mut document = self.read_document().await;
        document.active_email = email.map(str::to_string);
        self.write_document(&document).await
    }

    async fn account_exists(&self, email: &str) -> bool {
        self.read_document().await.accounts.contains_key(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codegenio_core::domain::{Account, Profile, SubscriptionTier};
    use uuid::Uuid;

    fn sample_state(email: &str) -> AccountState {
        let account = Account {
            id: Uuid::new_v4(),
            name: "Ana García".to_string(),
            email: email.to_string(),
            tier: SubscriptionTier::Family,
        };
        let profile = Profile {
            id: Uuid::new_v4(),
            account_id: account.id,
            name: "Ana".to_string(),
            avatar_color: "blue".to_string(),
            xp: 300,
            completed_lessons: vec!["ini-1".to_string(), "ini-2".to_string()],
            is_educator: false,
        };
        AccountState {
            active_profile_id: Some(profile.id),
            account: Some(account),
            profiles: vec![profile],
            institution_logo: None,
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("state.json"))
    }

    #[tokio::test]
    async fn save_then_load_round_trips_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let state = sample_state("ana@ejemplo.com");

        store
            .save_account_state("ana@ejemplo.com", &state)
            .await
            .unwrap();
        store
            .set_active_account(Some("ana@ejemplo.com"))
            .await
            .unwrap();

        assert_eq!(store.load_active_account_state().await, Some(state));
    }

    #[tokio::test]
    async fn missing_file_reads_as_cold_start() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_active_account_state().await, None);
        assert!(!store.account_exists("nadie@ejemplo.com").await);
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_cold_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, "{not json at all")
            .await
            .unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load_active_account_state().await, None);
        assert!(!store.account_exists("ana@ejemplo.com").await);
    }

    #[tokio::test]
    async fn pointer_can_be_cleared_without_dropping_accounts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let state = sample_state("ana@ejemplo.com");

        store
            .save_account_state("ana@ejemplo.com", &state)
            .await
            .unwrap();
        store
            .set_active_account(Some("ana@ejemplo.com"))
            .await
            .unwrap();
        store.set_active_account(None).await.unwrap();

        assert_eq!(store.load_active_account_state().await, None);
        assert!(store.account_exists("ana@ejemplo.com").await);
    }

    #[tokio::test]
    async fn save_overwrites_the_whole_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = sample_state("ana@ejemplo.com");
        let mut second = first.clone();
        second.profiles[0].xp = 900;
        second.institution_logo = Some("data:image/png;base64,AAAA".to_string());

        store
            .save_account_state("ana@ejemplo.com", &first)
            .await
            .unwrap();
        store
            .save_account_state("ana@ejemplo.com", &second)
            .await
            .unwrap();
        store
            .set_active_account(Some("ana@ejemplo.com"))
            .await
            .unwrap();

        assert_eq!(store.load_active_account_state().await, Some(second));
    }

    #[tokio::test]
    async fn accounts_are_partitioned_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let ana = sample_state("ana@ejemplo.com");
        let luis = sample_state("luis@ejemplo.com");

        store.save_account_state("ana@ejemplo.com", &ana).await.unwrap();
        store
            .save_account_state("luis@ejemplo.com", &luis)
            .await
            .unwrap();
        store
            .set_active_account(Some("luis@ejemplo.com"))
            .await
            .unwrap();

        assert_eq!(store.load_active_account_state().await, Some(luis));
    }
}
