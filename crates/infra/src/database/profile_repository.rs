//! SQLite-backed borrower profile repository.
//!
//! Persists the whole profile as one JSON document under the
//! `@BasicInfoData` key. All database operations run in `spawn_blocking` to
//! avoid blocking the async runtime.

use std::sync::Arc;

use async_trait::async_trait;
use instaloan_core::ProfileRepository;
use instaloan_domain::constants::PROFILE_STORE_KEY;
use instaloan_domain::{BorrowerProfile, InstaLoanError, Result};
use tokio::task;

use super::kv_store;
use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed borrower profile repository.
pub struct KvProfileRepository {
    db: Arc<DbManager>,
}

impl KvProfileRepository {
    /// Create a new repository with the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for KvProfileRepository {
    async fn get(&self) -> Result<Option<BorrowerProfile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Option<BorrowerProfile>> {
            let conn = db.get_connection()?;
            let raw = kv_store::get_value(&conn, PROFILE_STORE_KEY).map_err(map_sql_error)?;
            raw.map(|json| serde_json::from_str(&json).map_err(map_serde_error)).transpose()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, profile: BorrowerProfile) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let json = serde_json::to_string(&profile).map_err(map_serde_error)?;
            let conn = db.get_connection()?;
            kv_store::set_value(&conn, PROFILE_STORE_KEY, &json).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

fn map_sql_error(err: rusqlite::Error) -> InstaLoanError {
    InstaLoanError::from(InfraError::from(err))
}

fn map_serde_error(err: serde_json::Error) -> InstaLoanError {
    InstaLoanError::from(InfraError::from(err))
}

fn map_join_error(err: task::JoinError) -> InstaLoanError {
    InstaLoanError::from(InfraError::from(err))
}

// ============================================================================
// Tests
// ============================================================================
