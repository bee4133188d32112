//! SQLite-backed loan record repository.
//!
//! Persists the single active loan as one JSON document under the
//! `loanDetails` key. Legacy records written with a `months` field load
//! through the domain type's alias, so this layer never rewrites field names.

use std::sync::Arc;

use async_trait::async_trait;
use instaloan_core::LoanRepository;
use instaloan_domain::constants::LOAN_STORE_KEY;
use instaloan_domain::{InstaLoanError, LoanRecord, Result};
use tokio::task;

use super::kv_store;
use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed loan record repository.
pub struct KvLoanRepository {
    db: Arc<DbManager>,
}

impl KvLoanRepository {
    /// Create a new repository with the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LoanRepository for KvLoanRepository {
    async fn get(&self) -> Result<Option<LoanRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Option<LoanRecord>> {
            let conn = db.get_connection()?;
            let raw = kv_store::get_value(&conn, LOAN_STORE_KEY).map_err(map_sql_error)?;
            raw.map(|json| serde_json::from_str(&json).map_err(map_serde_error)).transpose()
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, loan: LoanRecord) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let json = serde_json::to_string(&loan).map_err(map_serde_error)?;
            let conn = db.get_connection()?;
            kv_store::set_value(&conn, LOAN_STORE_KEY, &json).map_err(map_sql_error)
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
