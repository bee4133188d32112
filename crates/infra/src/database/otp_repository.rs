//! SQLite-backed OTP code store.
//!
//! Codes are plain 6-digit strings stored under the per-slot keys `userOtp`
//! and `aadharOtp`. The slots never share a row.

use std::sync::Arc;

use async_trait::async_trait;
use instaloan_core::OtpStore;
use instaloan_domain::{InstaLoanError, OtpSlot, Result};
use tokio::task;

use super::kv_store;
use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed OTP code store.
pub struct KvOtpStore {
    db: Arc<DbManager>,
}

impl KvOtpStore {
    /// Create a new store with the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpStore for KvOtpStore {
    async fn put_code(&self, slot: OtpSlot, code: &str) -> Result<()> {
        let db = Arc::clone(&self.db);
        let code = code.to_string();

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            kv_store::set_value(&conn, slot.store_key(), &code).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_code(&self, slot: OtpSlot) -> Result<Option<String>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Option<String>> {
            let conn = db.get_connection()?;
            kv_store::get_value(&conn, slot.store_key()).map_err(map_sql_error)
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

fn map_join_error(err: task::JoinError) -> InstaLoanError {
    InstaLoanError::from(InfraError::from(err))
}

// ============================================================================
// Tests
// ============================================================================
