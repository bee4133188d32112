//! Port interfaces for loan record persistence
//!
//! A single active loan per device under a fixed storage key. Writes are
//! whole-record read-modify-write, never field patches.

use async_trait::async_trait;
use instaloan_domain::{LoanRecord, Result};

/// Trait for loan record persistence and retrieval
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Load the stored loan record, if one exists
    async fn get(&self) -> Result<Option<LoanRecord>>;

    /// Persist the whole loan record
    async fn save(&self, loan: LoanRecord) -> Result<()>;
}
