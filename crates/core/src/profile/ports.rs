//! Port interfaces for borrower profile persistence
//!
//! A single process-wide record under a fixed storage key; there is no
//! multi-user keying. Writes are whole-record (last write wins).

use async_trait::async_trait;
use instaloan_domain::{BorrowerProfile, Result};

/// Trait for borrower profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load the stored profile, if one exists
    async fn get(&self) -> Result<Option<BorrowerProfile>>;

    /// Persist the whole profile record
    async fn save(&self, profile: BorrowerProfile) -> Result<()>;
}
