//! Port interfaces for OTP code persistence
//!
//! Codes are stored as plain 6-digit strings under per-slot keys so that a
//! freshly mounted verification screen can compare against the most recently
//! generated code.

use async_trait::async_trait;
use instaloan_domain::{OtpSlot, Result};

/// Trait for persisting and retrieving generated OTP codes per slot
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Persist the most recently generated code for a slot
    async fn put_code(&self, slot: OtpSlot, code: &str) -> Result<()>;

    /// Read the most recently generated code for a slot, if any
    async fn get_code(&self, slot: OtpSlot) -> Result<Option<String>>;
}
