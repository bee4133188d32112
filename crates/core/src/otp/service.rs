//! OTP verifier service - core business logic
//!
//! Generates uniformly random 6-digit codes (zero-padded, so `"004821"` is a
//! legal code), persists them per slot, and compares user input by exact
//! string equality. The verifier holds no "verified" state of its own; on a
//! match the caller flips the relevant verification flag.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use instaloan_domain::constants::{OTP_CODE_LENGTH, OTP_RESEND_COOLDOWN_SECS};
use instaloan_domain::{OtpSlot, Result};
use parking_lot::Mutex;
use rand::Rng;
use tracing::info;

use super::ports::OtpStore;

/// OTP verifier service
pub struct OtpService {
    store: Arc<dyn OtpStore>,
    /// When each slot's code was last generated; drives the resend countdown
    generated_at: Mutex<HashMap<OtpSlot, DateTime<Utc>>>,
}

impl OtpService {
    /// Create a new OTP service
    pub fn new(store: Arc<dyn OtpStore>) -> Self {
        Self { store, generated_at: Mutex::new(HashMap::new()) }
    }

    /// Generate a fresh code for the slot, persist it, and start the resend
    /// countdown.
    ///
    /// The code is logged so the demo user can read it; there is no real
    /// delivery channel.
    pub async fn generate(&self, slot: OtpSlot) -> Result<String> {
        let code = random_code();
        self.store.put_code(slot, &code).await?;
        self.generated_at.lock().insert(slot, Utc::now());
        info!(slot = ?slot, code = %code, "generated OTP");
        Ok(code)
    }

    /// Compare `candidate` against the most recently generated code for the
    /// slot.
    ///
    /// Exact string comparison: no numeric coercion, so `"4821"` never
    /// matches `"004821"`. A missing or unreadable stored code verifies as a
    /// mismatch. Mismatch has no side effect.
    pub async fn verify(&self, slot: OtpSlot, candidate: &str) -> Result<bool> {
        let stored = self.store.get_code(slot).await?;
        Ok(stored.as_deref() == Some(candidate))
    }

    /// Generate a new code for the slot and reset its 30-second countdown.
    ///
    /// The other slot's code is untouched.
    pub async fn resend(&self, slot: OtpSlot) -> Result<String> {
        self.generate(slot).await
    }

    /// Seconds left until the resend action unlocks for this slot.
    ///
    /// Purely UI gating; nothing expires server-side because there is no
    /// server.
    #[must_use]
    pub fn resend_remaining_secs(&self, slot: OtpSlot) -> u64 {
        let generated = self.generated_at.lock().get(&slot).copied();
        match generated {
            Some(at) => {
                let elapsed = Utc::now().signed_duration_since(at).num_seconds().max(0) as u64;
                OTP_RESEND_COOLDOWN_SECS.saturating_sub(elapsed)
            }
            None => 0,
        }
    }

    /// True once the countdown for this slot has elapsed.
    #[must_use]
    pub fn can_resend(&self, slot: OtpSlot) -> bool {
        self.resend_remaining_secs(slot) == 0
    }
}

/// Uniformly random numeric code, zero-padded to six digits.
fn random_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:0width$}", width = OTP_CODE_LENGTH)
}
