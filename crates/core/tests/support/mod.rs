//! In-memory fakes for the core repository ports
//!
//! Deterministic stand-ins for the device key-value store, with optional
//! write-failure injection for persistence-error paths.

// Not every test binary uses every fake.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use instaloan_core::{LoanRepository, OtpStore, ProfileRepository};
use instaloan_domain::{BorrowerProfile, InstaLoanError, LoanRecord, OtpSlot, Result};
use parking_lot::Mutex;

/// In-memory fake for `OtpStore`.
#[derive(Default)]
pub struct InMemoryOtpStore {
    codes: Mutex<HashMap<OtpSlot, String>>,
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put_code(&self, slot: OtpSlot, code: &str) -> Result<()> {
        self.codes.lock().insert(slot, code.to_string());
        Ok(())
    }

    async fn get_code(&self, slot: OtpSlot) -> Result<Option<String>> {
        Ok(self.codes.lock().get(&slot).cloned())
    }
}

/// In-memory fake for `ProfileRepository`.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profile: Mutex<Option<BorrowerProfile>>,
}

impl InMemoryProfileRepository {
    /// Seed the fake with an existing profile.
    pub fn with_profile(profile: BorrowerProfile) -> Self {
        Self { profile: Mutex::new(Some(profile)) }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> Result<Option<BorrowerProfile>> {
        Ok(self.profile.lock().clone())
    }

    async fn save(&self, profile: BorrowerProfile) -> Result<()> {
        *self.profile.lock() = Some(profile);
        Ok(())
    }
}

/// In-memory fake for `LoanRepository` with write-failure injection.
#[derive(Default)]
pub struct InMemoryLoanRepository {
    loan: Mutex<Option<LoanRecord>>,
    fail_next_save: AtomicBool,
}

impl InMemoryLoanRepository {
    /// Seed the fake with an existing loan record.
    pub fn with_loan(loan: LoanRecord) -> Self {
        Self { loan: Mutex::new(Some(loan)), fail_next_save: AtomicBool::new(false) }
    }

    /// Make the next `save` call fail with a storage error.
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Current stored record, for assertions.
    pub fn stored(&self) -> Option<LoanRecord> {
        self.loan.lock().clone()
    }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn get(&self) -> Result<Option<LoanRecord>> {
        Ok(self.loan.lock().clone())
    }

    async fn save(&self, loan: LoanRecord) -> Result<()> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(InstaLoanError::Storage("simulated write failure".into()));
        }
        *self.loan.lock() = Some(loan);
        Ok(())
    }
}

/// A complete, verified profile draft for flow tests.
pub fn sample_draft() -> instaloan_domain::ProfileDraft {
    instaloan_domain::ProfileDraft {
        full_name: "Vasanth Kumar".into(),
        mobile: "9876543210".into(),
        pan: "ABCDE1234F".into(),
        pan_image: None,
        aadhar: "123456789012".into(),
        dob: chrono::Utc::now(),
        email: "vasanth@example.com".into(),
        account_number: "12345678901".into(),
        bank_name: "State Bank".into(),
        ifsc: "SBIN0000001".into(),
        branch: "Chennai Main".into(),
        pan_verified: true,
        aadhar_verified: true,
    }
}

/// Shorthand used across the integration tests.
pub fn arc<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
