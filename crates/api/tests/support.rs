//! Shared context for command-surface integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use instaloan_api::AppContext;
use instaloan_domain::ProfileDraft;
use tempfile::TempDir;

/// Shared context for integration tests backed by an on-disk database.
pub struct TestContext {
    pub ctx: Arc<AppContext>,
    /// Keep temporary directory alive for the lifetime of the context.
    _temp_dir: TempDir,
}

/// Create a new test context with fresh database state.
pub fn setup_test_context() -> TestContext {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");
    let db_path = temp_dir.path().join("instaloan.db");

    let ctx = AppContext::new(&db_path).expect("failed to initialise application context");

    TestContext { ctx, _temp_dir: temp_dir }
}

/// A complete, verified basic-info draft.
pub fn sample_draft() -> ProfileDraft {
    ProfileDraft {
        full_name: "Vasanth Kumar".into(),
        mobile: "9876543210".into(),
        pan: "ABCDE1234F".into(),
        pan_image: None,
        aadhar: "123456789012".into(),
        dob: Utc::now(),
        email: "vasanth@example.com".into(),
        account_number: "12345678901".into(),
        bank_name: "State Bank".into(),
        ifsc: "SBIN0000001".into(),
        branch: "Chennai Main".into(),
        pan_verified: true,
        aadhar_verified: true,
    }
}
