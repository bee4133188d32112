//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use instaloan_core::{
    LoanRepository, LoanService, OtpService, OtpStore, PaymentService, ProfileRepository,
    ProfileService,
};
use instaloan_domain::Result;
use instaloan_infra::{DbManager, KvLoanRepository, KvOtpStore, KvProfileRepository};
use tracing::info;

const POOL_SIZE: u32 = 8;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub db: Arc<DbManager>,
    pub otp: Arc<OtpService>,
    pub profiles: Arc<ProfileService>,
    pub loans: Arc<LoanService>,
    pub payments: Arc<PaymentService>,
}

impl AppContext {
    /// Build the full service graph over a SQLite database at `db_path`.
    ///
    /// Runs schema migrations before any repository is handed out.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Arc<Self>> {
        let db = Arc::new(DbManager::new(db_path, POOL_SIZE)?);
        db.run_migrations()?;

        let otp_store: Arc<dyn OtpStore> = Arc::new(KvOtpStore::new(Arc::clone(&db)));
        let profile_repository: Arc<dyn ProfileRepository> =
            Arc::new(KvProfileRepository::new(Arc::clone(&db)));
        let loan_repository: Arc<dyn LoanRepository> =
            Arc::new(KvLoanRepository::new(Arc::clone(&db)));

        let otp = Arc::new(OtpService::new(otp_store));
        let profiles = Arc::new(ProfileService::new(profile_repository));
        let loans = Arc::new(LoanService::new(Arc::clone(&loan_repository)));
        let payments = Arc::new(PaymentService::new(loan_repository));

        info!(db_path = %db.path().display(), "application context initialised");

        Ok(Arc::new(Self { db, otp, profiles, loans, payments }))
    }

    /// Verify the database behind the context is reachable.
    pub fn health_check(&self) -> Result<()> {
        self.db.health_check()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn context_builds_and_passes_health_check() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let ctx = AppContext::new(temp_dir.path().join("app.db")).expect("context built");

        ctx.health_check().expect("health check passed");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fresh_context_has_no_profile_or_loan() {
        let temp_dir = TempDir::new().expect("temp dir created");
        let ctx = AppContext::new(temp_dir.path().join("app.db")).expect("context built");

        assert!(ctx.profiles.get().await.expect("profile read").is_none());
        assert!(ctx.loans.get().await.expect("loan read").is_none());
    }
}
