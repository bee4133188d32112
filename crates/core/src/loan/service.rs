//! Loan lifecycle service - core business logic
//!
//! Owns loan creation at the end of the final-steps screen and the lazy,
//! idempotent approval initialization that whichever screen loads the record
//! first performs. Schedule/progress derivation stays in the domain
//! amortization engine; this service only moves the record through storage.

use std::sync::Arc;

use chrono::Utc;
use instaloan_domain::amortization::compute_emi;
use instaloan_domain::{InstaLoanError, LoanRecord, Result};
use tracing::info;

use super::ports::LoanRepository;

/// Loan lifecycle service
pub struct LoanService {
    repository: Arc<dyn LoanRepository>,
}

impl LoanService {
    /// Create a new loan service
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self { repository }
    }

    /// Load the stored loan record, if any.
    pub async fn get(&self) -> Result<Option<LoanRecord>> {
        self.repository.get().await
    }

    /// Create the loan record when the final-steps screen completes.
    ///
    /// Approval date and paid count stay unset here; they are initialized
    /// lazily by [`Self::ensure_approval_initialized`] on first
    /// post-approval read. The stored `emi` field is display-only.
    pub async fn open_loan(
        &self,
        amount: u64,
        tenure_months: u32,
        interest_rate: f64,
    ) -> Result<LoanRecord> {
        if amount == 0 {
            return Err(InstaLoanError::Validation("Loan amount must be positive".into()));
        }
        if tenure_months == 0 {
            return Err(InstaLoanError::Validation("Tenure must be positive".into()));
        }

        let loan = LoanRecord {
            amount,
            tenure_months,
            interest_rate,
            emi: compute_emi(amount, tenure_months),
            approval_date: None,
            paid_emis: 0,
            version: 0,
        };

        self.repository.save(loan.clone()).await?;
        info!(amount, tenure_months, "opened loan record");
        Ok(loan)
    }

    /// Lazily initialize approval date and paid count, exactly once.
    ///
    /// Check-then-set against the *persisted* record, never an in-memory
    /// flag: multiple screens call this independently on load and only the
    /// first observer of an unapproved loan may write. Calling it twice
    /// yields the same approval date and paid count as calling it once.
    pub async fn ensure_approval_initialized(&self) -> Result<Option<LoanRecord>> {
        let Some(mut loan) = self.repository.get().await? else {
            return Ok(None);
        };

        if loan.approval_date.is_some() {
            return Ok(Some(loan));
        }

        loan.approval_date = Some(Utc::now());
        loan.paid_emis = 0;
        loan.version += 1;
        self.repository.save(loan.clone()).await?;
        info!(approval_date = ?loan.approval_date, "initialized loan approval");
        Ok(Some(loan))
    }
}
