//! EMI payment transition - core business logic
//!
//! The single mutation that advances a loan's paid-installment count. After
//! the initial zero-initialization this is the only legitimate writer of
//! `paid_emis`; any other writer touching that field is a correctness
//! violation.

use std::sync::Arc;

use chrono::Utc;
use instaloan_domain::amortization::compute_emi;
use instaloan_domain::{InstaLoanError, LoanRecord, PaymentMethod, PaymentReceipt, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::loan::ports::LoanRepository;

/// EMI payment service
pub struct PaymentService {
    loans: Arc<dyn LoanRepository>,
}

impl PaymentService {
    /// Create a new payment service
    pub fn new(loans: Arc<dyn LoanRepository>) -> Self {
        Self { loans }
    }

    /// Pay the next unpaid installment.
    ///
    /// Preconditions are checked before any mutation: a payment method must
    /// be selected and the loan must not already be fully repaid. The loan
    /// is re-read from storage (never trusted from a screen's cached copy),
    /// `paid_emis` advances by exactly one, and the whole record is
    /// persisted before the receipt is produced. A persistence failure
    /// leaves the stored record unchanged and no receipt is issued.
    pub async fn pay_next_installment(
        &self,
        method: Option<PaymentMethod>,
    ) -> Result<(LoanRecord, PaymentReceipt)> {
        let Some(method) = method else {
            return Err(InstaLoanError::MissingPaymentMethod);
        };

        let mut loan = self
            .loans
            .get()
            .await?
            .ok_or_else(|| InstaLoanError::NotFound("loan record".into()))?;

        if loan.is_fully_paid() {
            warn!(paid_emis = loan.paid_emis, "payment attempted on completed loan");
            return Err(InstaLoanError::LoanCompleted);
        }

        loan.paid_emis += 1;
        loan.version += 1;
        self.loans.save(loan.clone()).await?;

        let emi = compute_emi(loan.amount, loan.tenure_months);
        let receipt = PaymentReceipt {
            reference: Uuid::new_v4().to_string(),
            amount: emi,
            emi_number: loan.paid_emis,
            method,
            paid_at: Utc::now(),
            loan_amount: loan.amount,
            status: "SUCCESS".to_string(),
        };

        info!(
            emi_number = receipt.emi_number,
            amount = receipt.amount,
            method = %receipt.method,
            "EMI payment recorded"
        );
        Ok((loan, receipt))
    }
}
