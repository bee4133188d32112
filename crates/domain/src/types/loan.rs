//! Loan record and derived view types
//!
//! A single active loan persisted as JSON under the `loanDetails` key.
//! Everything beyond the stored fields (EMI amount, schedule, progress,
//! lifecycle state) is derived on every read and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TENURE_MONTHS;

fn default_tenure() -> u32 {
    DEFAULT_TENURE_MONTHS
}

/// The durable loan record.
///
/// `emi` is written once at creation for display parity with old records but
/// is never trusted: the canonical EMI amount is recomputed from
/// `amount`/`tenure_months` on every read. `approval_date` is set exactly
/// once by lazy initialization; `paid_emis` only ever moves forward and only
/// through the payment transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    pub amount: u64,
    #[serde(alias = "months", default = "default_tenure")]
    pub tenure_months: u32,
    #[serde(default)]
    pub interest_rate: f64,
    pub emi: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<DateTime<Utc>>,
    #[serde(rename = "paidEMIs", default)]
    pub paid_emis: u32,
    /// Monotonic write counter, reserved for optimistic-lock checks
    #[serde(default)]
    pub version: u64,
}

/// Derived lifecycle state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanState {
    /// Record exists but no screen has observed it post-approval yet
    Created,
    /// Approval date set, nothing repaid
    Approved,
    PartiallyPaid,
    FullyPaid,
}

impl LoanRecord {
    /// Compute the lifecycle state from the stored fields.
    ///
    /// `FullyPaid` is always this comparison, never a stored flag.
    #[must_use]
    pub fn state(&self) -> LoanState {
        if self.approval_date.is_none() {
            LoanState::Created
        } else if self.paid_emis == 0 {
            LoanState::Approved
        } else if self.paid_emis < self.tenure_months {
            LoanState::PartiallyPaid
        } else {
            LoanState::FullyPaid
        }
    }

    /// True once every installment has been paid.
    #[must_use]
    pub fn is_fully_paid(&self) -> bool {
        self.paid_emis >= self.tenure_months
    }
}

/// Status of a single schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    Paid,
    Active,
}

/// One row of the repayment schedule, 1-indexed by month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentView {
    pub month: u32,
    pub emi: u64,
    pub due_date: DateTime<Utc>,
    pub status: InstallmentStatus,
}

/// Repayment totals shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProgress {
    pub paid_amount: u64,
    pub remaining_amount: u64,
    /// Rounded, capped at 100
    pub percent: u32,
}

/// Payment methods offered on the pay-EMI screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Upi => "UPI",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
        };
        f.write_str(label)
    }
}

/// Receipt produced after a successful EMI payment.
///
/// Built only after the updated loan has been persisted in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Unique reference for this payment
    pub reference: String,
    /// EMI amount paid
    pub amount: u64,
    /// 1-indexed installment number just paid
    pub emi_number: u32,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
    pub loan_amount: u64,
    /// Always "SUCCESS" for a produced receipt
    pub status: String,
}
