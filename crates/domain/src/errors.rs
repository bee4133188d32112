//! Error types used throughout the application
//!
//! Every failure in this system is user-recoverable: validation problems are
//! corrected inline, OTP mismatches are re-prompted, storage failures leave
//! prior state untouched and surface a generic retry, and payment
//! precondition violations are rejected before any mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for InstaLoan
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum InstaLoanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Incorrect OTP, try again")]
    OtpMismatch,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Please choose a payment option")]
    MissingPaymentMethod,

    #[error("Loan completed: all EMIs are already paid")]
    LoanCompleted,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for InstaLoan operations
pub type Result<T> = std::result::Result<T, InstaLoanError>;
