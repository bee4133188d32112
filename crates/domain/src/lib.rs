//! # InstaLoan Domain
//!
//! Business domain types and models for InstaLoan Pro.
//!
//! This crate contains:
//! - Domain data types (BorrowerProfile, LoanRecord, receipts, etc.)
//! - Domain error types and Result definitions
//! - Field validation rules (PAN, Aadhaar, IFSC, account number)
//! - The amortization engine (pure EMI/schedule/progress math)
//! - Domain constants (storage keys, tenure defaults, OTP settings)
//!
//! ## Architecture
//! - No dependencies on other InstaLoan crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod amortization;
pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
