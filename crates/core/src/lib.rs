//! # InstaLoan Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the device key-value records
//! - Use cases and services: OTP verification, borrower profile lifecycle,
//!   loan lifecycle, and the EMI payment transition
//!
//! ## Architecture Principles
//! - Only depends on `instaloan-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod loan;
pub mod otp;
pub mod payment;
pub mod profile;

// Re-export specific items to avoid ambiguity
pub use loan::ports::LoanRepository;
pub use loan::LoanService;
pub use otp::ports::OtpStore;
pub use otp::OtpService;
pub use payment::PaymentService;
pub use profile::ports::ProfileRepository;
pub use profile::ProfileService;
