//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Storage keys (the persisted wire format of the app)
pub const PROFILE_STORE_KEY: &str = "@BasicInfoData";
pub const LOAN_STORE_KEY: &str = "loanDetails";
pub const LOGIN_OTP_STORE_KEY: &str = "userOtp";
pub const AADHAR_OTP_STORE_KEY: &str = "aadharOtp";

// OTP configuration
pub const OTP_CODE_LENGTH: usize = 6;
pub const OTP_RESEND_COOLDOWN_SECS: u64 = 30;

// Loan defaults and customization bounds
pub const DEFAULT_TENURE_MONTHS: u32 = 8;
pub const MIN_LOAN_AMOUNT: u64 = 5_000;
pub const MAX_LOAN_AMOUNT: u64 = 100_000;
pub const LOAN_AMOUNT_STEP: u64 = 1_000;
pub const MIN_TENURE_MONTHS: u32 = 3;
pub const MAX_TENURE_MONTHS: u32 = 18;

// Decorative annual-style rate stored on the record; never compounded by the
// canonical engine
pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 1.5;

// Monthly rate used only by the illustrative pre-approval calculator
pub const CALCULATOR_MONTHLY_RATE: f64 = 0.015;

// Bank account number bounds (soft validation until submit)
pub const MIN_ACCOUNT_NUMBER_DIGITS: usize = 11;
pub const MAX_ACCOUNT_NUMBER_DIGITS: usize = 18;

// Fixed-delay screen transitions
pub const PROFILE_ANALYSIS_DELAY_SECS: u64 = 4;
pub const THANK_YOU_DELAY_SECS: u64 = 5;
