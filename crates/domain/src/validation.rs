//! Field validation rules for borrower identity and bank details
//!
//! PAN, Aadhaar and IFSC are fixed-pattern identifiers, not checksummed or
//! externally verified. Account numbers get *soft* per-keystroke feedback and
//! only become a hard block at submit time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MAX_ACCOUNT_NUMBER_DIGITS, MIN_ACCOUNT_NUMBER_DIGITS};

static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN regex should compile"));

static AADHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("Aadhaar regex should compile"));

static IFSC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("IFSC regex should compile"));

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile regex should compile"));

/// Uppercase a PAN or IFSC candidate the way the entry field does.
#[must_use]
pub fn normalize_code(input: &str) -> String {
    input.to_uppercase()
}

/// PAN: five uppercase letters, four digits, one uppercase letter.
#[must_use]
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(pan)
}

/// Aadhaar: exactly twelve digits.
#[must_use]
pub fn is_valid_aadhar(aadhar: &str) -> bool {
    AADHAR_REGEX.is_match(aadhar)
}

/// IFSC: four uppercase letters, a literal `0`, six alphanumerics.
#[must_use]
pub fn is_valid_ifsc(ifsc: &str) -> bool {
    IFSC_REGEX.is_match(ifsc)
}

/// Mobile number: exactly ten digits.
#[must_use]
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}

/// Hard account-number rule applied at submit: digits only, 11-18 long.
#[must_use]
pub fn is_valid_account_number(account: &str) -> bool {
    account.len() >= MIN_ACCOUNT_NUMBER_DIGITS
        && account.len() <= MAX_ACCOUNT_NUMBER_DIGITS
        && account.chars().all(|c| c.is_ascii_digit())
}

/// Soft per-keystroke feedback for the account number field.
///
/// Returns `None` once the value is acceptable. The messages match what the
/// entry screen shows under the field while the user is still typing.
#[must_use]
pub fn account_number_issue(account: &str) -> Option<String> {
    if !account.chars().all(|c| c.is_ascii_digit()) {
        return Some("Account number must contain only digits".to_string());
    }
    if account.len() < MIN_ACCOUNT_NUMBER_DIGITS {
        return Some(format!(
            "Minimum {} digits ({}/{})",
            MIN_ACCOUNT_NUMBER_DIGITS,
            account.len(),
            MIN_ACCOUNT_NUMBER_DIGITS
        ));
    }
    if account.len() > MAX_ACCOUNT_NUMBER_DIGITS {
        return Some(format!("Max {MAX_ACCOUNT_NUMBER_DIGITS} digits allowed"));
    }
    None
}
