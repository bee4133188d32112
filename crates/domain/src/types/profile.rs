//! Borrower profile types
//!
//! The borrower profile is the single durable identity record, persisted as
//! JSON under the `@BasicInfoData` key. Field names stay camelCase on the
//! wire so existing device records keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the borrower earns; drives which professional-info fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "salaried")]
    Salaried,
    #[serde(rename = "self")]
    SelfEmployed,
}

/// Professional info captured during onboarding step 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    pub employment_type: EmploymentType,
    /// Required only for salaried borrowers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub monthly_income: u64,
}

/// The durable borrower record, created at the end of the basic-info step.
///
/// `pan` is write-once after creation; the profile store rejects any update
/// that tries to change it. `bank_verified` is never set true by any flow
/// (always pending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerProfile {
    pub full_name: String,
    pub mobile: String,
    pub pan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_image: Option<String>,
    pub aadhar: String,
    pub dob: DateTime<Utc>,
    pub email: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment: Option<EmploymentInfo>,
    #[serde(default)]
    pub pan_verified: bool,
    #[serde(default)]
    pub aadhar_verified: bool,
    #[serde(default)]
    pub bank_verified: bool,
    /// Monotonic write counter, reserved for optimistic-lock checks
    #[serde(default)]
    pub version: u64,
}

impl BorrowerProfile {
    /// Onboarding is complete only when both identity verifications passed
    /// and every required field is non-empty.
    #[must_use]
    pub fn is_onboarding_complete(&self) -> bool {
        self.pan_verified
            && self.aadhar_verified
            && !self.full_name.is_empty()
            && !self.mobile.is_empty()
            && !self.pan.is_empty()
            && !self.aadhar.is_empty()
            && !self.email.is_empty()
            && !self.account_number.is_empty()
            && !self.bank_name.is_empty()
            && !self.ifsc.is_empty()
            && !self.branch.is_empty()
    }
}

/// Input for profile creation at the end of the basic-info step.
///
/// The screen owns the verification booleans (flipped after PAN fetch/upload
/// and the Aadhaar OTP modal) and hands them over here.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub full_name: String,
    pub mobile: String,
    pub pan: String,
    pub pan_image: Option<String>,
    pub aadhar: String,
    pub dob: DateTime<Utc>,
    pub email: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub branch: String,
    pub pan_verified: bool,
    pub aadhar_verified: bool,
}

/// Partial update from the profile editor; `None` leaves a field untouched.
///
/// `pan` is carried only so the store can detect and reject mutation
/// attempts.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub pan: Option<String>,
    pub dob: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}
