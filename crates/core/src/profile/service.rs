//! Borrower profile service - core business logic
//!
//! Creation happens once at the end of the basic-info step and gates the
//! wizard: both identity verifications must already be true. Updates come
//! from the profile editor and merge into the stored record; PAN is
//! write-once and the store rejects any attempt to change it.

use std::sync::Arc;

use instaloan_domain::validation::{
    is_valid_aadhar, is_valid_account_number, is_valid_ifsc, is_valid_mobile, is_valid_pan,
    normalize_code,
};
use instaloan_domain::{
    BorrowerProfile, EmploymentInfo, EmploymentType, InstaLoanError, ProfileDraft, ProfileUpdate,
    Result,
};
use tracing::info;

use super::ports::ProfileRepository;

/// Borrower profile service
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Load the stored profile, if any.
    pub async fn get(&self) -> Result<Option<BorrowerProfile>> {
        self.repository.get().await
    }

    /// Compose and persist the borrower record from the basic-info step.
    ///
    /// Rejects unless both PAN and Aadhaar were verified on-screen, every
    /// required identity field is present, and the bank detail tuple passes
    /// its hard validation rules. PAN and IFSC are uppercased the way the
    /// entry fields do it before validation, so the stored record is always
    /// canonical. Success is what allows the onboarding flow to advance.
    pub async fn create(&self, draft: ProfileDraft) -> Result<BorrowerProfile> {
        let pan = normalize_code(&draft.pan);
        let ifsc = normalize_code(&draft.ifsc);

        if !draft.pan_verified {
            return Err(InstaLoanError::Validation("PAN not verified".into()));
        }
        if !draft.aadhar_verified {
            return Err(InstaLoanError::Validation("Aadhar not verified".into()));
        }
        if draft.full_name.is_empty() || draft.email.is_empty() {
            return Err(InstaLoanError::Validation("Fill all required fields".into()));
        }
        if !is_valid_mobile(&draft.mobile) {
            return Err(InstaLoanError::Validation("Enter a valid 10-digit mobile number".into()));
        }
        if !is_valid_pan(&pan) {
            return Err(InstaLoanError::Validation("Enter a valid PAN".into()));
        }
        if !is_valid_aadhar(&draft.aadhar) {
            return Err(InstaLoanError::Validation("Enter 12-digit Aadhar".into()));
        }
        if draft.bank_name.is_empty() || draft.branch.is_empty() {
            return Err(InstaLoanError::Validation("Fill all bank details".into()));
        }
        if !is_valid_account_number(&draft.account_number) {
            return Err(InstaLoanError::Validation("Enter a valid account number".into()));
        }
        if !is_valid_ifsc(&ifsc) {
            return Err(InstaLoanError::Validation("Invalid IFSC (SBIN0000001 format)".into()));
        }

        let profile = BorrowerProfile {
            full_name: draft.full_name,
            mobile: draft.mobile,
            pan,
            pan_image: draft.pan_image,
            aadhar: draft.aadhar,
            dob: draft.dob,
            email: draft.email,
            account_number: draft.account_number,
            bank_name: draft.bank_name,
            ifsc,
            branch: draft.branch,
            address: None,
            city: None,
            state: None,
            pincode: None,
            employment: None,
            pan_verified: draft.pan_verified,
            aadhar_verified: draft.aadhar_verified,
            // No flow ever verifies the bank account; stays pending
            bank_verified: false,
            version: 0,
        };

        self.repository.save(profile.clone()).await?;
        info!(mobile = %profile.mobile, "created borrower profile");
        Ok(profile)
    }

    /// Merge an editor update into the stored record.
    ///
    /// Name, email and mobile must stay non-empty after the merge; PAN is
    /// immutable post-creation and a change attempt is rejected outright.
    pub async fn update(&self, update: ProfileUpdate) -> Result<BorrowerProfile> {
        let mut profile = self
            .repository
            .get()
            .await?
            .ok_or_else(|| InstaLoanError::NotFound("borrower profile".into()))?;

        if let Some(pan) = &update.pan {
            // The editor may hand back a lowercased PAN; compare canonical forms.
            if normalize_code(pan) != profile.pan {
                return Err(InstaLoanError::Validation("PAN cannot be changed".into()));
            }
        }

        if let Some(full_name) = update.full_name {
            profile.full_name = full_name;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
        if let Some(mobile) = update.mobile {
            profile.mobile = mobile;
        }
        if let Some(dob) = update.dob {
            profile.dob = dob;
        }
        if update.address.is_some() {
            profile.address = update.address;
        }
        if update.city.is_some() {
            profile.city = update.city;
        }
        if update.state.is_some() {
            profile.state = update.state;
        }
        if update.pincode.is_some() {
            profile.pincode = update.pincode;
        }

        if profile.full_name.is_empty() || profile.email.is_empty() || profile.mobile.is_empty() {
            return Err(InstaLoanError::Validation(
                "Full Name, Email & Mobile are required".into(),
            ));
        }
        if !is_valid_mobile(&profile.mobile) {
            return Err(InstaLoanError::Validation("Enter a valid 10-digit mobile number".into()));
        }

        profile.version += 1;
        self.repository.save(profile.clone()).await?;
        info!(version = profile.version, "updated borrower profile");
        Ok(profile)
    }

    /// Record the professional-info step on the stored profile.
    ///
    /// Income is required; company only for salaried borrowers.
    pub async fn set_employment(&self, employment: EmploymentInfo) -> Result<BorrowerProfile> {
        if employment.monthly_income == 0 {
            return Err(InstaLoanError::Validation("Please fill all fields".into()));
        }
        if employment.employment_type == EmploymentType::Salaried
            && employment.company.as_deref().unwrap_or("").is_empty()
        {
            return Err(InstaLoanError::Validation("Company name is required".into()));
        }

        let mut profile = self
            .repository
            .get()
            .await?
            .ok_or_else(|| InstaLoanError::NotFound("borrower profile".into()))?;

        profile.employment = Some(employment);
        profile.version += 1;
        self.repository.save(profile.clone()).await?;
        Ok(profile)
    }
}
