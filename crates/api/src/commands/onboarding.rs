//! Onboarding wizard commands
//!
//! Basic info (with Aadhaar OTP), professional info, loan customization and
//! the final-steps completion that opens the loan record.

use instaloan_domain::amortization::estimate_customized_emi;
use instaloan_domain::constants::{
    DEFAULT_INTEREST_RATE_PERCENT, LOAN_AMOUNT_STEP, MAX_LOAN_AMOUNT, MAX_TENURE_MONTHS,
    MIN_LOAN_AMOUNT, MIN_TENURE_MONTHS,
};
use instaloan_domain::{
    BorrowerProfile, EmploymentInfo, InstaLoanError, LoanRecord, OtpSlot, ProfileDraft, Result,
};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

/// Illustrative quote shown on the customize-loan slider.
///
/// The estimate uses the compounding calculator formula; the opened loan's
/// canonical EMI is the flat divisor and will differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuote {
    pub amount: u64,
    pub tenure_months: u32,
    pub estimated_emi: u64,
}

/// Per-keystroke feedback for the account number field.
///
/// Soft only: the basic-info screen shows the message under the field but the
/// hard rule is applied at submit.
#[must_use]
pub fn account_number_hint(input: &str) -> Option<String> {
    instaloan_domain::validation::account_number_issue(input)
}

/// Create the borrower profile from the basic-info step.
pub async fn submit_basic_info(ctx: &AppContext, draft: ProfileDraft) -> Result<BorrowerProfile> {
    ctx.profiles.create(draft).await
}

/// Generate the Aadhaar verification OTP.
pub async fn send_aadhar_otp(ctx: &AppContext) -> Result<()> {
    ctx.otp.generate(OtpSlot::Aadhar).await?;
    Ok(())
}

/// Verify the Aadhaar OTP. On a match the screen flips its local
/// aadharVerified flag; a mismatch is an error with no side effect.
pub async fn verify_aadhar_otp(ctx: &AppContext, code: &str) -> Result<()> {
    if !ctx.otp.verify(OtpSlot::Aadhar, code).await? {
        return Err(InstaLoanError::OtpMismatch);
    }
    Ok(())
}

/// Record employment details on the stored profile.
pub async fn submit_professional_info(
    ctx: &AppContext,
    employment: EmploymentInfo,
) -> Result<BorrowerProfile> {
    ctx.profiles.set_employment(employment).await
}

/// Validate slider inputs and return the illustrative quote.
pub async fn customize_loan(ctx: &AppContext, amount: u64, tenure_months: u32) -> Result<LoanQuote> {
    // Must not have an open loan already
    if ctx.loans.get().await?.is_some() {
        return Err(InstaLoanError::Validation("A loan is already active".into()));
    }
    validate_loan_bounds(amount, tenure_months)?;

    Ok(LoanQuote {
        amount,
        tenure_months,
        estimated_emi: estimate_customized_emi(amount, tenure_months),
    })
}

/// Finish the final-steps screen: open the loan record.
///
/// Approval stays unset here; the first post-approval screen to load the
/// record performs the lazy initialization.
pub async fn complete_final_steps(
    ctx: &AppContext,
    amount: u64,
    tenure_months: u32,
) -> Result<LoanRecord> {
    validate_loan_bounds(amount, tenure_months)?;
    ctx.loans.open_loan(amount, tenure_months, DEFAULT_INTEREST_RATE_PERCENT).await
}

fn validate_loan_bounds(amount: u64, tenure_months: u32) -> Result<()> {
    if !(MIN_LOAN_AMOUNT..=MAX_LOAN_AMOUNT).contains(&amount) {
        return Err(InstaLoanError::Validation(format!(
            "Loan amount must be between {MIN_LOAN_AMOUNT} and {MAX_LOAN_AMOUNT}"
        )));
    }
    if amount % LOAN_AMOUNT_STEP != 0 {
        return Err(InstaLoanError::Validation(format!(
            "Loan amount must be in steps of {LOAN_AMOUNT_STEP}"
        )));
    }
    if !(MIN_TENURE_MONTHS..=MAX_TENURE_MONTHS).contains(&tenure_months) {
        return Err(InstaLoanError::Validation(format!(
            "Tenure must be between {MIN_TENURE_MONTHS} and {MAX_TENURE_MONTHS} months"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_the_slider_range() {
        validate_loan_bounds(5_000, 3).expect("minimum accepted");
        validate_loan_bounds(100_000, 18).expect("maximum accepted");
        validate_loan_bounds(50_000, 8).expect("midpoint accepted");
    }

    #[test]
    fn bounds_reject_out_of_range_and_off_step() {
        assert!(validate_loan_bounds(4_000, 8).is_err());
        assert!(validate_loan_bounds(101_000, 8).is_err());
        assert!(validate_loan_bounds(50_500, 8).is_err());
        assert!(validate_loan_bounds(50_000, 2).is_err());
        assert!(validate_loan_bounds(50_000, 19).is_err());
    }
}
