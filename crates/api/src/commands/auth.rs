//! Login commands
//!
//! Mobile-number login with OTP verification. After a successful verify the
//! app routes by what is already on the device: a stored profile whose mobile
//! matches plus an existing loan goes straight to the dashboard (history
//! reset, back exits); a matching, fully onboarded profile without a loan
//! resumes at the professional-info step; anything else, including legacy
//! records whose identity checks are still pending, starts basic info with
//! the mobile number carried over.

use instaloan_domain::validation::is_valid_mobile;
use instaloan_domain::{InstaLoanError, OtpSlot, Result};
use tracing::info;

use crate::context::AppContext;
use crate::routes::{Route, Transition};

/// Generate a login OTP for the given mobile number.
pub async fn request_login_otp(ctx: &AppContext, mobile: &str) -> Result<()> {
    if !is_valid_mobile(mobile) {
        return Err(InstaLoanError::Validation("Enter a valid 10-digit mobile number".into()));
    }
    ctx.otp.generate(OtpSlot::Login).await?;
    Ok(())
}

/// Re-issue the login OTP once the 30-second countdown has elapsed.
pub async fn resend_login_otp(ctx: &AppContext) -> Result<()> {
    if !ctx.otp.can_resend(OtpSlot::Login) {
        return Err(InstaLoanError::Validation("Please wait before resending the OTP".into()));
    }
    ctx.otp.resend(OtpSlot::Login).await?;
    Ok(())
}

/// Verify the login OTP and decide where the app goes next.
pub async fn verify_login_otp(ctx: &AppContext, mobile: &str, code: &str) -> Result<Transition> {
    if !ctx.otp.verify(OtpSlot::Login, code).await? {
        return Err(InstaLoanError::OtpMismatch);
    }

    let profile = ctx.profiles.get().await?;
    let transition = match profile {
        Some(profile) if profile.mobile == mobile && profile.is_onboarding_complete() => {
            if ctx.loans.get().await?.is_some() {
                Transition::Reset(Route::Dashboard)
            } else {
                Transition::Push(Route::ProfessionalInfo)
            }
        }
        _ => Transition::Push(Route::BasicInfo { mobile: mobile.to_string() }),
    };

    info!(?transition, "login verified");
    Ok(transition)
}

/// Log out: purely a navigation reset. Stored records are kept.
#[must_use]
pub fn logout() -> Transition {
    Transition::Reset(Route::Login)
}
