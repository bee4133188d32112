//! Tracing initialisation
//!
//! Honors `RUST_LOG`; defaults to `info` for the workspace crates.

use anyhow::Context;
use instaloan_domain::InstaLoanError;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Call once at startup.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Convert an `InstaLoanError` into a stable label suitable for structured
/// logging.
#[inline]
pub fn error_label(error: &InstaLoanError) -> &'static str {
    match error {
        InstaLoanError::Validation(_) => "validation",
        InstaLoanError::OtpMismatch => "otp_mismatch",
        InstaLoanError::Storage(_) => "storage",
        InstaLoanError::NotFound(_) => "not_found",
        InstaLoanError::MissingPaymentMethod => "missing_payment_method",
        InstaLoanError::LoanCompleted => "loan_completed",
        InstaLoanError::Internal(_) => "internal",
    }
}
