//! EMI payment command

use instaloan_domain::{PaymentMethod, PaymentReceipt, Result};

use crate::context::AppContext;

/// Pay the next unpaid installment with the chosen method.
///
/// Passing `None` models the pay screen submitting without a method selected;
/// the rejection happens before any storage mutation.
pub async fn pay_emi(
    ctx: &AppContext,
    method: Option<PaymentMethod>,
) -> Result<PaymentReceipt> {
    let (_loan, receipt) = ctx.payments.pay_next_installment(method).await?;
    Ok(receipt)
}
