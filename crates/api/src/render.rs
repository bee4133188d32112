//! Plain-text receipt and statement rendering
//!
//! The original app renders these as shareable documents; the PDF/share layer
//! is out of scope, so the command surface exposes the text content only.

use std::fmt::Write as _;

use chrono::Utc;
use instaloan_domain::amortization::{compute_emi, compute_progress, compute_schedule};
use instaloan_domain::{BorrowerProfile, InstallmentStatus, LoanRecord, PaymentReceipt};

const DATE_FORMAT: &str = "%d %b %Y";

/// Render a payment receipt as shareable text.
pub fn receipt_text(receipt: &PaymentReceipt) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "InstaLoan Pro - Payment Receipt");
    let _ = writeln!(out, "--------------------------------");
    let _ = writeln!(out, "Reference     : {}", receipt.reference);
    let _ = writeln!(out, "Date          : {}", receipt.paid_at.format(DATE_FORMAT));
    let _ = writeln!(out, "EMI Number    : {}", receipt.emi_number);
    let _ = writeln!(out, "Amount Paid   : Rs. {}", receipt.amount);
    let _ = writeln!(out, "Payment Mode  : {}", receipt.method);
    let _ = writeln!(out, "Loan Amount   : Rs. {}", receipt.loan_amount);
    let _ = writeln!(out, "Status        : {}", receipt.status);
    out
}

/// Render the loan statement: header, full schedule, progress footer.
///
/// The schedule and progress are recomputed from the record; the stored `emi`
/// field is never trusted.
pub fn statement_text(profile: Option<&BorrowerProfile>, loan: &LoanRecord) -> String {
    let emi = compute_emi(loan.amount, loan.tenure_months);
    let schedule = compute_schedule(loan, Utc::now());
    let progress = compute_progress(loan);

    let mut out = String::new();
    let _ = writeln!(out, "InstaLoan Pro - Loan Statement");
    let _ = writeln!(out, "==============================");
    if let Some(profile) = profile {
        let _ = writeln!(out, "Borrower      : {}", profile.full_name);
    }
    let _ = writeln!(out, "Loan Amount   : Rs. {}", loan.amount);
    let _ = writeln!(out, "Tenure        : {} months", loan.tenure_months);
    let _ = writeln!(out, "Monthly EMI   : Rs. {emi}");
    if let Some(approval) = loan.approval_date {
        let _ = writeln!(out, "Approved On   : {}", approval.format(DATE_FORMAT));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "EMI  Due Date      Amount     Status");
    for entry in &schedule {
        let status = match entry.status {
            InstallmentStatus::Paid => "PAID",
            InstallmentStatus::Active => "ACTIVE",
        };
        let _ = writeln!(
            out,
            "{:<4} {:<12} Rs. {:<6} {}",
            entry.month,
            entry.due_date.format(DATE_FORMAT),
            entry.emi,
            status
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Paid Rs. {} of Rs. {} ({}% complete)",
        progress.paid_amount, loan.amount, progress.percent
    );
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use instaloan_domain::PaymentMethod;

    use super::*;

    fn sample_loan() -> LoanRecord {
        LoanRecord {
            amount: 50_000,
            tenure_months: 8,
            interest_rate: 1.5,
            emi: 6_250,
            approval_date: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).single().expect("ts")),
            paid_emis: 3,
            version: 4,
        }
    }

    #[test]
    fn receipt_contains_the_key_fields() {
        let receipt = PaymentReceipt {
            reference: "ref-123".into(),
            amount: 6_250,
            emi_number: 4,
            method: PaymentMethod::Upi,
            paid_at: Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).single().expect("ts"),
            loan_amount: 50_000,
            status: "SUCCESS".into(),
        };

        let text = receipt_text(&receipt);
        assert!(text.contains("ref-123"));
        assert!(text.contains("EMI Number    : 4"));
        assert!(text.contains("Rs. 6250"));
        assert!(text.contains("UPI"));
        assert!(text.contains("SUCCESS"));
    }

    #[test]
    fn statement_lists_every_installment() {
        let text = statement_text(None, &sample_loan());

        assert!(text.contains("Loan Amount   : Rs. 50000"));
        assert!(text.contains("Tenure        : 8 months"));
        assert!(text.contains("Monthly EMI   : Rs. 6250"));
        assert_eq!(text.matches("PAID").count(), 3);
        assert_eq!(text.matches("ACTIVE").count(), 5);
        assert!(text.contains("Paid Rs. 18750 of Rs. 50000 (38% complete)"));
    }

    #[test]
    fn statement_includes_borrower_name_when_available() {
        let profile: BorrowerProfile =
            serde_json::from_str(r#"{"fullName":"Vasanth Kumar","mobile":"9876543210","pan":"ABCDE1234F","aadhar":"123456789012","dob":"2000-01-01T00:00:00Z","email":"v@example.com","accountNumber":"12345678901","bankName":"State Bank","ifsc":"SBIN0000001","branch":"Chennai Main"}"#)
                .expect("profile parses");

        let text = statement_text(Some(&profile), &sample_loan());
        assert!(text.contains("Borrower      : Vasanth Kumar"));
    }
}
