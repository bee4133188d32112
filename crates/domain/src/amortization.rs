//! The amortization engine
//!
//! Pure functions deriving EMI amount, due dates, repayment schedule and
//! progress from a [`LoanRecord`]. Every screen imports these instead of
//! re-deriving `ceil(amount / tenure)` locally, so all consumers agree.
//!
//! The canonical EMI formula is the flat divisor `ceil(amount / tenure)`;
//! interest rate is decorative. The compounding formula lives only in
//! [`estimate_customized_emi`] for the pre-approval slider and never feeds a
//! loan record.

use chrono::{DateTime, Months, Utc};

use crate::constants::CALCULATOR_MONTHLY_RATE;
use crate::types::loan::{InstallmentStatus, InstallmentView, LoanProgress, LoanRecord};

/// Canonical EMI amount: `ceil(amount / tenure_months)`.
///
/// Over-collects by at most `tenure_months - 1` minor units and never
/// under-collects: `compute_emi(a, t) * t >= a` for all positive inputs.
///
/// # Examples
///
/// ```
/// use instaloan_domain::amortization::compute_emi;
///
/// assert_eq!(compute_emi(50_000, 8), 6_250);
/// assert_eq!(compute_emi(50_001, 8), 6_251);
/// ```
#[must_use]
pub fn compute_emi(amount: u64, tenure_months: u32) -> u64 {
    if tenure_months == 0 {
        // Tenure is validated positive upstream; avoid a divide-by-zero on
        // corrupt records
        return amount;
    }
    amount.div_ceil(u64::from(tenure_months))
}

/// Roll a date forward by whole calendar months, clamping the day-of-month
/// when the target month is shorter (Jan 31 + 1 month = Feb 28/29).
#[must_use]
pub fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Due date of the next unpaid installment.
///
/// Falls back to `now` for a loan whose approval date has not been
/// initialized yet; that fallback is part of the observed behavior and must
/// be preserved.
#[must_use]
pub fn next_due_date(loan: &LoanRecord, now: DateTime<Utc>) -> DateTime<Utc> {
    let start = loan.approval_date.unwrap_or(now);
    add_months(start, loan.paid_emis)
}

/// Full repayment schedule: exactly `tenure_months` entries, 1-indexed.
///
/// Entry `i` is due `approval_date + (i - 1)` months (or `now`-based when
/// unapproved) and is `paid` iff `i <= paid_emis`. Pure function of the loan
/// state plus `now`: recomputing with unchanged inputs yields identical
/// output.
#[must_use]
pub fn compute_schedule(loan: &LoanRecord, now: DateTime<Utc>) -> Vec<InstallmentView> {
    let emi = compute_emi(loan.amount, loan.tenure_months);
    let start = loan.approval_date.unwrap_or(now);

    (1..=loan.tenure_months)
        .map(|month| InstallmentView {
            month,
            emi,
            due_date: add_months(start, month - 1),
            status: if month <= loan.paid_emis {
                InstallmentStatus::Paid
            } else {
                InstallmentStatus::Active
            },
        })
        .collect()
}

/// Paid/remaining totals and percent complete.
///
/// `paid_amount = emi * paid_emis`; remaining never goes negative even
/// though the ceil'd EMI can overshoot the principal on the last
/// installment; percent is rounded and capped at 100.
#[must_use]
pub fn compute_progress(loan: &LoanRecord) -> LoanProgress {
    let emi = compute_emi(loan.amount, loan.tenure_months);
    let paid_amount = emi * u64::from(loan.paid_emis);
    let remaining_amount = loan.amount.saturating_sub(paid_amount);

    let percent = if loan.tenure_months == 0 {
        0
    } else {
        let ratio = f64::from(loan.paid_emis) / f64::from(loan.tenure_months);
        ((ratio * 100.0).round() as u32).min(100)
    };

    LoanProgress { paid_amount, remaining_amount, percent }
}

/// Illustrative EMI estimate for the pre-approval "customize your loan"
/// slider.
///
/// Uses a compounding formula at a fixed 1.5% monthly rate. This is
/// deliberately *not* the canonical engine: the dashboard, EMI list and
/// payment screens all use [`compute_emi`]. Kept separate so the two are
/// never silently unified.
#[must_use]
pub fn estimate_customized_emi(amount: u64, months: u32) -> u64 {
    let rate = CALCULATOR_MONTHLY_RATE;
    let principal = amount as f64;
    let factor = (1.0 + rate).powi(months as i32);
    let emi = (principal * rate * factor) / (factor - 1.0);
    emi.round() as u64
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn loan(amount: u64, tenure: u32, paid: u32, approval: Option<DateTime<Utc>>) -> LoanRecord {
        LoanRecord {
            amount,
            tenure_months: tenure,
            interest_rate: 1.5,
            emi: compute_emi(amount, tenure),
            approval_date: approval,
            paid_emis: paid,
            version: 0,
        }
    }

    fn jan_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).single().expect("valid date")
    }

    #[test]
    fn emi_is_ceiling_division() {
        assert_eq!(compute_emi(50_000, 8), 6_250);
        assert_eq!(compute_emi(50_001, 8), 6_251);
        assert_eq!(compute_emi(1, 8), 1);
        assert_eq!(compute_emi(100_000, 3), 33_334);
    }

    #[test]
    fn emi_never_under_collects() {
        for amount in [1u64, 999, 5_000, 50_000, 99_999, 100_000] {
            for tenure in [1u32, 3, 7, 8, 12, 18] {
                let emi = compute_emi(amount, tenure);
                assert!(
                    emi * u64::from(tenure) >= amount,
                    "under-collection for amount={amount} tenure={tenure}"
                );
            }
        }
    }

    #[test]
    fn schedule_has_exactly_tenure_entries() {
        let loan = loan(50_000, 8, 3, Some(jan_15()));
        let schedule = compute_schedule(&loan, Utc::now());
        assert_eq!(schedule.len(), 8);
    }

    #[test]
    fn schedule_statuses_split_at_paid_count() {
        let loan = loan(50_000, 8, 3, Some(jan_15()));
        let schedule = compute_schedule(&loan, Utc::now());
        for entry in &schedule {
            let expected =
                if entry.month <= 3 { InstallmentStatus::Paid } else { InstallmentStatus::Active };
            assert_eq!(entry.status, expected, "month {}", entry.month);
        }
    }

    #[test]
    fn schedule_due_dates_roll_monthly_from_approval() {
        let loan = loan(50_000, 8, 0, Some(jan_15()));
        let schedule = compute_schedule(&loan, Utc::now());
        assert_eq!(schedule[0].due_date, jan_15());
        assert_eq!(schedule[1].due_date, Utc.with_ymd_and_hms(2025, 2, 15, 10, 30, 0).unwrap());
        assert_eq!(schedule[7].due_date, Utc.with_ymd_and_hms(2025, 8, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn schedule_clamps_end_of_month() {
        let jan_31 = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(add_months(jan_31, 1), Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn schedule_is_idempotent_for_unchanged_state() {
        let loan = loan(50_000, 8, 5, Some(jan_15()));
        let now = Utc::now();
        assert_eq!(compute_schedule(&loan, now), compute_schedule(&loan, now));
    }

    #[test]
    fn schedule_without_approval_falls_back_to_now() {
        let loan = loan(50_000, 8, 0, None);
        let now = jan_15();
        let schedule = compute_schedule(&loan, now);
        assert_eq!(schedule[0].due_date, now);
    }

    #[test]
    fn next_due_date_skips_paid_installments() {
        let loan = loan(50_000, 8, 3, Some(jan_15()));
        assert_eq!(
            next_due_date(&loan, Utc::now()),
            Utc.with_ymd_and_hms(2025, 4, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn progress_matches_reference_scenario() {
        // principal=50000, tenure=8, paid=3
        let loan = loan(50_000, 8, 3, Some(jan_15()));
        let progress = compute_progress(&loan);
        assert_eq!(progress.paid_amount, 18_750);
        assert_eq!(progress.remaining_amount, 31_250);
        assert_eq!(progress.percent, 38);
    }

    #[test]
    fn progress_remaining_never_negative() {
        // ceil'd EMI overshoots the principal on the final installment
        let loan = loan(50_001, 8, 8, Some(jan_15()));
        let progress = compute_progress(&loan);
        assert_eq!(progress.remaining_amount, 0);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn progress_percent_capped_at_100() {
        let loan = loan(50_000, 8, 8, Some(jan_15()));
        assert_eq!(compute_progress(&loan).percent, 100);
    }

    #[test]
    fn customized_estimate_uses_compounding_formula() {
        // 50000 over 12 months at 1.5%/month
        let estimate = estimate_customized_emi(50_000, 12);
        assert_eq!(estimate, 4_584);
        // And differs from the canonical flat divisor
        assert_ne!(estimate, compute_emi(50_000, 12));
    }
}
