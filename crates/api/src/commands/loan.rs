//! Dashboard and EMI-list queries
//!
//! Every query runs the lazy approval initialization first, so whichever
//! screen loads the loan first sets the approval date and the others observe
//! the persisted value.

use chrono::{DateTime, Utc};
use instaloan_domain::amortization::{
    compute_emi, compute_progress, compute_schedule, next_due_date,
};
use instaloan_domain::{InstallmentStatus, InstallmentView, LoanProgress, Result};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::render;

/// Everything the dashboard screen shows about the active loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub amount: u64,
    pub tenure_months: u32,
    /// Canonical EMI, recomputed; never the stored display value
    pub emi: u64,
    pub paid_emis: u32,
    pub progress: LoanProgress,
    pub next_due_date: DateTime<Utc>,
    pub approval_date: Option<DateTime<Utc>>,
}

/// EMI-list tab filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTab {
    All,
    Active,
    Paid,
}

/// Load the dashboard summary; `None` when no loan exists yet.
pub async fn get_dashboard(ctx: &AppContext) -> Result<Option<DashboardSummary>> {
    let Some(loan) = ctx.loans.ensure_approval_initialized().await? else {
        return Ok(None);
    };

    let now = Utc::now();
    Ok(Some(DashboardSummary {
        amount: loan.amount,
        tenure_months: loan.tenure_months,
        emi: compute_emi(loan.amount, loan.tenure_months),
        paid_emis: loan.paid_emis,
        progress: compute_progress(&loan),
        next_due_date: next_due_date(&loan, now),
        approval_date: loan.approval_date,
    }))
}

/// Load the repayment schedule filtered by tab.
pub async fn get_emi_schedule(ctx: &AppContext, tab: ScheduleTab) -> Result<Vec<InstallmentView>> {
    let Some(loan) = ctx.loans.ensure_approval_initialized().await? else {
        return Ok(Vec::new());
    };

    let schedule = compute_schedule(&loan, Utc::now());
    let filtered = match tab {
        ScheduleTab::All => schedule,
        ScheduleTab::Active => {
            schedule.into_iter().filter(|e| e.status == InstallmentStatus::Active).collect()
        }
        ScheduleTab::Paid => {
            schedule.into_iter().filter(|e| e.status == InstallmentStatus::Paid).collect()
        }
    };
    Ok(filtered)
}

/// Render the loan statement text; `None` when no loan exists yet.
pub async fn get_loan_statement(ctx: &AppContext) -> Result<Option<String>> {
    let Some(loan) = ctx.loans.ensure_approval_initialized().await? else {
        return Ok(None);
    };
    let profile = ctx.profiles.get().await?;

    Ok(Some(render::statement_text(profile.as_ref(), &loan)))
}
