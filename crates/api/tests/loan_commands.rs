//! Integration tests for the dashboard and EMI-list queries

use instaloan_api::commands::{
    complete_final_steps, get_dashboard, get_emi_schedule, get_loan_statement, pay_emi,
    ScheduleTab,
};
use instaloan_domain::PaymentMethod;

mod support;
use support::setup_test_context;

#[tokio::test(flavor = "multi_thread")]
async fn queries_are_empty_before_a_loan_exists() {
    let test = setup_test_context();

    assert!(get_dashboard(&test.ctx).await.expect("dashboard query").is_none());
    assert!(get_emi_schedule(&test.ctx, ScheduleTab::All).await.expect("schedule query").is_empty());
    assert!(get_loan_statement(&test.ctx).await.expect("statement query").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn first_dashboard_load_initializes_approval_once() {
    let test = setup_test_context();
    complete_final_steps(&test.ctx, 50_000, 8).await.expect("loan opened");

    let first = get_dashboard(&test.ctx).await.expect("dashboard query").expect("summary");
    let approval = first.approval_date.expect("approval set on first load");
    assert_eq!(first.emi, 6_250);
    assert_eq!(first.paid_emis, 0);
    assert_eq!(first.next_due_date, approval);

    // A second screen loading the record observes the same approval date.
    let second = get_dashboard(&test.ctx).await.expect("dashboard query").expect("summary");
    assert_eq!(second.approval_date, first.approval_date);
}

#[tokio::test(flavor = "multi_thread")]
async fn progress_tracks_payments() {
    let test = setup_test_context();
    complete_final_steps(&test.ctx, 50_000, 8).await.expect("loan opened");
    get_dashboard(&test.ctx).await.expect("initial load");

    for _ in 0..3 {
        pay_emi(&test.ctx, Some(PaymentMethod::Upi)).await.expect("payment succeeded");
    }

    let summary = get_dashboard(&test.ctx).await.expect("dashboard query").expect("summary");
    assert_eq!(summary.paid_emis, 3);
    assert_eq!(summary.progress.paid_amount, 18_750);
    assert_eq!(summary.progress.remaining_amount, 31_250);
    assert_eq!(summary.progress.percent, 38);
}

#[tokio::test(flavor = "multi_thread")]
async fn schedule_tabs_filter_by_status() {
    let test = setup_test_context();
    complete_final_steps(&test.ctx, 50_000, 8).await.expect("loan opened");
    get_dashboard(&test.ctx).await.expect("initial load");

    for _ in 0..3 {
        pay_emi(&test.ctx, Some(PaymentMethod::DebitCard)).await.expect("payment succeeded");
    }

    let all = get_emi_schedule(&test.ctx, ScheduleTab::All).await.expect("schedule query");
    let active = get_emi_schedule(&test.ctx, ScheduleTab::Active).await.expect("schedule query");
    let paid = get_emi_schedule(&test.ctx, ScheduleTab::Paid).await.expect("schedule query");

    assert_eq!(all.len(), 8);
    assert_eq!(active.len(), 5);
    assert_eq!(paid.len(), 3);
    assert!(paid.iter().all(|e| e.month <= 3));
    assert!(active.iter().all(|e| e.month > 3));
}

#[tokio::test(flavor = "multi_thread")]
async fn statement_reflects_the_loan_and_borrower() {
    let test = setup_test_context();
    instaloan_api::commands::submit_basic_info(&test.ctx, support::sample_draft())
        .await
        .expect("profile created");
    complete_final_steps(&test.ctx, 50_000, 8).await.expect("loan opened");

    let statement =
        get_loan_statement(&test.ctx).await.expect("statement query").expect("statement text");
    assert!(statement.contains("Vasanth Kumar"));
    assert!(statement.contains("Rs. 50000"));
    assert!(statement.contains("8 months"));
}
