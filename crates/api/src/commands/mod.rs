//! Command surface consumed by the screens

pub mod auth;
pub mod loan;
pub mod onboarding;
pub mod payment;

pub use auth::{logout, request_login_otp, resend_login_otp, verify_login_otp};
pub use loan::{get_dashboard, get_emi_schedule, get_loan_statement, DashboardSummary, ScheduleTab};
pub use onboarding::{
    account_number_hint, complete_final_steps, customize_loan, send_aadhar_otp, submit_basic_info,
    submit_professional_info, verify_aadhar_otp, LoanQuote,
};
pub use payment::pay_emi;
