//! Loan record lifecycle

pub mod ports;
pub mod service;

pub use service::LoanService;
