//! Borrower profile lifecycle

pub mod ports;
pub mod service;

pub use service::ProfileService;
