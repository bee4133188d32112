//! EMI payment transition

pub mod service;

pub use service::PaymentService;
