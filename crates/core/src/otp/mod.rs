//! OTP generation and verification

pub mod ports;
pub mod service;

pub use service::OtpService;
