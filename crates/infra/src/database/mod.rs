//! Database implementations

pub mod kv_store;
pub mod loan_repository;
pub mod manager;
pub mod otp_repository;
pub mod profile_repository;

pub use loan_repository::*;
pub use manager::*;
pub use otp_repository::*;
pub use profile_repository::*;
