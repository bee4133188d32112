//! # InstaLoan Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite-backed device key-value store (single-row JSON records)
//! - Repositories implementing the `instaloan-core` persistence ports
//!
//! ## Architecture
//! - Implements traits defined in `instaloan-core`
//! - Depends on `instaloan-domain` and `instaloan-core`
//! - Contains all "impure" code (I/O, database access)

pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::*;
