//! # InstaLoan API
//!
//! Application command surface consumed by the screens.
//!
//! This crate contains:
//! - The `AppContext` dependency-injection container
//! - Command functions for login, onboarding, dashboard and payment
//! - Route decisions and fixed-delay screen transitions
//! - Plain-text receipt and statement rendering

pub mod commands;
pub mod context;
pub mod render;
pub mod routes;
pub mod timers;
pub mod utils;

pub use context::AppContext;
pub use routes::{Route, Transition};
