//! # Tax Form
//!
//! A single-page tax estimate form built with Axum and Askama.
//!
//! Individual income is taxed at 4% and business income at 6%. Relief of 1%
//! and 2% of the respective incomes is subtracted, capped at 10000 per
//! calculation, and the total never drops below zero.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Amount parsing and the tax calculation
//! - **Web Layer** ([`web`]) - Calculator page, form DTO, templates
//! - **API Layer** ([`api`]) - Health endpoint and shared middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on 0.0.0.0:8080
//! cargo run
//!
//! # Or compute from the command line
//! cargo run --bin taxcalc -- --individual 100000 --business 50000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::FormError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{CalculationResult, ParseError, TaxPolicy, calculate_tax, parse_amount};
    pub use crate::error::{FormError, IncomeField};
    pub use crate::state::AppState;
}
