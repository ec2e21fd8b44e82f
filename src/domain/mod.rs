//! Domain layer: input parsing and the tax calculation.
//!
//! Both parts are pure functions with no dependency on the HTTP layer.
//!
//! - [`amount`] - Raw form text to validated amounts
//! - [`calculation`] - Tax, relief, and totals for two incomes

pub mod amount;
pub mod calculation;

pub use amount::{ParseError, parse_amount};
pub use calculation::{CalculationResult, TaxPolicy, calculate_tax};
