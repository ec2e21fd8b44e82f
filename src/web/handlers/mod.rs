//! HTML template rendering handlers for the calculator page.

mod calculator;

pub use calculator::{CalculatorTemplate, ResultView, calculate_handler, calculator_page, method_not_allowed};
