//! Tax estimate for individual and business income with capped relief.

use serde::Serialize;

/// Flat rates and relief cap applied by the calculator.
///
/// Rates are fractions (`0.04` is 4%). Relief is earned per category and
/// limited by `relief_cap` for the whole calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxPolicy {
    pub rate_individuals: f64,
    pub rate_businesses: f64,
    pub relief_rate_individuals: f64,
    pub relief_rate_businesses: f64,
    pub relief_cap: f64,
}

impl TaxPolicy {
    /// The rates served by the form.
    pub const STANDARD: Self = Self {
        rate_individuals: 0.04,
        rate_businesses: 0.06,
        relief_rate_individuals: 0.01,
        relief_rate_businesses: 0.02,
        relief_cap: 10_000.0,
    };

    /// Computes the estimate for two non-negative incomes.
    ///
    /// Inputs are expected to come from [`crate::domain::amount::parse_amount`];
    /// no validation is repeated here.
    ///
    /// # Algorithm
    ///
    /// 1. Tax each income at its flat rate
    /// 2. Earn relief on each income, capped at `relief_cap` in total
    /// 3. Subtract relief from the combined tax, flooring at zero
    ///
    /// Relief exceeding the combined tax is discarded, never refunded.
    pub fn calculate(&self, income_individuals: f64, income_businesses: f64) -> CalculationResult {
        let tax_individuals = income_individuals * self.rate_individuals;
        let tax_businesses = income_businesses * self.rate_businesses;

        let potential_relief = income_individuals * self.relief_rate_individuals
            + income_businesses * self.relief_rate_businesses;
        let relief_applied = potential_relief.min(self.relief_cap);

        let mut total_tax = tax_individuals + tax_businesses - relief_applied;
        if total_tax < 0.0 {
            total_tax = 0.0;
        }

        CalculationResult {
            income_individuals,
            income_businesses,
            tax_individuals,
            tax_businesses,
            relief_applied,
            remaining_relief: self.relief_cap - relief_applied,
            total_tax,
            has_result: income_individuals > 0.0 || income_businesses > 0.0,
        }
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Outcome of a single calculation.
///
/// The default value is the empty form: all amounts zero and
/// `has_result == false`. A rejected submission renders this default with its
/// message in [`crate::web::handlers::CalculatorTemplate::error`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CalculationResult {
    pub income_individuals: f64,
    pub income_businesses: f64,
    pub tax_individuals: f64,
    pub tax_businesses: f64,
    pub relief_applied: f64,
    pub remaining_relief: f64,
    pub total_tax: f64,
    pub has_result: bool,
}

/// Computes the estimate with [`TaxPolicy::STANDARD`].
pub fn calculate_tax(income_individuals: f64, income_businesses: f64) -> CalculationResult {
    TaxPolicy::STANDARD.calculate(income_individuals, income_businesses)
}
