//! Command-line tax estimate.
//!
//! Runs the same parsing and calculation as the web form without starting a
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Both amounts on the command line
//! cargo run --bin taxcalc -- --individual 100000 --business 50000
//!
//! # Prompt for missing amounts
//! cargo run --bin taxcalc
//!
//! # Machine-readable output, missing amounts count as zero
//! cargo run --bin taxcalc -- --individual 2000000 --no-input --json
//! ```

use tax_form::domain::{CalculationResult, TaxPolicy};
use tax_form::error::{FormError, IncomeField};
use tax_form::web::dto::TaxForm;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::Input;

/// Estimate tax on individual and business income with capped relief.
#[derive(Parser)]
#[command(name = "taxcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Income from individuals
    #[arg(short, long, value_name = "AMOUNT", allow_hyphen_values = true)]
    individual: Option<String>,

    /// Income from businesses and sole traders
    #[arg(short, long, value_name = "AMOUNT", allow_hyphen_values = true)]
    business: Option<String>,

    /// Never prompt; missing amounts are treated as empty
    #[arg(long)]
    no_input: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let form = TaxForm {
        individual_income: resolve(cli.individual, IncomeField::Individuals, cli.no_input)?,
        business_income: resolve(cli.business, IncomeField::Businesses, cli.no_input)?,
    };

    let (individual, business) = form.amounts().map_err(describe)?;
    let result = TaxPolicy::STANDARD.calculate(individual, business);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_breakdown(&result);
    }

    Ok(())
}

/// Uses the flag value, or prompts for it unless `--no-input` is set.
fn resolve(value: Option<String>, field: IncomeField, no_input: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if no_input => Ok(String::new()),
        None => {
            let prompt = match field {
                IncomeField::Individuals => "Income from individuals",
                IncomeField::Businesses => "Income from businesses",
            };
            let input: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(input)
        }
    }
}

fn describe(err: FormError) -> anyhow::Error {
    anyhow::anyhow!("{} ({})", err.user_message(), err)
}

/// Prints the calculation as an aligned table.
///
/// # Output Format
///
/// ```text
/// Tax estimate
///
///   Income from individuals        100000.00
///   Income from businesses          50000.00
///   ────────────────────────────────────────
///   Tax on individuals (4%)          4000.00
///   Tax on businesses (6%)           3000.00
///   Relief applied                   2000.00
///   Relief remaining                 8000.00
///   ────────────────────────────────────────
///   Total tax                        5000.00
/// ```
fn print_breakdown(result: &CalculationResult) {
    println!("{}", "Tax estimate".bright_blue().bold());
    println!();

    if !result.has_result {
        println!("{}", "  No income entered, nothing to calculate".yellow());
        println!();
        return;
    }

    row("Income from individuals", result.income_individuals);
    row("Income from businesses", result.income_businesses);
    println!("  {}", "─".repeat(40).bright_black());
    row("Tax on individuals (4%)", result.tax_individuals);
    row("Tax on businesses (6%)", result.tax_businesses);
    row("Relief applied", result.relief_applied);
    row("Relief remaining", result.remaining_relief);
    println!("  {}", "─".repeat(40).bright_black());
    println!(
        "  {:<28}{}",
        "Total tax".bright_white().bold(),
        format!("{:>12.2}", result.total_tax).bright_green().bold()
    );
    println!();
}

fn row(label: &str, value: f64) {
    println!("  {:<28}{}", label, format!("{value:>12.2}").cyan());
}
