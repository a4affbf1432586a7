use colored::Colorize;
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;
use std::io::{BufRead, Write};

use mortgage_calc_core::amortization::{amortize, AmortizationOutput};
use mortgage_calc_core::loan_terms::validation::{
    validate_down_payment, validate_interest_rate, validate_loan_term, validate_purchase_price,
};
use mortgage_calc_core::loan_terms::LoanTerms;
use mortgage_calc_core::ComputationOutput;

use super::years_to_months;
use crate::input::prompt::Prompter;
use crate::output;
use crate::OutputFormat;

/// Ask for a single loan and return its analysis.
pub fn run_prompt() -> Result<Value, Box<dyn std::error::Error>> {
    let mut prompter = Prompter::stdio();
    prompter.say("Mortgage Calculator".cyan().bold())?;

    let result = calculate_from_prompts(&mut prompter)?;
    Ok(serde_json::to_value(result)?)
}

/// Keep asking for loans, printing each schedule, until the user declines.
///
/// Invalid loans are reported and do not end the session.
pub fn run_interactive(format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut prompter = Prompter::stdio();
    prompter.say("Interactive Mortgage Calculator".cyan().bold())?;
    prompter.say("Interactive mode activated.".yellow().bold())?;

    loop {
        match calculate_from_prompts(&mut prompter) {
            Ok(result) => output::format_output(format, &serde_json::to_value(result)?),
            Err(e) => prompter.say(format!("{}: {}", "error".red().bold(), e))?,
        }

        if !prompter.confirm(&"Do you want to calculate another mortgage?".green().to_string())? {
            return Ok(());
        }
    }
}

/// Prompt for purchase price, down payment, term in years and rate, checking
/// each answer on its own before building the terms.
pub fn calculate_from_prompts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<ComputationOutput<AmortizationOutput>, Box<dyn std::error::Error>> {
    let purchase_price: Decimal = prompter.ask_validated(
        &format!("Enter the {} of the house:", "purchase price".green()),
        validate_purchase_price,
    )?;
    let down_payment: Decimal = prompter.ask_validated(
        &format!("Enter the {} amount:", "down payment".green()),
        |value: Decimal, errors: &mut Vec<String>| {
            validate_down_payment(value, purchase_price, errors)
        },
    )?;
    let term_years: i32 = prompter.ask_validated(
        &format!("Enter the {} in years:", "loan term".green()),
        validate_loan_term,
    )?;
    let annual_interest_rate: Decimal = prompter.ask_validated(
        &format!("Enter the {} (%):", "interest rate".green()),
        validate_interest_rate,
    )?;

    let term_months = years_to_months(term_years)?;
    debug!(
        "purchase_price={purchase_price}, down_payment={down_payment}, \
         term_months={term_months}, annual_interest_rate={annual_interest_rate}"
    );

    let terms =
        LoanTerms::from_down_payment(purchase_price, down_payment, term_months, annual_interest_rate)?;
    Ok(amortize(&terms))
}
