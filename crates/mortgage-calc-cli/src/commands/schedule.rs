use clap::Args;
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_calc_core::amortization::analyze_loan;
use mortgage_calc_core::loan_terms::LoanInput;

use super::years_to_months;
use crate::input;

/// Arguments for a single amortization schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Principal financed (instead of a purchase price)
    #[arg(long, conflicts_with = "purchase_price")]
    pub loan_amount: Option<Decimal>,

    /// House purchase price; the loan is the price less the down payment
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Down payment as an amount
    #[arg(long, requires = "purchase_price", conflicts_with = "down_payment_percentage")]
    pub down_payment: Option<Decimal>,

    /// Down payment as a percentage of the purchase price (e.g. 20)
    #[arg(long, requires = "purchase_price")]
    pub down_payment_percentage: Option<Decimal>,

    /// Loan term in months
    #[arg(long, conflicts_with = "term_years")]
    pub term_months: Option<i32>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<i32>,

    /// Annual interest rate as a percentage (e.g. 3.5 for 3.5%)
    #[arg(long, alias = "annual-interest-rate")]
    pub rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(loan) = input::stdin::read_piped()? {
        loan
    } else {
        loan_input_from_flags(&args)?
    };

    debug!("schedule for {loan_input:?}");
    let result = analyze_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

fn loan_input_from_flags(args: &ScheduleArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    let term_months = match (args.term_months, args.term_years) {
        (Some(months), _) => months,
        (None, Some(years)) => years_to_months(years)?,
        (None, None) => {
            return Err("--term-months or --term-years is required (or provide --input)".into())
        }
    };
    let annual_interest_rate = args
        .rate
        .ok_or("--rate is required (or provide --input)")?;

    if let Some(loan_amount) = args.loan_amount {
        return Ok(LoanInput::LoanAmount {
            loan_amount,
            term_months,
            annual_interest_rate,
        });
    }

    let purchase_price = args
        .purchase_price
        .ok_or("--loan-amount or --purchase-price is required (or provide --input)")?;

    match (args.down_payment, args.down_payment_percentage) {
        (Some(down_payment), _) => Ok(LoanInput::DownPayment {
            purchase_price,
            down_payment,
            term_months,
            annual_interest_rate,
        }),
        (None, Some(down_payment_percentage)) => Ok(LoanInput::DownPaymentPercentage {
            purchase_price,
            down_payment_percentage,
            term_months,
            annual_interest_rate,
        }),
        (None, None) => Err(
            "--down-payment or --down-payment-percentage is required with --purchase-price".into(),
        ),
    }
}
