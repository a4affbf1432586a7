//! Headline figures for a loan alongside its schedule, wrapped in the
//! standard computation envelope.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::payment::{compute_monthly_payment, monthly_rate};
use super::schedule::{compute_schedule, total_interest, MonthlyPaymentRecord};
use crate::loan_terms::{LoanInput, LoanTerms};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::MortgageCalcResult;

/// Residual balance, in currency units, still treated as fully repaid.
const BALANCE_TOLERANCE: Decimal = dec!(0.01);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub loan_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<Money>,
    pub annual_interest_rate: Percent,
    pub term_months: u32,
    /// Monthly rate as a fraction.
    pub monthly_rate: Rate,
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_principal: Money,
    /// Every payment over the term: principal plus interest.
    pub total_paid: Money,
    /// Balance left after the last payment; zero up to rounding.
    pub final_balance: Money,
    pub schedule: Vec<MonthlyPaymentRecord>,
}

/// Amortize validated terms.
pub fn amortize(terms: &LoanTerms) -> ComputationOutput<AmortizationOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let rate = monthly_rate(terms.annual_interest_rate());
    let monthly_payment = compute_monthly_payment(terms);
    let schedule = compute_schedule(terms);

    let total_interest = total_interest(&schedule);
    let total_principal: Money = schedule.iter().map(|r| r.principal_payment).sum();
    let final_balance = schedule
        .last()
        .map(|r| r.remaining_balance)
        .unwrap_or_else(|| terms.loan_amount());

    let methodology = if rate.is_zero() {
        warnings.push(
            "Zero interest rate: payments repay principal in equal instalments".into(),
        );
        "Straight-line principal repayment (zero interest)"
    } else {
        "Fixed-rate level-payment amortization"
    };

    if final_balance.abs() > BALANCE_TOLERANCE {
        warnings.push(format!(
            "Remaining balance after month {} is {}, more than {} from zero",
            terms.term_months(),
            final_balance.round_dp(2),
            BALANCE_TOLERANCE
        ));
    }

    let output = AmortizationOutput {
        loan_amount: terms.loan_amount(),
        purchase_price: terms.purchase_price(),
        down_payment: terms.down_payment(),
        annual_interest_rate: terms.annual_interest_rate(),
        term_months: terms.term_months(),
        monthly_rate: rate,
        monthly_payment,
        total_interest,
        total_principal,
        total_paid: total_interest + total_principal,
        final_balance,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(methodology, terms, warnings, elapsed, output)
}

/// Validate raw loan parameters, then amortize them.
pub fn analyze_loan(input: &LoanInput) -> MortgageCalcResult<ComputationOutput<AmortizationOutput>> {
    let terms = LoanTerms::try_from(input)?;
    Ok(amortize(&terms))
}
