use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::loan_terms::LoanTerms;
use crate::types::{Money, Percent, Rate};

/// Percent-per-year to fraction-per-month: 100 × 12.
const ANNUAL_PERCENT_TO_MONTHLY: Decimal = dec!(1200);

/// Monthly interest rate as a fraction, from an annual percentage.
pub fn monthly_rate(annual_interest_rate: Percent) -> Rate {
    annual_interest_rate / ANNUAL_PERCENT_TO_MONTHLY
}

/// Fixed monthly payment that retires the loan over its term.
///
/// `payment = P * r / (1 - (1 + r)^-n)` with `r` the monthly rate. At a zero
/// rate the formula has no value, and the payment is the principal spread
/// evenly over the term. When `(1 + r)^n` leaves the decimal range the
/// payment falls back to interest only, `P * r`, and the balance is never
/// retired.
pub fn compute_monthly_payment(terms: &LoanTerms) -> Money {
    level_payment(
        terms.loan_amount(),
        monthly_rate(terms.annual_interest_rate()),
        terms.term_months(),
    )
}

pub(crate) fn level_payment(principal: Money, rate: Rate, periods: u32) -> Money {
    let n = Decimal::from(periods);
    if rate.is_zero() {
        return principal / n;
    }

    let denominator = Decimal::ONE - discount_factor(rate, periods);
    // Rates this close to zero round (1 + r)^-n to exactly one.
    if denominator.is_zero() {
        return principal / n;
    }

    principal * rate / denominator
}

/// `(1 + rate)^-periods`, or zero once `(1 + rate)^periods` leaves the
/// decimal range.
fn discount_factor(rate: Rate, periods: u32) -> Decimal {
    (Decimal::ONE + rate)
        .checked_powd(Decimal::from(periods))
        .and_then(|growth| Decimal::ONE.checked_div(growth))
        .unwrap_or(Decimal::ZERO)
}
