//! Field validators for raw loan inputs.
//!
//! Each validator is a pure check over one raw value (plus the value it
//! depends on, where there is one) that appends a message to `errors` when the
//! rule is broken. The `LoanTerms` constructors run them in sequence and fail
//! with everything collected; a console front end can run a single one to
//! re-prompt for one field before any terms exist.
//!
//! Amounts are capped at [`MAX_AMOUNT`]. Below the cap, a level-payment
//! schedule over any representable term stays inside the decimal range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

pub const LOAN_AMOUNT_MESSAGE: &str = "Loan amount must be greater than zero.";
pub const LOAN_AMOUNT_LIMIT_MESSAGE: &str =
    "Loan amount must not exceed 1,000,000,000,000,000.";
pub const PURCHASE_PRICE_MESSAGE: &str = "Purchase price must be greater than zero.";
pub const PURCHASE_PRICE_LIMIT_MESSAGE: &str =
    "Purchase price must not exceed 1,000,000,000,000,000.";
pub const DOWN_PAYMENT_MESSAGE: &str =
    "Down payment must be non-negative and less than the purchase price.";
pub const DOWN_PAYMENT_PERCENTAGE_MESSAGE: &str =
    "Down payment percentage must be between 0 and 100.";
pub const LOAN_TERM_MESSAGE: &str = "Loan term must be greater than zero.";
pub const INTEREST_RATE_MESSAGE: &str = "Interest rate must be between 0 and 100.";

/// Largest accepted loan amount or purchase price.
pub const MAX_AMOUNT: Money = dec!(1000000000000000);

const MAX_PERCENT: Decimal = dec!(100);

pub fn validate_loan_amount(amount: Money, errors: &mut Vec<String>) {
    if amount <= Decimal::ZERO {
        errors.push(LOAN_AMOUNT_MESSAGE.into());
    } else if amount > MAX_AMOUNT {
        errors.push(LOAN_AMOUNT_LIMIT_MESSAGE.into());
    }
}

pub fn validate_purchase_price(price: Money, errors: &mut Vec<String>) {
    if price <= Decimal::ZERO {
        errors.push(PURCHASE_PRICE_MESSAGE.into());
    } else if price > MAX_AMOUNT {
        errors.push(PURCHASE_PRICE_LIMIT_MESSAGE.into());
    }
}

/// Down payment must sit in `[0, purchase_price)`.
pub fn validate_down_payment(down_payment: Money, purchase_price: Money, errors: &mut Vec<String>) {
    if down_payment < Decimal::ZERO || down_payment >= purchase_price {
        errors.push(DOWN_PAYMENT_MESSAGE.into());
    }
}

pub fn validate_down_payment_percentage(percentage: Percent, errors: &mut Vec<String>) {
    if !in_percent_range(percentage) {
        errors.push(DOWN_PAYMENT_PERCENTAGE_MESSAGE.into());
    }
}

/// Terms arrive as signed integers so that zero and negative console input
/// can be reported instead of failing to parse.
pub fn validate_loan_term(term_months: i32, errors: &mut Vec<String>) {
    if term_months <= 0 {
        errors.push(LOAN_TERM_MESSAGE.into());
    }
}

/// Annual rate as a percentage, inclusive on both ends.
pub fn validate_interest_rate(rate: Percent, errors: &mut Vec<String>) {
    if !in_percent_range(rate) {
        errors.push(INTEREST_RATE_MESSAGE.into());
    }
}

fn in_percent_range(value: Percent) -> bool {
    value >= Decimal::ZERO && value <= MAX_PERCENT
}
