use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_down_payment, validate_down_payment_percentage, validate_interest_rate,
    validate_loan_amount, validate_loan_term, validate_purchase_price, MAX_AMOUNT,
};
use crate::error::ValidationError;
use crate::types::{Money, Percent};

// ---------------------------------------------------------------------------
// Input shapes
// ---------------------------------------------------------------------------

/// Raw loan parameters in any of the supported shapes, as they arrive from a
/// prompt or a batch file. Nothing here has been validated yet.
///
/// Each shape accepts exactly its own fields, so a record mixing fields from
/// two shapes matches none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum LoanInput {
    /// Purchase price less an absolute down payment.
    DownPayment {
        purchase_price: Money,
        down_payment: Money,
        term_months: i32,
        annual_interest_rate: Percent,
    },
    /// Purchase price less a percentage of itself.
    DownPaymentPercentage {
        purchase_price: Money,
        down_payment_percentage: Percent,
        term_months: i32,
        annual_interest_rate: Percent,
    },
    /// Principal financed, given directly.
    LoanAmount {
        loan_amount: Money,
        term_months: i32,
        annual_interest_rate: Percent,
    },
}

// ---------------------------------------------------------------------------
// Validated terms
// ---------------------------------------------------------------------------

/// Normalized, validated parameters of a fixed-rate loan.
///
/// Only the constructors below (or deserialization, which goes through them)
/// can produce one, so every `LoanTerms` satisfies:
/// - `loan_amount > 0`
/// - `0 <= annual_interest_rate <= 100`
/// - `term_months > 0`
/// - when derived, `purchase_price > 0` and `0 <= down_payment < purchase_price`
/// - `loan_amount` and `purchase_price` are at most [`MAX_AMOUNT`]
///
/// Serializes as the [`LoanInput`] it reads back from: the down payment shape
/// when a purchase price is known, the loan amount shape otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LoanInput", into = "LoanInput")]
pub struct LoanTerms {
    loan_amount: Money,
    annual_interest_rate: Percent,
    term_months: u32,
    purchase_price: Option<Money>,
    down_payment: Option<Money>,
}

impl LoanTerms {
    /// Terms for a loan amount given directly.
    pub fn from_loan_amount(
        loan_amount: Money,
        term_months: i32,
        annual_interest_rate: Percent,
    ) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        validate_loan_amount(loan_amount, &mut errors);
        validate_loan_term(term_months, &mut errors);
        validate_interest_rate(annual_interest_rate, &mut errors);
        ValidationError::check(errors)?;

        Ok(Self {
            loan_amount,
            annual_interest_rate,
            term_months: term_months.unsigned_abs(),
            purchase_price: None,
            down_payment: None,
        })
    }

    /// Terms financing `purchase_price - down_payment`.
    pub fn from_down_payment(
        purchase_price: Money,
        down_payment: Money,
        term_months: i32,
        annual_interest_rate: Percent,
    ) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        validate_purchase_price(purchase_price, &mut errors);
        validate_down_payment(down_payment, purchase_price, &mut errors);
        validate_loan_term(term_months, &mut errors);
        validate_interest_rate(annual_interest_rate, &mut errors);
        ValidationError::check(errors)?;

        Ok(Self {
            loan_amount: purchase_price - down_payment,
            annual_interest_rate,
            term_months: term_months.unsigned_abs(),
            purchase_price: Some(purchase_price),
            down_payment: Some(down_payment),
        })
    }

    /// Terms financing the purchase price less `down_payment_percentage`
    /// percent of it.
    ///
    /// A 100% down payment passes the percentage rule but leaves nothing to
    /// finance, so it is rejected with the loan amount message. The derived
    /// amount is only checked once the price and percentage are valid.
    pub fn from_down_payment_percentage(
        purchase_price: Money,
        term_months: i32,
        annual_interest_rate: Percent,
        down_payment_percentage: Percent,
    ) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();
        validate_purchase_price(purchase_price, &mut errors);
        let price_valid = errors.is_empty();
        validate_loan_term(term_months, &mut errors);
        validate_interest_rate(annual_interest_rate, &mut errors);
        let before = errors.len();
        validate_down_payment_percentage(down_payment_percentage, &mut errors);
        let percentage_valid = errors.len() == before;

        let down_payment = down_payment_from_percentage(purchase_price, down_payment_percentage);
        let loan_amount = purchase_price - down_payment;
        if price_valid && percentage_valid {
            validate_loan_amount(loan_amount, &mut errors);
        }
        ValidationError::check(errors)?;

        Ok(Self {
            loan_amount,
            annual_interest_rate,
            term_months: term_months.unsigned_abs(),
            purchase_price: Some(purchase_price),
            down_payment: Some(down_payment),
        })
    }

    /// Principal financed.
    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    /// Nominal annual rate as a percentage.
    pub fn annual_interest_rate(&self) -> Percent {
        self.annual_interest_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn purchase_price(&self) -> Option<Money> {
        self.purchase_price
    }

    pub fn down_payment(&self) -> Option<Money> {
        self.down_payment
    }
}

impl TryFrom<LoanInput> for LoanTerms {
    type Error = ValidationError;

    fn try_from(input: LoanInput) -> Result<Self, Self::Error> {
        match input {
            LoanInput::DownPayment {
                purchase_price,
                down_payment,
                term_months,
                annual_interest_rate,
            } => Self::from_down_payment(
                purchase_price,
                down_payment,
                term_months,
                annual_interest_rate,
            ),
            LoanInput::DownPaymentPercentage {
                purchase_price,
                down_payment_percentage,
                term_months,
                annual_interest_rate,
            } => Self::from_down_payment_percentage(
                purchase_price,
                term_months,
                annual_interest_rate,
                down_payment_percentage,
            ),
            LoanInput::LoanAmount {
                loan_amount,
                term_months,
                annual_interest_rate,
            } => Self::from_loan_amount(loan_amount, term_months, annual_interest_rate),
        }
    }
}

impl TryFrom<&LoanInput> for LoanTerms {
    type Error = ValidationError;

    fn try_from(input: &LoanInput) -> Result<Self, Self::Error> {
        Self::try_from(input.clone())
    }
}

impl From<LoanTerms> for LoanInput {
    fn from(terms: LoanTerms) -> Self {
        let term_months = i32::try_from(terms.term_months).unwrap_or(i32::MAX);
        match (terms.purchase_price, terms.down_payment) {
            (Some(purchase_price), Some(down_payment)) => LoanInput::DownPayment {
                purchase_price,
                down_payment,
                term_months,
                annual_interest_rate: terms.annual_interest_rate,
            },
            _ => LoanInput::LoanAmount {
                loan_amount: terms.loan_amount,
                term_months,
                annual_interest_rate: terms.annual_interest_rate,
            },
        }
    }
}

/// Zero unless both the price and the percentage are in range.
fn down_payment_from_percentage(purchase_price: Money, percentage: Percent) -> Money {
    let in_range = purchase_price > Money::ZERO
        && purchase_price <= MAX_AMOUNT
        && percentage >= Percent::ZERO
        && percentage <= dec!(100);
    if in_range {
        purchase_price * (percentage / dec!(100))
    } else {
        Money::ZERO
    }
}
