use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment::{compute_monthly_payment, monthly_rate};
use crate::loan_terms::LoanTerms;
use crate::types::{Money, Rate};

/// One month of a level-payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPaymentRecord {
    /// Month number (1-indexed).
    pub month: u32,
    /// Fixed payment, identical every month.
    pub total_monthly_payment: Money,
    /// Interest on the balance carried into this month.
    pub interest_payment: Money,
    /// Payment less interest.
    pub principal_payment: Money,
    /// Interest paid from month 1 through this month.
    pub running_total_interest: Money,
    /// Balance after this month's principal.
    pub remaining_balance: Money,
}

/// Lazily walks a loan month by month.
///
/// Yields exactly `term_months` records in ascending month order. Each call
/// to [`schedule_iter`] starts again from the full loan amount.
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    monthly_payment: Money,
    monthly_rate: Rate,
    term_months: u32,
    next_month: u32,
    remaining_balance: Money,
    running_total_interest: Money,
}

impl Iterator for ScheduleIter {
    type Item = MonthlyPaymentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_month > self.term_months {
            return None;
        }

        let interest_payment = self.remaining_balance * self.monthly_rate;
        let principal_payment = self.monthly_payment - interest_payment;
        self.running_total_interest += interest_payment;
        self.remaining_balance -= principal_payment;

        let record = MonthlyPaymentRecord {
            month: self.next_month,
            total_monthly_payment: self.monthly_payment,
            interest_payment,
            principal_payment,
            running_total_interest: self.running_total_interest,
            remaining_balance: self.remaining_balance,
        };
        self.next_month += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.term_months + 1).saturating_sub(self.next_month) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ScheduleIter {}

impl FusedIterator for ScheduleIter {}

/// Iterator over the amortization schedule of `terms`.
pub fn schedule_iter(terms: &LoanTerms) -> ScheduleIter {
    ScheduleIter {
        monthly_payment: compute_monthly_payment(terms),
        monthly_rate: monthly_rate(terms.annual_interest_rate()),
        term_months: terms.term_months(),
        next_month: 1,
        remaining_balance: terms.loan_amount(),
        running_total_interest: Decimal::ZERO,
    }
}

/// Full amortization schedule of `terms`, one record per month.
pub fn compute_schedule(terms: &LoanTerms) -> Vec<MonthlyPaymentRecord> {
    schedule_iter(terms).collect()
}

/// Sum of the interest portions across `schedule`.
pub fn total_interest(schedule: &[MonthlyPaymentRecord]) -> Money {
    schedule.iter().map(|r| r.interest_payment).sum()
}
