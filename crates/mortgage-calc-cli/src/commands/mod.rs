pub mod batch;
pub mod prompt;
pub mod schedule;

/// Terms are entered in years at the prompt and stored in months.
pub const MONTHS_PER_YEAR: i32 = 12;

/// Convert a term in years to months, refusing terms too long to count.
pub fn years_to_months(years: i32) -> Result<i32, String> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| format!("Loan term of {years} years is too long"))
}
