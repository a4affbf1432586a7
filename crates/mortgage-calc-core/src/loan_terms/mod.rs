pub mod terms;
pub mod validation;

pub use terms::{LoanInput, LoanTerms};
