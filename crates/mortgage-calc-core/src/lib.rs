pub mod amortization;
pub mod error;
pub mod loan_terms;
pub mod types;

pub use error::{MortgageCalcError, ValidationError};
pub use types::*;

/// Standard result type for all mortgage-calc operations
pub type MortgageCalcResult<T> = Result<T, MortgageCalcError>;
