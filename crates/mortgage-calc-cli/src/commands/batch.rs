use clap::Args;
use log::{debug, info};
use serde_json::Value;

use mortgage_calc_core::amortization::analyze_loan;
use mortgage_calc_core::loan_terms::LoanInput;

use crate::input;

/// Arguments for batch mode
#[derive(Args)]
pub struct BatchArgs {
    /// JSON array of loans, given inline
    #[arg(long, conflicts_with = "input")]
    pub data: Option<String>,

    /// Path to a JSON file holding an array of loans
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loans: Vec<LoanInput> = if let Some(ref data) = args.data {
        parse_batch(data)?
    } else if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(loans) = input::stdin::read_piped()? {
        loans
    } else {
        return Err("--data '<json>', --input <file.json> or stdin required for batch mode".into());
    };

    info!("batch mode: {} loans", loans.len());
    Ok(Value::Array(analyze_batch(&loans)?))
}

fn parse_batch(data: &str) -> Result<Vec<LoanInput>, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse batch data: {e}"))
}

/// Analyse every loan in order. The first invalid loan stops the batch and is
/// reported by its 1-based position.
fn analyze_batch(loans: &[LoanInput]) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    loans
        .iter()
        .enumerate()
        .map(|(i, loan)| -> Result<Value, Box<dyn std::error::Error>> {
            debug!("processing loan {}: {loan:?}", i + 1);
            let result = analyze_loan(loan).map_err(|e| format!("loan #{}: {e}", i + 1))?;
            Ok(serde_json::to_value(result)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = r#"[
        {"purchase_price": 300000, "down_payment": 60000, "term_months": 360, "annual_interest_rate": 3.5},
        {"purchase_price": 450000, "down_payment_percentage": 10, "term_months": 180, "annual_interest_rate": 6.125},
        {"loan_amount": "125000", "term_months": 120, "annual_interest_rate": "0"}
    ]"#;

    #[test]
    fn test_batch_yields_one_envelope_per_loan() {
        let loans = parse_batch(BATCH).unwrap();
        let results = analyze_batch(&loans).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["result"]["loan_amount"], "240000");
        assert_eq!(results[1]["result"]["term_months"], 180);
        assert_eq!(
            results[2]["result"]["schedule"].as_array().map(Vec::len),
            Some(120)
        );
    }

    #[test]
    fn test_invalid_loan_is_reported_by_position() {
        let loans = parse_batch(
            r#"[
                {"loan_amount": 1000, "term_months": 12, "annual_interest_rate": 5},
                {"loan_amount": 1000, "term_months": 0, "annual_interest_rate": 500}
            ]"#,
        )
        .unwrap();
        let err = analyze_batch(&loans).unwrap_err().to_string();
        assert!(err.starts_with("loan #2:"));
        assert!(err.contains("Loan term must be greater than zero."));
        assert!(err.contains("Interest rate must be between 0 and 100."));
    }

    #[test]
    fn test_record_mixing_shapes_is_a_parse_error() {
        let err = parse_batch(
            r#"[{"loan_amount": 1000, "purchase_price": 500000, "term_months": 360, "annual_interest_rate": 4}]"#,
        )
        .unwrap_err();
        assert!(err.starts_with("Failed to parse batch data"));
    }

    #[test]
    fn test_malformed_batch_is_a_parse_error() {
        let err = parse_batch(r#"{"loan_amount": 1000}"#).unwrap_err();
        assert!(err.starts_with("Failed to parse batch data"));
    }
}
