use serde_json::Value;

use super::{envelopes, plain_cell};

/// Print just the monthly payment of each loan, one per line, unrounded.
///
/// Falls back to the total interest, then to the whole envelope.
pub fn print_minimal(value: &Value) {
    for envelope in envelopes(value) {
        println!("{}", minimal_line(envelope));
    }
}

fn minimal_line(envelope: &Value) -> String {
    let result = envelope.get("result").unwrap_or(envelope);
    ["monthly_payment", "total_interest"]
        .iter()
        .filter_map(|key| result.get(*key))
        .find(|v| !v.is_null())
        .map(plain_cell)
        .unwrap_or_else(|| result.to_string())
}
