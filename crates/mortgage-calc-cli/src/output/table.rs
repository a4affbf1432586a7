use colored::Colorize;
use serde_json::{Map, Value};
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{builder::Builder, Table};

use super::{decimal_of, envelopes, format_money, money_cell, plain_cell};

const SCHEDULE_HEADERS: [&str; 6] = [
    "Month",
    "Payment Amount",
    "Principal Payment",
    "Interest Payment",
    "Total Interest",
    "Remaining Balance",
];

/// Money columns of a schedule row, in `SCHEDULE_HEADERS` order after the month.
const SCHEDULE_MONEY_FIELDS: [&str; 5] = [
    "total_monthly_payment",
    "principal_payment",
    "interest_payment",
    "running_total_interest",
    "remaining_balance",
];

/// Headline figures, then the schedule, for each loan in `value`.
pub fn print_table(value: &Value) {
    let loans = envelopes(value);
    let batch = value.is_array();

    for (i, envelope) in loans.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        match envelope.get("result") {
            Some(Value::Object(result)) => {
                if batch {
                    println!("{}", loan_heading(i + 1, result).as_str().yellow().bold());
                }
                print_result(result, envelope);
            }
            _ => println!("{}", envelope),
        }
    }
}

fn print_result(result: &Map<String, Value>, envelope: &Value) {
    println!(
        "{} {}",
        "Total Monthly Payment:".yellow().bold(),
        field_money(result, "monthly_payment").as_str().green().bold()
    );
    println!(
        "{} {}",
        "Total Interest Paid:".yellow().bold(),
        field_money(result, "total_interest").as_str().green().bold()
    );

    if let Some(Value::Array(rows)) = result.get("schedule") {
        println!("{}", schedule_table(rows));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// `Loan 2: $450,000.00 with $45,000.00 down, 15 years at 6.125% interest`
fn loan_heading(index: usize, result: &Map<String, Value>) -> String {
    let term = result
        .get("term_months")
        .and_then(Value::as_u64)
        .map(|m| {
            if m % 12 == 0 {
                format!("{} years", m / 12)
            } else {
                format!("{m} months")
            }
        })
        .unwrap_or_default();
    let rate = result
        .get("annual_interest_rate")
        .and_then(decimal_of)
        .map(|r| r.normalize().to_string())
        .unwrap_or_default();

    match (
        result.get("purchase_price").and_then(decimal_of),
        result.get("down_payment").and_then(decimal_of),
    ) {
        (Some(price), Some(down)) => format!(
            "Loan {index}: {} with {} down, {term} at {rate}% interest",
            format_money(price),
            format_money(down)
        ),
        _ => format!(
            "Loan {index}: {}, {term} at {rate}% interest",
            field_money(result, "loan_amount")
        ),
    }
}

fn field_money(result: &Map<String, Value>, key: &str) -> String {
    result.get(key).map(money_cell).unwrap_or_default()
}

pub(crate) fn schedule_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_HEADERS);

    for row in rows {
        let mut record = vec![plain_cell(&row["month"])];
        record.extend(SCHEDULE_MONEY_FIELDS.iter().map(|f| money_cell(&row[*f])));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Columns::first()).with(Alignment::center()));
    table
}
