use serde_json::Value;
use std::io;

use super::{envelopes, plain_cell};

const SCHEDULE_COLUMNS: [&str; 6] = [
    "month",
    "total_monthly_payment",
    "interest_payment",
    "principal_payment",
    "running_total_interest",
    "remaining_balance",
];

/// Write every schedule row to stdout as CSV at full decimal precision.
///
/// Batches get a leading `loan` column with each loan's 1-based position.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_schedules(&mut wtr, value) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_schedules<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let batch = value.is_array();

    let mut header: Vec<&str> = Vec::with_capacity(SCHEDULE_COLUMNS.len() + 1);
    if batch {
        header.push("loan");
    }
    header.extend(SCHEDULE_COLUMNS);
    wtr.write_record(&header)?;

    for (i, envelope) in envelopes(value).into_iter().enumerate() {
        let Some(Value::Array(rows)) = envelope.pointer("/result/schedule") else {
            continue;
        };
        for row in rows {
            let mut record: Vec<String> = Vec::with_capacity(header.len());
            if batch {
                record.push((i + 1).to_string());
            }
            record.extend(SCHEDULE_COLUMNS.iter().map(|c| plain_cell(&row[*c])));
            wtr.write_record(&record)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
