pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Preferred column order for schedule tables; any other keys follow after.
pub(crate) const SCHEDULE_COLUMNS: [&str; 7] = [
    "month",
    "days_in_period",
    "payment",
    "interest",
    "principal_paid",
    "accumulated_interest",
    "balance",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Column headers for a schedule row object: known columns first, in
/// calculation order, then anything unrecognised.
pub(crate) fn schedule_headers(row: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut headers: Vec<String> = SCHEDULE_COLUMNS
        .iter()
        .filter(|c| row.contains_key(**c))
        .map(|c| c.to_string())
        .collect();
    for key in row.keys() {
        if !headers.iter().any(|h| h == key) {
            headers.push(key.clone());
        }
    }
    headers
}
