use serde_json::Value;
use std::io;

use super::schedule_headers;

/// Write output as CSV to stdout. Schedules become one record per period;
/// summary-only output becomes field,value pairs. Values stay unformatted
/// so the CSV round-trips numerically.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result.get("schedule").and_then(Value::as_array) {
        Some(schedule) if !schedule.is_empty() => {
            if let Some(Value::Object(first)) = schedule.first() {
                let headers = schedule_headers(first);
                let _ = wtr.write_record(&headers);
                for row in schedule {
                    if let Value::Object(map) = row {
                        let record: Vec<String> = headers
                            .iter()
                            .map(|h| map.get(h.as_str()).map(raw_value).unwrap_or_default())
                            .collect();
                        let _ = wtr.write_record(&record);
                    }
                }
            }
        }
        _ => {
            if let Some(map) = result.as_object() {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    if key == "schedule" {
                        continue;
                    }
                    let _ = wtr.write_record([key.as_str(), &raw_value(val)]);
                }
            }
        }
    }

    let _ = wtr.flush();
}

fn raw_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
