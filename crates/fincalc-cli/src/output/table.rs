use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::schedule_headers;

/// Format output as tables: summary fields as field/value rows, the
/// schedule (when present) as one row per period. Decimal values are
/// rendered with thousands grouping.
pub fn print_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    match map.get("result") {
        Some(Value::Object(result)) => {
            print_summary(result);
            if let Some(Value::Array(schedule)) = result.get("schedule") {
                println!();
                print_schedule(schedule);
            }
            print_footer(map);
        }
        _ => print_summary(map),
    }
}

fn print_summary(result: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result {
        if key == "schedule" {
            continue;
        }
        builder.push_record([key.as_str(), &display_value(val)]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_schedule(schedule: &[Value]) {
    let Some(Value::Object(first)) = schedule.first() else {
        println!("(empty schedule)");
        return;
    };

    let headers = schedule_headers(first);
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in schedule {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(display_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn print_footer(envelope: &serde_json::Map<String, Value>) {
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

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

/// Decimals cross the JSON boundary as strings; render them grouped, with
/// two decimals unless the value is integral.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => match Decimal::from_str(s) {
            Ok(d) => {
                let decimals = if d.fract().is_zero() { 0 } else { 2 };
                fincalc_core::format::format_number(Some(d), decimals)
            }
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
