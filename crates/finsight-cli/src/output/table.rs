use colored::Colorize;
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Full reports (the `result`/`warnings`/`methodology` envelope around an
/// `AnalysisReport`) render as sections: risk headline, metrics, alerts,
/// scorecard, insights. Anything else falls back to a flat field/value
/// table.
pub fn print_table(value: &Value) {
    if let Some(report) = value.get("result").filter(|r| r.get("metrics").is_some()) {
        print_report(report);
        print_envelope_footer(value);
        return;
    }
    match value {
        Value::Object(_) => print_flat_object(value),
        Value::Array(arr) => print_alert_list(arr),
        _ => println!("{}", value),
    }
}

fn print_report(report: &Value) {
    if let Some(name) = report.get("company_name").and_then(Value::as_str) {
        println!("{}", name.bold());
    }

    if let Some(risk) = report.get("risk") {
        let score = risk.get("score").and_then(Value::as_u64).unwrap_or(0);
        let level = risk.get("level").and_then(Value::as_str).unwrap_or("?");
        let colored_level = match level {
            "low" => level.green(),
            "medium" => level.yellow(),
            _ => level.red(),
        };
        println!("Risk score: {} ({})\n", score, colored_level);
    }

    if let Some(metrics) = report.get("metrics") {
        println!("{}", "Metrics".bold());
        print_flat_object(metrics);
    }

    if let Some(Value::Array(alerts)) = report.get("alerts") {
        if !alerts.is_empty() {
            println!("\n{}", "Alerts".bold());
            print_alert_list(alerts);
        }
    }

    if let Some(Value::Array(entries)) = report.get("scorecard").and_then(|s| s.get("entries")) {
        println!("\n{}", "Health scorecard".bold());
        print_scorecard(entries);
    }

    if let Some(Value::Object(insights)) = report.get("insights") {
        println!("\n{}", "Insights".bold());
        for (section, text) in insights {
            if let Value::String(s) = text {
                println!("  {}: {}", section.replace('_', " "), s);
            }
        }
    }
}

fn print_alert_list(alerts: &[Value]) {
    for alert in alerts {
        let severity = alert.get("severity").and_then(Value::as_str).unwrap_or("");
        let icon = alert.get("icon").and_then(Value::as_str).unwrap_or("");
        let message = alert.get("message").and_then(Value::as_str).unwrap_or("");
        let tag = match severity {
            "critical" => severity.red().bold(),
            "warning" => severity.yellow(),
            "success" => severity.green(),
            _ => severity.normal(),
        };
        println!("  {} [{}] {}", icon, tag, message);
    }
}

fn print_scorecard(entries: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Parameter", "Value", "Low", "High", "Band"]);
    for entry in entries {
        builder.push_record([
            entry.get("label").and_then(Value::as_str).unwrap_or(""),
            &format_value(entry.get("value").unwrap_or(&Value::Null)),
            &format_value(entry.get("low_threshold").unwrap_or(&Value::Null)),
            &format_value(entry.get("high_threshold").unwrap_or(&Value::Null)),
            entry.get("band").and_then(Value::as_str).unwrap_or(""),
        ]);
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_envelope_footer(envelope: &Value) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow());
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

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    format!("{:.4}", f)
                }
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
