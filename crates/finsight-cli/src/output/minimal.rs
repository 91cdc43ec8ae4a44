use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Reports reduce to the risk headline; bare result objects fall back to a
/// priority list of well-known fields, then to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // A full report: print "score (level)"
    if let Some(risk) = result_obj.get("risk").or_else(|| {
        result_obj
            .get("score")
            .is_some()
            .then_some(result_obj)
    }) {
        if let (Some(score), Some(level)) = (
            risk.get("score").and_then(Value::as_u64),
            risk.get("level").and_then(Value::as_str),
        ) {
            println!("{} ({})", score, level);
            return;
        }
    }

    let priority_keys = [
        "net_margin",
        "current_ratio",
        "working_capital",
        "excellent",
        "key_metrics",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    if let Value::Array(arr) = result_obj {
        for item in arr {
            if let Some(msg) = item.get("message").and_then(Value::as_str) {
                println!("{}", msg);
            }
        }
        return;
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
