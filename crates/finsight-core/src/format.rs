//! Display formatting for monetary amounts and ratio values.
//!
//! Amounts follow the Indian convention: values of one crore (1,00,00,000)
//! and above abbreviate to "Cr", one lakh (1,00,000) and above to "L", and
//! smaller values use lakh/crore digit grouping (last three digits, then
//! groups of two).

const ONE_CRORE: f64 = 10_000_000.0;
const ONE_LAKH: f64 = 100_000.0;

/// Format a rupee amount for display.
///
/// Non-finite inputs render as-is ("NaN", "inf"); degenerate arithmetic is
/// an accepted artifact, not an error.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{}", amount);
    }
    if amount.abs() >= ONE_CRORE {
        format!("₹{:.2} Cr", amount / ONE_CRORE)
    } else if amount.abs() >= ONE_LAKH {
        format!("₹{:.2} L", amount / ONE_LAKH)
    } else {
        format!("₹{}", group_indian(amount))
    }
}

/// Dimensionless ratios display with two decimals.
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}", value)
}

/// Percentages display with one decimal.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Day counts display with no decimals.
pub fn format_days(value: f64) -> String {
    format!("{:.0} days", value)
}

/// Indian-style digit grouping: 1234567 -> "12,34,567". Keeps up to two
/// decimal places when the amount is not whole.
fn group_indian(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let fraction = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 {
            let rem = n - i;
            // A separator before the last 3 digits, then every 2
            if rem == 3 || (rem > 3 && (rem - 3) % 2 == 0) {
                grouped.push(',');
            }
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction > 0 {
        out.push_str(&format!(".{:02}", fraction));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
