use serde::{Deserialize, Serialize};

use crate::format::{format_days, format_inr, format_pct, format_ratio};
use crate::types::{FinancialData, Metrics};

/// An alert list never grows beyond this many entries.
pub const MAX_ALERTS: usize = 6;

/// Fixed absolute threshold for the low-cash warning, in rupees. Kept as an
/// absolute amount rather than scaled to company size.
pub const LOW_CASH_THRESHOLD: f64 = 100_000.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Sort rank; lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Info => 2,
            Self::Success => 3,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
            Self::Success => "✅",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub icon: String,
    pub message: String,
}

impl Alert {
    fn new(severity: Severity, message: String) -> Self {
        Alert {
            severity,
            icon: severity.icon().to_string(),
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate the fixed alert rule set against a statement and its metrics.
///
/// Every matching rule emits exactly one alert. The result is stably sorted
/// by severity (ties keep rule-evaluation order) and truncated to
/// [`MAX_ALERTS`]. NaN metrics match no rule.
pub fn generate_alerts(data: &FinancialData, metrics: &Metrics) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = Vec::new();
    let cash = data.assets.current_assets.cash;

    // Critical
    if metrics.current_ratio < 1.0 {
        alerts.push(Alert::new(
            Severity::Critical,
            format!(
                "Current ratio of {} signals potential liquidity issues",
                format_ratio(metrics.current_ratio)
            ),
        ));
    }
    if metrics.net_margin < 0.0 {
        alerts.push(Alert::new(
            Severity::Critical,
            format!(
                "Operating at a loss with net margin of {}",
                format_pct(metrics.net_margin)
            ),
        ));
    }
    if metrics.working_capital < 0.0 {
        alerts.push(Alert::new(
            Severity::Critical,
            format!(
                "Negative working capital of {} may strain day-to-day operations",
                format_inr(metrics.working_capital)
            ),
        ));
    }

    // Warning
    if metrics.debt_to_equity > 1.0 {
        alerts.push(Alert::new(
            Severity::Warning,
            format!(
                "Debt exceeds equity with debt-to-equity of {}",
                format_ratio(metrics.debt_to_equity)
            ),
        ));
    }
    if cash < LOW_CASH_THRESHOLD {
        alerts.push(Alert::new(
            Severity::Warning,
            format!("Low cash reserves of {}", format_inr(cash)),
        ));
    }
    if metrics.ccc > 120.0 {
        alerts.push(Alert::new(
            Severity::Warning,
            format!(
                "Slow cash conversion cycle of {}",
                format_days(metrics.ccc)
            ),
        ));
    }
    if metrics.quick_ratio < 0.8 {
        alerts.push(Alert::new(
            Severity::Warning,
            format!(
                "Quick ratio of {} is below the 0.80 comfort level",
                format_ratio(metrics.quick_ratio)
            ),
        ));
    }

    // Info
    if metrics.dio > 90.0 {
        alerts.push(Alert::new(
            Severity::Info,
            format!(
                "High inventory holding period of {}",
                format_days(metrics.dio)
            ),
        ));
    }
    if metrics.dso > 45.0 {
        alerts.push(Alert::new(
            Severity::Info,
            format!(
                "Receivables collection takes {} on average",
                format_days(metrics.dso)
            ),
        ));
    }

    // Success
    if metrics.current_ratio >= 2.0 {
        alerts.push(Alert::new(
            Severity::Success,
            format!(
                "Strong liquidity with current ratio of {}",
                format_ratio(metrics.current_ratio)
            ),
        ));
    }
    if metrics.net_margin >= 8.0 {
        alerts.push(Alert::new(
            Severity::Success,
            format!(
                "Healthy profitability with net margin of {}",
                format_pct(metrics.net_margin)
            ),
        ));
    }
    if metrics.roe >= 15.0 {
        alerts.push(Alert::new(
            Severity::Success,
            format!(
                "Excellent return on equity of {}",
                format_pct(metrics.roe)
            ),
        ));
    }

    // Stable sort keeps rule-evaluation order within a severity band
    alerts.sort_by_key(|a| a.severity.rank());
    alerts.truncate(MAX_ALERTS);
    alerts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculate_metrics;
    use crate::testutil::sample_data;
    use pretty_assertions::assert_eq;

    fn assert_sorted(alerts: &[Alert]) {
        for pair in alerts.windows(2) {
            assert!(
                pair[0].severity.rank() <= pair[1].severity.rank(),
                "{:?} appears before {:?}",
                pair[1].severity,
                pair[0].severity
            );
        }
    }

    #[test]
    fn test_reference_scenario_alerts() {
        let data = sample_data();
        let m = calculate_metrics(&data, 85.0);
        let alerts = generate_alerts(&data, &m);

        assert!(alerts.len() <= MAX_ALERTS);
        assert_sorted(&alerts);

        // cash 50,000 < 1L
        assert!(alerts
            .iter()
            .any(|a| a.severity == Severity::Warning && a.message.contains("Low cash reserves")));
        // net margin 10% >= 8
        assert!(alerts
            .iter()
            .any(|a| a.severity == Severity::Success && a.message.contains("net margin")));
        // ROE 16.7% >= 15
        assert!(alerts
            .iter()
            .any(|a| a.message.contains("return on equity of 16.7%")));
    }

    #[test]
    fn test_loss_alert_present_and_first_band() {
        let mut data = sample_data();
        data.income_statement.pat = -50_000.0;
        let m = calculate_metrics(&data, 85.0);
        assert_eq!(m.net_margin, -5.0);

        let alerts = generate_alerts(&data, &m);
        let loss = alerts
            .iter()
            .find(|a| a.message.starts_with("Operating at a loss"))
            .expect("loss alert missing");
        assert_eq!(loss.severity, Severity::Critical);
        assert!(loss.message.contains("-5.0%"));
        assert_sorted(&alerts);
    }

    #[test]
    fn test_negative_working_capital_iff() {
        let mut data = sample_data();
        let m = calculate_metrics(&data, 85.0);
        assert!(m.working_capital > 0.0);
        assert!(!generate_alerts(&data, &m)
            .iter()
            .any(|a| a.message.contains("Negative working capital")));

        data.liabilities.current_liabilities.other_current_liabilities = 700_000.0;
        let m = calculate_metrics(&data, 85.0);
        assert!(m.working_capital < 0.0);
        assert!(generate_alerts(&data, &m)
            .iter()
            .any(|a| a.severity == Severity::Critical
                && a.message.contains("Negative working capital")));
    }

    #[test]
    fn test_cap_at_six() {
        // Distressed company trips far more than six rules
        let mut data = sample_data();
        data.income_statement.pat = -200_000.0;
        data.assets.current_assets.cash = 1_000.0;
        data.assets.current_assets.inventories = 400_000.0;
        data.assets.current_assets.trade_receivables = 350_000.0;
        data.liabilities.current_liabilities.other_current_liabilities = 900_000.0;
        data.liabilities.non_current_liabilities.long_term_borrowings = 900_000.0;

        let m = calculate_metrics(&data, 85.0);
        let alerts = generate_alerts(&data, &m);
        assert_eq!(alerts.len(), MAX_ALERTS);
        assert_sorted(&alerts);
        // Critical rules survive truncation
        assert!(alerts.iter().any(|a| a.severity == Severity::Critical));
    }

    #[test]
    fn test_nan_metrics_fire_nothing() {
        let mut data = sample_data();
        data.income_statement.revenue = 0.0;
        data.income_statement.pat = 0.0;
        data.assets.current_assets.inventories = 0.0;
        data.liabilities.current_liabilities.trade_payables = 0.0;
        let m = calculate_metrics(&data, 85.0);
        assert!(m.net_margin.is_nan());
        assert!(m.ccc.is_nan());

        let alerts = generate_alerts(&data, &m);
        // Neither the loss band nor the success band fires on NaN margin
        assert!(!alerts.iter().any(|a| a.message.contains("net margin")));
        assert!(!alerts.iter().any(|a| a.message.contains("cash conversion")));
    }

    #[test]
    fn test_formatting_precision() {
        let mut data = sample_data();
        data.liabilities.non_current_liabilities.long_term_borrowings = 800_000.0;
        let m = calculate_metrics(&data, 85.0);
        let alerts = generate_alerts(&data, &m);
        // debt_to_equity = 800k / 600k = 1.3333 -> two decimals
        assert!(alerts
            .iter()
            .any(|a| a.message.contains("debt-to-equity of 1.33")));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let alert = Alert::new(Severity::Critical, "x".into());
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains(r#""severity":"critical""#));
    }
}
