use serde::{Deserialize, Serialize};

use crate::types::Metrics;

/// Default scaling applied to the threshold pairs.
pub const DEFAULT_THRESHOLD_MULTIPLIER: f64 = 1.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorecardBand {
    Concerning,
    Moderate,
    Excellent,
}

impl std::fmt::Display for ScorecardBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concerning => write!(f, "concerning"),
            Self::Moderate => write!(f, "moderate"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

/// One scorecard row: a ratio judged against its scaled threshold pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardEntry {
    pub label: String,
    pub value: f64,
    pub low_threshold: f64,
    pub high_threshold: f64,
    pub band: ScorecardBand,
}

/// Tri-count over the fixed eight-ratio list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardSummary {
    pub excellent: usize,
    pub moderate: usize,
    pub concerning: usize,
    pub entries: Vec<ScorecardEntry>,
}

// Base (low, high) threshold pairs before multiplier scaling.
const SCORECARD_ROWS: [(&str, f64, f64); 8] = [
    ("Current Ratio", 1.5, 2.5),
    ("Quick Ratio", 0.8, 1.2),
    ("Cash Ratio", 0.2, 0.5),
    ("Net Margin %", 3.0, 8.0),
    ("ROE %", 10.0, 20.0),
    ("ROA %", 5.0, 10.0),
    ("Debt/Equity", 0.3, 0.7),
    ("Asset Turnover", 1.0, 2.0),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify the fixed eight-ratio list against threshold pairs scaled by
/// `threshold_multiplier` and count the bands.
///
/// Band rule: value >= high is excellent, >= low is moderate, otherwise
/// concerning. A NaN value fails both comparisons and lands in concerning.
pub fn evaluate_scorecard(metrics: &Metrics, threshold_multiplier: f64) -> ScorecardSummary {
    let values = [
        metrics.current_ratio,
        metrics.quick_ratio,
        metrics.cash_ratio,
        metrics.net_margin,
        metrics.roe,
        metrics.roa,
        metrics.debt_to_equity,
        metrics.asset_turnover,
    ];

    let mut entries = Vec::with_capacity(SCORECARD_ROWS.len());
    let (mut excellent, mut moderate, mut concerning) = (0, 0, 0);

    for ((label, low, high), value) in SCORECARD_ROWS.iter().zip(values) {
        let low_threshold = low * threshold_multiplier;
        let high_threshold = high * threshold_multiplier;
        let band = if value >= high_threshold {
            excellent += 1;
            ScorecardBand::Excellent
        } else if value >= low_threshold {
            moderate += 1;
            ScorecardBand::Moderate
        } else {
            concerning += 1;
            ScorecardBand::Concerning
        };
        entries.push(ScorecardEntry {
            label: label.to_string(),
            value,
            low_threshold,
            high_threshold,
            band,
        });
    }

    ScorecardSummary {
        excellent,
        moderate,
        concerning,
        entries,
    }
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

    #[test]
    fn test_counts_sum_to_eight() {
        let m = calculate_metrics(&sample_data(), 85.0);
        let s = evaluate_scorecard(&m, 1.0);
        assert_eq!(s.entries.len(), 8);
        assert_eq!(s.excellent + s.moderate + s.concerning, 8);
    }

    #[test]
    fn test_reference_bands() {
        let m = calculate_metrics(&sample_data(), 85.0);
        let s = evaluate_scorecard(&m, 1.0);
        let band_of = |label: &str| {
            s.entries
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.band)
                .unwrap()
        };

        // current_ratio 1.25 < 1.5
        assert_eq!(band_of("Current Ratio"), ScorecardBand::Concerning);
        // quick_ratio 1.0 in [0.8, 1.2)
        assert_eq!(band_of("Quick Ratio"), ScorecardBand::Moderate);
        // net_margin 10 >= 8
        assert_eq!(band_of("Net Margin %"), ScorecardBand::Excellent);
        // ROE 16.67 in [10, 20)
        assert_eq!(band_of("ROE %"), ScorecardBand::Moderate);
        // debt_to_equity 0.33 in [0.3, 0.7); note higher is worse for
        // leverage but the scorecard applies the same band rule to all rows
        assert_eq!(band_of("Debt/Equity"), ScorecardBand::Moderate);
    }

    #[test]
    fn test_multiplier_scales_thresholds() {
        let m = calculate_metrics(&sample_data(), 85.0);
        let strict = evaluate_scorecard(&m, 2.0);
        let lax = evaluate_scorecard(&m, 0.5);
        // Doubled thresholds can only shrink the excellent count
        assert!(strict.excellent <= lax.excellent);

        let row = &strict.entries[0];
        assert_eq!(row.low_threshold, 3.0);
        assert_eq!(row.high_threshold, 5.0);
    }

    #[test]
    fn test_nan_lands_in_concerning() {
        let mut m = calculate_metrics(&sample_data(), 85.0);
        m.current_ratio = f64::NAN;
        m.net_margin = f64::NAN;
        let s = evaluate_scorecard(&m, 1.0);
        let nan_rows: Vec<_> = s
            .entries
            .iter()
            .filter(|e| e.value.is_nan())
            .collect();
        assert_eq!(nan_rows.len(), 2);
        assert!(nan_rows
            .iter()
            .all(|e| e.band == ScorecardBand::Concerning));
    }

    #[test]
    fn test_infinite_ratio_is_excellent() {
        let mut m = calculate_metrics(&sample_data(), 85.0);
        m.cash_ratio = f64::INFINITY;
        let s = evaluate_scorecard(&m, 1.0);
        let cash = s.entries.iter().find(|e| e.label == "Cash Ratio").unwrap();
        assert_eq!(cash.band, ScorecardBand::Excellent);
    }
}
