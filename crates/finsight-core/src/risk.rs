use serde::{Deserialize, Serialize};

use crate::types::Metrics;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 (worst) to 100 (best)
    pub score: u8,
    pub level: RiskLevel,
}

// Classification cut points
const LOW_RISK_FLOOR: u8 = 70;
const MEDIUM_RISK_FLOOR: u8 = 40;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score overall financial risk on a 0-100 scale.
///
/// Starts from 100 and applies a fixed table of per-metric penalties; each
/// metric contributes at most one penalty but penalties stack across
/// metrics. The cut points and magnitudes define the product's risk
/// semantics and must not drift. A NaN metric fails every comparison and
/// contributes nothing.
pub fn calculate_risk_score(metrics: &Metrics) -> RiskAssessment {
    let mut penalty: i32 = 0;

    if metrics.current_ratio < 1.0 {
        penalty += 20;
    } else if metrics.current_ratio < 1.5 {
        penalty += 10;
    }

    if metrics.quick_ratio < 0.5 {
        penalty += 15;
    } else if metrics.quick_ratio < 0.8 {
        penalty += 8;
    }

    if metrics.cash_ratio < 0.1 {
        penalty += 15;
    } else if metrics.cash_ratio < 0.2 {
        penalty += 8;
    }

    if metrics.net_margin < 0.0 {
        penalty += 25;
    } else if metrics.net_margin < 3.0 {
        penalty += 12;
    }

    if metrics.roe < 0.0 {
        penalty += 15;
    } else if metrics.roe < 5.0 {
        penalty += 8;
    }

    if metrics.debt_to_equity > 1.5 {
        penalty += 20;
    } else if metrics.debt_to_equity > 0.8 {
        penalty += 10;
    }

    if metrics.working_capital < 0.0 {
        penalty += 20;
    }

    if metrics.ccc > 120.0 {
        penalty += 10;
    } else if metrics.ccc > 90.0 {
        penalty += 5;
    }

    let score = (100 - penalty).clamp(0, 100) as u8;
    RiskAssessment {
        score,
        level: classify(score),
    }
}

fn classify(score: u8) -> RiskLevel {
    if score >= LOW_RISK_FLOOR {
        RiskLevel::Low
    } else if score >= MEDIUM_RISK_FLOOR {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
