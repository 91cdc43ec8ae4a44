use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::alerts::{generate_alerts, Alert};
use crate::insights::{
    asset_composition_insights, health_scorecard_insights, key_metrics_insights,
    liability_composition_insights, liquidity_insights, profit_loss_insights,
    working_capital_insights, DEFAULT_LIQUIDITY_TARGET, DEFAULT_WC_BENCHMARK,
};
use crate::metrics::{calculate_metrics, DEFAULT_COGS_PERCENTAGE};
use crate::risk::{calculate_risk_score, RiskAssessment};
use crate::scorecard::{evaluate_scorecard, ScorecardSummary, DEFAULT_THRESHOLD_MULTIPLIER};
use crate::types::{validate, with_metadata, ComputationOutput, FinancialData, Metrics};
use crate::FinsightResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Tunable parameters for a full analysis run. All have conventional
/// defaults; callers override individual fields as sliders move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Assumed COGS as a percentage of revenue (0-100)
    pub cogs_percentage: f64,
    /// Scales every scorecard threshold pair
    pub threshold_multiplier: f64,
    /// Current-ratio target for the liquidity summary
    pub liquidity_target: f64,
    /// Working-capital cycle benchmark in days
    pub working_capital_benchmark: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            cogs_percentage: DEFAULT_COGS_PERCENTAGE,
            threshold_multiplier: DEFAULT_THRESHOLD_MULTIPLIER,
            liquidity_target: DEFAULT_LIQUIDITY_TARGET,
            working_capital_benchmark: DEFAULT_WC_BENCHMARK,
        }
    }
}

/// The seven per-section summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub key_metrics: String,
    pub health_scorecard: String,
    pub profit_loss: String,
    pub asset_composition: String,
    pub liability_composition: String,
    pub liquidity: String,
    pub working_capital: String,
}

/// Everything the rendering layer needs for one statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub company_name: String,
    pub metrics: Metrics,
    pub risk: RiskAssessment,
    pub alerts: Vec<Alert>,
    pub scorecard: ScorecardSummary,
    pub insights: Insights,
    /// Display-only; share of holdings held by the largest holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoter_holding_pct: Option<f64>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full pipeline: metrics, risk score, alerts, scorecard and all
/// seven insight sections.
///
/// The caller owns the data and parameters and passes them in on every
/// invocation; nothing is cached between calls. Degenerate denominators do
/// not fail the analysis — they surface as Infinity/NaN in the metrics and
/// as warnings in the envelope.
pub fn analyze(
    data: &FinancialData,
    params: &AnalysisParams,
) -> FinsightResult<ComputationOutput<AnalysisReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(data)?;

    let metrics = calculate_metrics(data, params.cogs_percentage);

    if metrics.total_current_liab == 0.0 {
        warnings.push("Total current liabilities are zero; liquidity ratios are not finite.".into());
    }
    if data.income_statement.revenue == 0.0 {
        warnings.push("Revenue is zero; margin and days ratios are not finite.".into());
    }
    if metrics.total_equity == 0.0 {
        warnings.push("Total equity is zero; ROE and debt-to-equity are not finite.".into());
    }
    if metrics.total_assets == 0.0 {
        warnings.push("Total assets are zero; ROA and asset turnover are not finite.".into());
    }

    let risk = calculate_risk_score(&metrics);
    let alerts = generate_alerts(data, &metrics);
    let scorecard = evaluate_scorecard(&metrics, params.threshold_multiplier);

    let insights = Insights {
        key_metrics: key_metrics_insights(data, &metrics),
        health_scorecard: health_scorecard_insights(&metrics, params.threshold_multiplier),
        profit_loss: profit_loss_insights(data),
        asset_composition: asset_composition_insights(data, &metrics),
        liability_composition: liability_composition_insights(data, &metrics),
        liquidity: liquidity_insights(&metrics, params.liquidity_target),
        working_capital: working_capital_insights(&metrics, params.working_capital_benchmark),
    };

    let report = AnalysisReport {
        company_name: data.company_name.clone(),
        metrics,
        risk,
        alerts,
        scorecard,
        insights,
        promoter_holding_pct: data.promoter_holding_pct(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "cogs_estimated_as_pct_of_revenue": params.cogs_percentage,
        "threshold_multiplier": params.threshold_multiplier,
        "liquidity_target": params.liquidity_target,
        "working_capital_benchmark_days": params.working_capital_benchmark,
        "debt_definition": "long-term borrowings only",
    });

    Ok(with_metadata(
        "Financial statement ratio analysis with composite risk scoring",
        &assumptions,
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
