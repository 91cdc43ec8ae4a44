//! Per-section one-line summaries. Each generator runs a fixed ordered set
//! of threshold checks and joins the matching sentences with periods; a
//! section with a fallback emits it when nothing matches.

use crate::alerts::LOW_CASH_THRESHOLD;
use crate::format::format_inr;
use crate::scorecard::evaluate_scorecard;
use crate::types::{FinancialData, Metrics};

/// Default liquidity target for the current ratio; the quick and cash
/// targets derive from it (x0.67 and x0.2).
pub const DEFAULT_LIQUIDITY_TARGET: f64 = 1.5;

/// Default working-capital cycle benchmark in days.
pub const DEFAULT_WC_BENCHMARK: f64 = 90.0;

fn join(sentences: Vec<&str>) -> String {
    format!("{}.", sentences.join(". "))
}

/// Key metrics summary: profitability, returns, liquidity, leverage, cash
/// and working capital in one line.
pub fn key_metrics_insights(data: &FinancialData, metrics: &Metrics) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if metrics.net_margin > 5.0 {
        parts.push("Strong profitability with healthy net margin");
    } else if metrics.net_margin < 0.0 {
        parts.push("Operating at a loss");
    } else {
        parts.push("Moderate profitability");
    }

    if metrics.roe > 15.0 {
        parts.push("Excellent return on equity");
    } else if metrics.roe < 5.0 {
        parts.push("Low return on equity");
    } else {
        parts.push("Decent return on equity");
    }

    if metrics.current_ratio > 1.5 {
        parts.push("Strong liquidity position");
    } else if metrics.current_ratio < 1.0 {
        parts.push("Potential liquidity issues");
    } else {
        parts.push("Adequate liquidity");
    }

    if metrics.debt_to_equity < 0.5 {
        parts.push("Conservative leverage");
    } else if metrics.debt_to_equity > 1.0 {
        parts.push("High leverage risk");
    } else {
        parts.push("Moderate leverage");
    }

    if data.assets.current_assets.cash >= LOW_CASH_THRESHOLD {
        parts.push("Good cash reserves");
    } else {
        parts.push("Limited cash reserves");
    }

    if metrics.working_capital >= 0.0 {
        parts.push("Positive working capital");
    } else {
        parts.push("Negative working capital - potential cash flow issues");
    }

    join(parts)
}

/// Health scorecard tri-count summary.
pub fn health_scorecard_insights(metrics: &Metrics, threshold_multiplier: f64) -> String {
    let s = evaluate_scorecard(metrics, threshold_multiplier);
    let total = s.entries.len();
    format!(
        "Financial Health: {}/{} excellent, {}/{} moderate, {}/{} concerning parameters.",
        s.excellent, total, s.moderate, total, s.concerning, total
    )
}

/// Profit & loss summary.
pub fn profit_loss_insights(data: &FinancialData) -> String {
    let income = &data.income_statement;
    if income.pat > 0.0 {
        format!(
            "Profitable operation with PAT of {}. Revenue: {}, Expenses: {}.",
            format_inr(income.pat),
            format_inr(income.revenue),
            format_inr(income.total_expenses)
        )
    } else {
        format!(
            "Loss-making operation with loss of {}. Revenue: {}, Expenses: {}.",
            format_inr(income.pat.abs()),
            format_inr(income.revenue),
            format_inr(income.total_expenses)
        )
    }
}

/// Asset composition summary. Falls back to a balanced-composition note.
pub fn asset_composition_insights(data: &FinancialData, metrics: &Metrics) -> String {
    let current = &data.assets.current_assets;
    let total_assets = metrics.total_assets;
    let total_fixed: f64 = data.assets.fixed_assets.values().sum();
    let fixed_pct = total_fixed / total_assets * 100.0;

    let mut parts: Vec<&str> = Vec::new();

    if current.cash < LOW_CASH_THRESHOLD {
        parts.push("Low cash reserves");
    }
    if current.inventories > total_assets * 0.3 {
        parts.push("High inventory levels");
    }
    if current.trade_receivables > total_assets * 0.2 {
        parts.push("Significant receivables");
    }
    if fixed_pct > 70.0 {
        parts.push("Asset-heavy with high fixed assets");
    } else if fixed_pct < 30.0 {
        parts.push("Light asset base");
    }

    if parts.is_empty() {
        "Balanced asset composition.".to_string()
    } else {
        join(parts)
    }
}

/// Liability and equity composition summary.
pub fn liability_composition_insights(_data: &FinancialData, metrics: &Metrics) -> String {
    let equity_pct = metrics.total_equity / (metrics.total_equity + metrics.total_liabilities) * 100.0;
    let debt_pct = metrics.debt_to_assets * 100.0;

    let mut parts: Vec<&str> = Vec::new();

    if equity_pct > 60.0 {
        parts.push("Strong equity base");
    } else if equity_pct < 30.0 {
        parts.push("Low equity, high leverage");
    }

    if debt_pct > 50.0 {
        parts.push("High debt levels");
    } else if debt_pct < 20.0 {
        parts.push("Conservative debt usage");
    }

    if metrics.debt_to_equity > 1.0 {
        parts.push("Debt exceeds equity");
    } else {
        parts.push("Equity exceeds debt");
    }

    join(parts)
}

/// Liquidity summary against a tunable target for the current ratio.
pub fn liquidity_insights(metrics: &Metrics, target: f64) -> String {
    let checks = [
        metrics.current_ratio >= target,
        metrics.quick_ratio >= target * 0.67,
        metrics.cash_ratio >= target * 0.2,
    ];
    let total = checks.len();
    let meeting = checks.iter().filter(|&&ok| ok).count();

    if meeting == total {
        format!("Strong liquidity: All {total} ratios meet or exceed targets.")
    } else if meeting as f64 >= total as f64 / 2.0 {
        format!("Moderate liquidity: {meeting}/{total} ratios meet targets.")
    } else {
        format!("Weak liquidity: Only {meeting}/{total} ratios meet targets.")
    }
}

/// Working-capital cycle summary against a benchmark day count.
pub fn working_capital_insights(metrics: &Metrics, benchmark: f64) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if metrics.dio > benchmark * 1.5 {
        parts.push("High inventory holding period");
    } else if metrics.dio < benchmark * 0.5 {
        parts.push("Efficient inventory management");
    }

    if metrics.dso > benchmark * 1.5 {
        parts.push("Slow receivables collection");
    } else if metrics.dso < benchmark * 0.5 {
        parts.push("Fast receivables collection");
    }

    if metrics.dpo < benchmark * 0.5 {
        parts.push("Quick payables settlement");
    } else if metrics.dpo > benchmark * 1.5 {
        parts.push("Extended payables period");
    }

    if metrics.ccc < benchmark {
        parts.push("Efficient cash conversion cycle");
    } else {
        parts.push("Slow cash conversion cycle");
    }

    join(parts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
