use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{FinsightError, FinsightResult};

/// All monetary values, in rupees. Plain f64: degenerate divisions must
/// surface as IEEE Infinity/NaN rather than errors.
pub type Money = f64;

// ---------------------------------------------------------------------------
// Financial statement input
// ---------------------------------------------------------------------------

/// One company's structured financial statement data.
///
/// Assumed structurally valid on entry; the computation functions perform no
/// defensive checks beyond the arithmetic itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialData {
    pub company_name: String,
    pub income_statement: IncomeStatement,
    pub assets: Assets,
    pub liabilities: Liabilities,
    /// Holder name -> share count. Open mapping; display-only.
    #[serde(default)]
    pub shareholding: BTreeMap<String, Money>,
    /// Allottee name -> pending share count. Display-only.
    #[serde(default)]
    pub pending_allotment: BTreeMap<String, Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forex_exposure_usd: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_to_inr_rate: Option<f64>,
    // Optional valuation/market data, display-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diluted_eps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<f64>,
}

/// Income statement. Five required lines; the optional detail fields are
/// display/insight material only and never feed the ratio formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue: Money,
    pub other_income: Money,
    pub total_expenses: Money,
    pub pbt: Money,
    pub pat: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_income: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_goods_sold: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_profit: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expenses: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_general_admin: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_development: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation_amortization: Option<Money>,
    /// EBIT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_income: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_expense: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_income: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_non_operating: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_income_from_continuing_ops: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_eps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_per_share: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assets {
    /// Named non-current sub-accounts (property_equipment, intangible_assets,
    /// ...). Order-irrelevant; only the sum matters.
    pub fixed_assets: BTreeMap<String, Money>,
    pub current_assets: CurrentAssets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAssets {
    pub inventories: Money,
    pub trade_receivables: Money,
    pub cash: Money,
    pub other_current: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Liabilities {
    /// Named equity sub-accounts (share_capital, reserves_surplus, ...).
    pub equity: BTreeMap<String, Money>,
    pub non_current_liabilities: NonCurrentLiabilities,
    pub current_liabilities: CurrentLiabilities,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonCurrentLiabilities {
    pub long_term_borrowings: Money,
    pub deferred_tax: Money,
    pub long_term_provisions: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentLiabilities {
    pub trade_payables: Money,
    pub other_current_liabilities: Money,
    pub short_term_provisions: Money,
    pub current_liability: Money,
}

impl FinancialData {
    /// Share of total reported holdings attributed to the largest holder,
    /// as a percentage. Display-only; not part of the ratio set.
    pub fn promoter_holding_pct(&self) -> Option<f64> {
        let total: Money = self.shareholding.values().sum();
        if self.shareholding.is_empty() || total == 0.0 {
            return None;
        }
        let largest = self
            .shareholding
            .values()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        Some(largest / total * 100.0)
    }
}

/// Parse a JSON document into a `FinancialData` record and check the
/// structural invariants the computation layer assumes.
pub fn parse_financial_data(json: &str) -> FinsightResult<FinancialData> {
    let data: FinancialData = serde_json::from_str(json)?;
    validate(&data)?;
    Ok(data)
}

/// Structural validation. Field presence and types are already enforced by
/// deserialization; this covers the remaining invariants.
pub fn validate(data: &FinancialData) -> FinsightResult<()> {
    if data.company_name.trim().is_empty() {
        return Err(FinsightError::InvalidInput {
            field: "company_name".into(),
            reason: "Company name must be non-empty.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// The fixed record of derived ratios. Recomputed in full from
/// `FinancialData` plus the COGS assumption on every input change; carries no
/// identity or cached state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    // Size
    pub total_assets: Money,
    pub total_equity: Money,
    pub total_liabilities: Money,
    pub total_current_assets: Money,
    pub total_current_liab: Money,
    pub working_capital: Money,
    // Profitability (percentages, already x100)
    pub net_margin: f64,
    pub roe: f64,
    pub roa: f64,
    // Liquidity (dimensionless)
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub cash_ratio: f64,
    // Leverage
    pub debt_to_equity: f64,
    pub debt_to_assets: f64,
    // Efficiency
    pub asset_turnover: f64,
    // Working-capital cycle (days)
    pub dio: f64,
    pub dso: f64,
    pub dpo: f64,
    pub ccc: f64,
}

// ---------------------------------------------------------------------------
// Computation envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
