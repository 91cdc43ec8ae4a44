use clap::Args;
use serde_json::Value;

use finsight_core::alerts::generate_alerts;
use finsight_core::insights;
use finsight_core::metrics::{calculate_metrics, DEFAULT_COGS_PERCENTAGE};
use finsight_core::report::{analyze, AnalysisParams};
use finsight_core::risk::calculate_risk_score;
use finsight_core::scorecard::{evaluate_scorecard, DEFAULT_THRESHOLD_MULTIPLIER};

use crate::input;

/// Common data source flags
#[derive(Args)]
pub struct DataArgs {
    /// Path to a FinancialData JSON file (or pipe JSON on stdin)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Assumed COGS as a percentage of revenue
    #[arg(long, default_value_t = DEFAULT_COGS_PERCENTAGE)]
    pub cogs_percentage: f64,
}

#[derive(Args)]
pub struct RiskArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Assumed COGS as a percentage of revenue
    #[arg(long, default_value_t = DEFAULT_COGS_PERCENTAGE)]
    pub cogs_percentage: f64,
}

#[derive(Args)]
pub struct AlertsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Assumed COGS as a percentage of revenue
    #[arg(long, default_value_t = DEFAULT_COGS_PERCENTAGE)]
    pub cogs_percentage: f64,
}

#[derive(Args)]
pub struct ScorecardArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Assumed COGS as a percentage of revenue
    #[arg(long, default_value_t = DEFAULT_COGS_PERCENTAGE)]
    pub cogs_percentage: f64,

    /// Scales every scorecard threshold pair
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_MULTIPLIER)]
    pub threshold_multiplier: f64,
}

#[derive(Args)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub params: ParamsArgs,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub params: ParamsArgs,
}

/// Full tunable parameter set, shared by insights and report
#[derive(Args)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Assumed COGS as a percentage of revenue
    #[arg(long, default_value_t = DEFAULT_COGS_PERCENTAGE)]
    pub cogs_percentage: f64,

    /// Scales every scorecard threshold pair
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_MULTIPLIER)]
    pub threshold_multiplier: f64,

    /// Current-ratio target for the liquidity summary
    #[arg(long, default_value_t = insights::DEFAULT_LIQUIDITY_TARGET)]
    pub liquidity_target: f64,

    /// Working-capital cycle benchmark in days
    #[arg(long, default_value_t = insights::DEFAULT_WC_BENCHMARK)]
    pub working_capital_benchmark: f64,
}

impl From<&ParamsArgs> for AnalysisParams {
    fn from(args: &ParamsArgs) -> Self {
        AnalysisParams {
            cogs_percentage: args.cogs_percentage,
            threshold_multiplier: args.threshold_multiplier,
            liquidity_target: args.liquidity_target,
            working_capital_benchmark: args.working_capital_benchmark,
        }
    }
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.data.input)?;
    let metrics = calculate_metrics(&data, args.cogs_percentage);
    Ok(serde_json::to_value(metrics)?)
}

pub fn run_risk(args: RiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.data.input)?;
    let metrics = calculate_metrics(&data, args.cogs_percentage);
    let risk = calculate_risk_score(&metrics);
    Ok(serde_json::to_value(risk)?)
}

pub fn run_alerts(args: AlertsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.data.input)?;
    let metrics = calculate_metrics(&data, args.cogs_percentage);
    let alerts = generate_alerts(&data, &metrics);
    Ok(serde_json::to_value(alerts)?)
}

pub fn run_scorecard(args: ScorecardArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.data.input)?;
    let metrics = calculate_metrics(&data, args.cogs_percentage);
    let summary = evaluate_scorecard(&metrics, args.threshold_multiplier);
    Ok(serde_json::to_value(summary)?)
}

pub fn run_insights(args: InsightsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.params.data.input)?;
    let params = AnalysisParams::from(&args.params);
    let output = analyze(&data, &params)?;
    Ok(serde_json::to_value(output.result.insights)?)
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_financial_data(&args.params.data.input)?;
    let params = AnalysisParams::from(&args.params);
    let output = analyze(&data, &params)?;
    Ok(serde_json::to_value(output)?)
}
