use napi::Result as NapiResult;
use napi_derive::napi;

use finsight_core::metrics::DEFAULT_COGS_PERCENTAGE;
use finsight_core::report::AnalysisParams;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_data(json: &str) -> NapiResult<finsight_core::FinancialData> {
    finsight_core::parse_financial_data(json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_metrics(data_json: String, cogs_percentage: Option<f64>) -> NapiResult<String> {
    let data = parse_data(&data_json)?;
    let metrics = finsight_core::metrics::calculate_metrics(
        &data,
        cogs_percentage.unwrap_or(DEFAULT_COGS_PERCENTAGE),
    );
    serde_json::to_string(&metrics).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Risk & alerts
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_risk_score(metrics_json: String) -> NapiResult<String> {
    let metrics: finsight_core::Metrics =
        serde_json::from_str(&metrics_json).map_err(to_napi_error)?;
    let risk = finsight_core::risk::calculate_risk_score(&metrics);
    serde_json::to_string(&risk).map_err(to_napi_error)
}

#[napi]
pub fn generate_alerts(data_json: String, cogs_percentage: Option<f64>) -> NapiResult<String> {
    let data = parse_data(&data_json)?;
    let metrics = finsight_core::metrics::calculate_metrics(
        &data,
        cogs_percentage.unwrap_or(DEFAULT_COGS_PERCENTAGE),
    );
    let alerts = finsight_core::alerts::generate_alerts(&data, &metrics);
    serde_json::to_string(&alerts).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_statement(data_json: String, params_json: Option<String>) -> NapiResult<String> {
    let data = parse_data(&data_json)?;
    let params: AnalysisParams = match params_json {
        Some(p) => serde_json::from_str(&p).map_err(to_napi_error)?,
        None => AnalysisParams::default(),
    };
    let output = finsight_core::report::analyze(&data, &params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_inr(amount: f64) -> String {
    finsight_core::format::format_inr(amount)
}
