mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analysis::{
    AlertsArgs, InsightsArgs, MetricsArgs, ReportArgs, RiskArgs, ScorecardArgs,
};

/// Financial statement analysis from structured JSON data
#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Financial statement ratio analysis and risk scoring",
    long_about = "Derives standardized ratios, a 0-100 composite risk score and \
                  prioritized alerts/insights from a company's structured financial \
                  statement data (income statement, balance sheet, shareholding)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full ratio set from a financial statement
    Metrics(MetricsArgs),
    /// Score overall financial risk (0-100, low/medium/high)
    Risk(RiskArgs),
    /// Generate prioritized alerts
    Alerts(AlertsArgs),
    /// Classify the eight-ratio health scorecard
    Scorecard(ScorecardArgs),
    /// Generate the per-section insight summaries
    Insights(InsightsArgs),
    /// Run the full analysis pipeline
    Report(ReportArgs),
    /// Print a complete sample FinancialData document
    Sample,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Metrics(args) => commands::analysis::run_metrics(args),
        Commands::Risk(args) => commands::analysis::run_risk(args),
        Commands::Alerts(args) => commands::analysis::run_alerts(args),
        Commands::Scorecard(args) => commands::analysis::run_scorecard(args),
        Commands::Insights(args) => commands::analysis::run_insights(args),
        Commands::Report(args) => commands::analysis::run_report(args),
        Commands::Sample => {
            println!("{}", commands::sample::sample_json());
            return;
        }
        Commands::Version => {
            println!("finsight {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
