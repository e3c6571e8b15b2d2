//! CLI argument definitions for the asset report viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use adrep_model::Metric;

#[derive(Parser)]
#[command(
    name = "adrep",
    version,
    about = "Campaign asset report viewer - filterable per-asset daily metrics",
    long_about = "Ingest an advertising-campaign performance CSV export and render\n\
                  per-asset, per-day metric tables with day-over-day colouring.\n\
                  Supports campaign/ad-group/asset filters and drill-down series."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the filtered per-asset report for an export file.
    Report(ReportArgs),

    /// Print the day-ordered values of one metric for one asset.
    Series(SeriesArgs),

    /// List the supported metric columns and their comparison polarity.
    Metrics,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the CSV export file.
    #[arg(value_name = "EXPORT_FILE")]
    pub input: PathBuf,

    /// Only show records of this campaign.
    #[arg(long = "campaign", value_name = "NAME")]
    pub campaign: Option<String>,

    /// Only show records of this ad group.
    #[arg(long = "ad-group", value_name = "NAME")]
    pub ad_group: Option<String>,

    /// Only show assets whose name contains this text (case-insensitive).
    #[arg(long = "asset", value_name = "TEXT")]
    pub asset: Option<String>,

    /// Hide assets with fewer than 1000 impressions on their latest day.
    #[arg(long = "min-impressions")]
    pub min_impressions: bool,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct SeriesArgs {
    /// Path to the CSV export file.
    #[arg(value_name = "EXPORT_FILE")]
    pub input: PathBuf,

    /// Asset name to drill into (exact match).
    #[arg(long = "asset", value_name = "NAME")]
    pub asset: String,

    /// Metric to chart.
    #[arg(long = "metric", value_enum)]
    pub metric: MetricArg,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI metric choices, mapped onto [`Metric`].
#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Impressions,
    Ctr,
    AvgCpc,
    CostPerConv,
    CostPerInstall,
    CostPerInAppAction,
    Installs,
    ConvValuePerCost,
    Cost,
}

impl MetricArg {
    pub fn to_metric(self) -> Metric {
        match self {
            MetricArg::Impressions => Metric::Impressions,
            MetricArg::Ctr => Metric::Ctr,
            MetricArg::AvgCpc => Metric::AvgCpc,
            MetricArg::CostPerConv => Metric::CostPerConv,
            MetricArg::CostPerInstall => Metric::CostPerInstall,
            MetricArg::CostPerInAppAction => Metric::CostPerInAppAction,
            MetricArg::Installs => Metric::Installs,
            MetricArg::ConvValuePerCost => Metric::ConvValuePerCost,
            MetricArg::Cost => Metric::Cost,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
