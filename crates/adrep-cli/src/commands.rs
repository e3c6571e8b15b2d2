use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use adrep_core::ReportSession;
use adrep_model::FilterUpdate;

use adrep_cli::output::build_report_output;

use crate::cli::{OutputArg, ReportArgs, SeriesArgs};
use crate::render::{print_metrics, print_report, print_series};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut session = load_session(&args.input)?;
    if session.is_empty() {
        println!("No valid data found");
        return Ok(());
    }

    session.set_filter(FilterUpdate {
        campaign: args.campaign.clone(),
        ad_group: args.ad_group.clone(),
        asset_query: args.asset.clone(),
        min_impressions: args.min_impressions.then_some(true),
    });

    let output = build_report_output(&session);
    info!(
        records = output.records.len(),
        assets = output.assets.len(),
        duration_ms = start.elapsed().as_millis(),
        "report ready"
    );
    match args.output {
        OutputArg::Table => print_report(&output),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&output).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_series(args: &SeriesArgs) -> Result<()> {
    let span = info_span!("series", input = %args.input.display(), asset = %args.asset);
    let _guard = span.enter();

    let session = load_session(&args.input)?;
    if session.is_empty() {
        println!("No valid data found");
        return Ok(());
    }

    let metric = args.metric.to_metric();
    let points = session.series(&args.asset, metric);
    if points.is_empty() {
        println!("No data for asset \"{}\"", args.asset);
        return Ok(());
    }
    match args.output {
        OutputArg::Table => print_series(&args.asset, metric, &points),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&points).context("serialize series")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_metrics() -> Result<()> {
    print_metrics();
    Ok(())
}

fn load_session(input: &std::path::Path) -> Result<ReportSession> {
    let text =
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let mut session = ReportSession::new();
    session
        .load_dataset(&text)
        .with_context(|| format!("parse {}", input.display()))?;
    Ok(session)
}
