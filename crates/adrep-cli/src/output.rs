//! Presentation-ready view of a filtered report.
//!
//! This is the contract handed to renderers: ordered records, the per-asset
//! day axis, per-cell comparative signals, and the recomputed dropdown
//! option lists.

use adrep_core::{AssetIndex, ReportSession, day_signals};
use adrep_model::{AssetRecord, Metric, Signal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Campaign of the first visible record, shown as the report heading.
    pub campaign_heading: Option<String>,
    /// Distinct campaigns across the full dataset.
    pub campaign_options: Vec<String>,
    /// Distinct ad groups of the campaign-filtered dataset.
    pub ad_group_options: Vec<String>,
    /// Distinct asset names of the fully-filtered dataset.
    pub asset_options: Vec<String>,
    /// Per-asset tables, ranked by latest-day impressions descending.
    pub assets: Vec<AssetReport>,
    /// Surviving records in input order.
    pub records: Vec<AssetRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReport {
    pub asset: String,
    pub link: String,
    pub latest_impressions: i64,
    /// Sorted-ascending day axis for this asset.
    pub days: Vec<String>,
    /// One row per metric, in presentation order.
    pub metrics: Vec<MetricRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: String,
    pub cells: Vec<MetricCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCell {
    pub day: String,
    /// Raw display string; empty when the asset has no record for the day.
    pub display: String,
    pub signal: Option<Signal>,
}

/// Build the presentation view from the session's current filtered state.
pub fn build_report_output(session: &ReportSession) -> ReportOutput {
    let view = session.view();
    let assets = {
        let index = AssetIndex::build(view.records.iter());
        index
            .ranked()
            .into_iter()
            .map(|series| {
                let days: Vec<String> = series.days().map(str::to_string).collect();
                let metrics = Metric::ALL
                    .iter()
                    .map(|&metric| {
                        let signals = day_signals(series, metric);
                        let cells = days
                            .iter()
                            .zip(signals)
                            .map(|(day, signal)| MetricCell {
                                day: day.clone(),
                                display: series
                                    .record_for(day)
                                    .map(|record| record.metric(metric).display.clone())
                                    .unwrap_or_default(),
                                signal,
                            })
                            .collect();
                        MetricRow {
                            metric: metric.as_str().to_string(),
                            cells,
                        }
                    })
                    .collect();
                AssetReport {
                    asset: series.asset_name().to_string(),
                    link: series.link().to_string(),
                    latest_impressions: series.latest_impressions(),
                    days,
                    metrics,
                }
            })
            .collect()
    };
    ReportOutput {
        campaign_heading: view.records.first().map(|record| record.campaign.clone()),
        campaign_options: session.campaign_options(),
        ad_group_options: view.ad_group_options,
        asset_options: view.asset_options,
        assets,
        records: view.records,
    }
}
