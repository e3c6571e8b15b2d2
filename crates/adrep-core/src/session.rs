use adrep_model::{AssetRecord, FilterState, FilterUpdate, Metric, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::filter::{FilteredView, apply_filters, campaign_options};
use crate::index::AssetIndex;

/// Counts reported after a dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub assets: usize,
    pub campaigns: usize,
}

/// One drill-down point: the day label and the parsed metric value,
/// `None` where the cell does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day: String,
    pub value: Option<f64>,
}

/// Session-scoped context owning the canonical dataset and the current
/// filter state.
///
/// The dataset is immutable between loads; a new load replaces it wholesale
/// (last-write-wins) and resets the filters. All queries recompute their
/// result from scratch, so the session stays consistent without any
/// incremental bookkeeping.
#[derive(Debug, Default)]
pub struct ReportSession {
    records: Vec<AssetRecord>,
    filter: FilterState,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and normalize export text, replacing any previous dataset.
    ///
    /// A dataset with zero valid records is not an error: the session is
    /// simply left empty and dependent views stay empty.
    pub fn load_dataset(&mut self, text: &str) -> Result<DatasetSummary> {
        let records = adrep_ingest::load_records(text)?;
        self.filter = FilterState::default();
        self.records = records;
        let summary = DatasetSummary {
            records: self.records.len(),
            assets: AssetIndex::build(self.records.iter()).len(),
            campaigns: campaign_options(&self.records).len(),
        };
        info!(
            records = summary.records,
            assets = summary.assets,
            campaigns = summary.campaigns,
            "dataset loaded"
        );
        Ok(summary)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The canonical dataset, untouched by filters.
    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Apply a partial filter update.
    ///
    /// Empty strings clear the corresponding filter. Changing the campaign
    /// selection resets the ad-group and asset filters before the rest of
    /// the update is applied (cascading reset).
    pub fn set_filter(&mut self, update: FilterUpdate) {
        if let Some(campaign) = update.campaign {
            let campaign = non_empty(campaign);
            if campaign != self.filter.campaign {
                debug!("campaign changed, resetting dependent filters");
                self.filter.ad_group = None;
                self.filter.asset_query = None;
            }
            self.filter.campaign = campaign;
        }
        if let Some(ad_group) = update.ad_group {
            self.filter.ad_group = non_empty(ad_group);
        }
        if let Some(asset_query) = update.asset_query {
            self.filter.asset_query = non_empty(asset_query);
        }
        if let Some(min_impressions) = update.min_impressions {
            self.filter.min_impressions = min_impressions;
        }
    }

    /// Reset every filter, keeping the dataset.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Distinct campaigns from the full dataset.
    pub fn campaign_options(&self) -> Vec<String> {
        campaign_options(&self.records)
    }

    /// The current filtered view, recomputed in full.
    pub fn view(&self) -> FilteredView {
        apply_filters(&self.records, &self.filter)
    }

    /// Day-ordered drill-down values for one asset and metric, taken from
    /// the filtered view. Unknown assets yield an empty series.
    pub fn series(&self, asset: &str, metric: Metric) -> Vec<SeriesPoint> {
        let view = self.view();
        let index = AssetIndex::build(view.records.iter());
        let Some(series) = index.get(asset) else {
            return Vec::new();
        };
        series
            .days()
            .map(|day| SeriesPoint {
                day: day.to_string(),
                value: series
                    .record_for(day)
                    .and_then(|record| record.metric(metric).numeric),
            })
            .collect()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
