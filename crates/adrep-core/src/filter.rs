use std::collections::BTreeSet;

use adrep_model::{AssetRecord, FilterState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::AssetIndex;

/// Latest-day impression threshold for the minimum-impressions gate.
pub const MIN_RECENT_IMPRESSIONS: i64 = 1000;

/// Output of one filter pass: the surviving records plus the dependent
/// dropdown option lists recomputed for the presentation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    /// Surviving records, input order preserved.
    pub records: Vec<AssetRecord>,
    /// Ad-group options, recomputed from the campaign-filtered set.
    pub ad_group_options: Vec<String>,
    /// Asset-name options, recomputed from the fully-filtered set.
    pub asset_options: Vec<String>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct campaigns across the full dataset, in encounter order.
pub fn campaign_options(records: &[AssetRecord]) -> Vec<String> {
    distinct(records.iter().map(|record| record.campaign.as_str()))
}

/// Apply the filter state to a record set.
///
/// Predicates compose by logical AND in a fixed order: campaign equality,
/// then ad-group equality, then the asset-name substring, then the
/// minimum-recent-impressions gate. Ad-group options are captured after the
/// campaign step because ad-group choices are campaign-scoped. The gate
/// keeps every record of an asset whose latest-day impressions reach the
/// threshold and removes failing assets entirely.
///
/// This is a pure function of (records, state); applying the same state
/// twice yields an identical view.
pub fn apply_filters(records: &[AssetRecord], state: &FilterState) -> FilteredView {
    let mut current: Vec<&AssetRecord> = records.iter().collect();

    if let Some(campaign) = state.campaign.as_deref() {
        current.retain(|record| record.campaign == campaign);
    }
    let ad_group_options = distinct(current.iter().map(|record| record.ad_group.as_str()));

    if let Some(ad_group) = state.ad_group.as_deref() {
        current.retain(|record| record.ad_group == ad_group);
    }

    if let Some(query) = state.asset_query.as_deref() {
        let needle = query.to_lowercase();
        current.retain(|record| record.asset_name.to_lowercase().contains(&needle));
    }

    if state.min_impressions {
        let index = AssetIndex::build(current.iter().copied());
        let keep: BTreeSet<&str> = index
            .series()
            .iter()
            .filter(|series| series.latest_impressions() >= MIN_RECENT_IMPRESSIONS)
            .map(|series| series.asset_name())
            .collect();
        current.retain(|record| keep.contains(record.asset_name.as_str()));
    }

    let asset_options = distinct(current.iter().map(|record| record.asset_name.as_str()));
    debug!(
        input = records.len(),
        output = current.len(),
        ad_groups = ad_group_options.len(),
        assets = asset_options.len(),
        "filters applied"
    );

    FilteredView {
        records: current.into_iter().cloned().collect(),
        ad_group_options,
        asset_options,
    }
}

/// Distinct non-empty values in encounter order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for value in values {
        if value.is_empty() {
            continue;
        }
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}
