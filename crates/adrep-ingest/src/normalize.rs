use adrep_model::{AssetRecord, Metric, MetricValue, Result};
use tracing::debug;

use crate::raw::{RawTable, read_raw_table};
use crate::resolve::ColumnLayout;

/// Convert raw rows into canonical records, preserving input order.
///
/// The compound "App asset" field is split on `;` into a trimmed asset name
/// and an optional link. Rows without an asset name or a day are dropped
/// silently; malformed rows never raise errors.
pub fn normalize(table: &RawTable) -> Vec<AssetRecord> {
    let layout = ColumnLayout::resolve(&table.headers);
    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;
    for row in &table.rows {
        match normalize_row(&layout, row) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = records.len(), "dropped rows without asset or day");
    }
    records
}

fn normalize_row(layout: &ColumnLayout, row: &[String]) -> Option<AssetRecord> {
    let raw_asset = layout.value(row, layout.app_asset);
    let mut parts = raw_asset.splitn(2, ';');
    let asset_name = parts.next().unwrap_or("").trim().to_string();
    let asset_link = parts.next().unwrap_or("").trim().to_string();
    let day = layout.value(row, layout.day).to_string();
    if asset_name.is_empty() || day.is_empty() {
        return None;
    }
    let metrics = std::array::from_fn(|idx| {
        let metric = Metric::ALL[idx];
        MetricValue::new(layout.metric_value(row, metric))
    });
    Some(AssetRecord {
        campaign: layout.value(row, layout.campaign).to_string(),
        ad_group: layout.value(row, layout.ad_group).to_string(),
        asset_name,
        asset_link,
        day,
        metrics,
    })
}

/// Read and normalize an export file from disk.
pub fn load_records_from_path(path: &std::path::Path) -> Result<Vec<AssetRecord>> {
    let text = std::fs::read_to_string(path)?;
    load_records(&text)
}

/// Full ingestion path: strip the preamble, parse the CSV, normalize rows.
pub fn load_records(text: &str) -> Result<Vec<AssetRecord>> {
    let table = read_raw_table(text)?;
    let records = normalize(&table);
    debug!(
        headers = table.headers.len(),
        rows = table.rows.len(),
        records = records.len(),
        "ingest complete"
    );
    Ok(records)
}
