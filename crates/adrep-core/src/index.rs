use std::collections::BTreeMap;

use adrep_model::{AssetRecord, Metric};

/// All records for one asset, in first-encounter order, with an ordered
/// day lookup.
///
/// At most one record per day is expected but not enforced: the first
/// record encountered for a day wins and later duplicates are invisible to
/// day lookups.
#[derive(Debug)]
pub struct AssetSeries<'a> {
    asset_name: &'a str,
    records: Vec<&'a AssetRecord>,
    by_day: BTreeMap<&'a str, usize>,
}

impl<'a> AssetSeries<'a> {
    fn new(record: &'a AssetRecord) -> Self {
        let mut series = Self {
            asset_name: record.asset_name.as_str(),
            records: Vec::new(),
            by_day: BTreeMap::new(),
        };
        series.push(record);
        series
    }

    fn push(&mut self, record: &'a AssetRecord) {
        let idx = self.records.len();
        self.records.push(record);
        self.by_day.entry(record.day.as_str()).or_insert(idx);
    }

    pub fn asset_name(&self) -> &'a str {
        self.asset_name
    }

    /// Link of the first record, shown alongside the asset name.
    pub fn link(&self) -> &'a str {
        self.records
            .first()
            .map(|record| record.asset_link.as_str())
            .unwrap_or("")
    }

    /// Records in encounter order, duplicates included.
    pub fn records(&self) -> &[&'a AssetRecord] {
        &self.records
    }

    /// Distinct days, sorted ascending. Ordering is lexicographic on the
    /// day strings; sortable date formats are an input contract.
    pub fn days(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_day.keys().copied()
    }

    pub fn day_count(&self) -> usize {
        self.by_day.len()
    }

    /// First-encountered record for the given day.
    pub fn record_for(&self, day: &str) -> Option<&'a AssetRecord> {
        self.by_day.get(day).map(|&idx| self.records[idx])
    }

    pub fn latest_day(&self) -> Option<&'a str> {
        self.by_day.keys().next_back().copied()
    }

    /// Impression count for the chronologically last day. Comma separators
    /// are stripped and the result is parsed as an integer; non-numeric or
    /// missing values yield 0.
    pub fn latest_impressions(&self) -> i64 {
        self.latest_day()
            .and_then(|day| self.record_for(day))
            .map(|record| parse_impressions(&record.metric(Metric::Impressions).display))
            .unwrap_or(0)
    }
}

/// Records grouped by asset name, in first-encounter order.
///
/// The index is a read-only view over an immutable record snapshot; it is
/// rebuilt from scratch whenever the underlying filtered set changes.
#[derive(Debug)]
pub struct AssetIndex<'a> {
    series: Vec<AssetSeries<'a>>,
    by_name: BTreeMap<&'a str, usize>,
}

impl<'a> AssetIndex<'a> {
    pub fn build(records: impl IntoIterator<Item = &'a AssetRecord>) -> Self {
        let mut index = Self {
            series: Vec::new(),
            by_name: BTreeMap::new(),
        };
        for record in records {
            let existing = index.by_name.get(record.asset_name.as_str()).copied();
            match existing {
                Some(idx) => index.series[idx].push(record),
                None => {
                    index
                        .by_name
                        .insert(record.asset_name.as_str(), index.series.len());
                    index.series.push(AssetSeries::new(record));
                }
            }
        }
        index
    }

    /// Asset series in first-encounter order.
    pub fn series(&self) -> &[AssetSeries<'a>] {
        &self.series
    }

    pub fn get(&self, asset: &str) -> Option<&AssetSeries<'a>> {
        self.by_name.get(asset).map(|&idx| &self.series[idx])
    }

    /// Assets ordered by latest-day impressions, descending. Ties keep the
    /// grouping order (stable sort).
    pub fn ranked(&self) -> Vec<&AssetSeries<'a>> {
        let mut ranked: Vec<&AssetSeries<'a>> = self.series.iter().collect();
        ranked.sort_by_key(|series| std::cmp::Reverse(series.latest_impressions()));
        ranked
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Parse an impression count, tolerating thousands separators.
pub fn parse_impressions(raw: &str) -> i64 {
    let stripped: String = raw.chars().filter(|ch| *ch != ',').collect();
    stripped.trim().parse::<i64>().unwrap_or(0)
}
