use serde::{Deserialize, Serialize};

use crate::metric::{METRIC_COUNT, Metric, MetricValue};

/// One asset-day observation normalized from the raw export.
///
/// Records are built once per dataset load and never mutated afterwards;
/// every derived view (grouping, filtering, signals) works on an immutable
/// slice of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub campaign: String,
    pub ad_group: String,
    /// First semicolon-delimited segment of the "App asset" field, trimmed.
    pub asset_name: String,
    /// Second semicolon-delimited segment, trimmed. May be empty.
    pub asset_link: String,
    /// Date label. Days are ordered lexicographically, so the export must
    /// use a sortable (zero-padded, ISO-like) date format.
    pub day: String,
    /// Metric cells in [`Metric::ALL`] order.
    pub metrics: [MetricValue; METRIC_COUNT],
}

impl AssetRecord {
    pub fn metric(&self, metric: Metric) -> &MetricValue {
        &self.metrics[metric.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        AssetRecord {
            campaign: "C1".to_string(),
            ad_group: "G1".to_string(),
            asset_name: "Video A".to_string(),
            asset_link: "https://example.com/a".to_string(),
            day: "2024-01-01".to_string(),
            metrics: std::array::from_fn(|idx| MetricValue::new(format!("{idx}"))),
        }
    }

    #[test]
    fn metric_lookup_follows_presentation_order() {
        let record = record();
        assert_eq!(record.metric(Metric::Impressions).display, "0");
        assert_eq!(record.metric(Metric::Cost).display, "8");
    }
}
