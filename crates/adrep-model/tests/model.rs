//! Tests for adrep-model types.

use adrep_model::{AssetRecord, Metric, MetricValue, Polarity};

fn sample_record() -> AssetRecord {
    AssetRecord {
        campaign: "App Campaign IN".to_string(),
        ad_group: "Creatives 1".to_string(),
        asset_name: "hero_video.mp4".to_string(),
        asset_link: "https://ads.example/asset/42".to_string(),
        day: "2024-03-01".to_string(),
        metrics: [
            MetricValue::new("1,500"),
            MetricValue::new("2.0%"),
            MetricValue::new("₹12.50"),
            MetricValue::new("₹300"),
            MetricValue::new("₹45"),
            MetricValue::new("₹90"),
            MetricValue::new("33"),
            MetricValue::new("1.8"),
            MetricValue::new("₹4,125"),
        ],
    }
}

#[test]
fn record_serializes() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: AssetRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn record_numeric_values_are_precomputed() {
    let record = sample_record();
    assert_eq!(record.metric(Metric::Impressions).numeric, Some(1500.0));
    assert_eq!(record.metric(Metric::Ctr).numeric, Some(2.0));
    assert_eq!(record.metric(Metric::AvgCpc).numeric, Some(12.5));
    assert_eq!(record.metric(Metric::Cost).numeric, Some(4125.0));
}

#[test]
fn exact_header_requirement_is_limited_to_cost() {
    for metric in Metric::ALL {
        assert_eq!(metric.requires_exact_header(), metric == Metric::Cost);
    }
}

#[test]
fn header_targets_stay_loose() {
    assert_eq!(Metric::Impressions.header_target(), "Impr");
    assert_eq!(Metric::CostPerConv.header_target(), "Cost / conv");
    assert_eq!(Metric::CostPerInAppAction.header_target(), "Cost/In-app");
}

#[test]
fn polarity_is_metric_specific() {
    assert_eq!(Metric::Ctr.polarity(), Some(Polarity::HigherIsBetter));
    assert_eq!(Metric::CostPerInstall.polarity(), Some(Polarity::LowerIsBetter));
    assert_eq!(Metric::Installs.polarity(), None);
}
