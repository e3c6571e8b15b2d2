//! Comparative signal tests.

use adrep_core::{AssetIndex, classify, day_signals};
use adrep_model::{AssetRecord, METRIC_COUNT, Metric, MetricValue, Signal};

fn value(raw: &str) -> MetricValue {
    MetricValue::new(raw)
}

fn record_with(asset: &str, day: &str, metric: Metric, raw: &str) -> AssetRecord {
    let mut metrics: [MetricValue; METRIC_COUNT] = std::array::from_fn(|_| MetricValue::empty());
    metrics[metric.index()] = MetricValue::new(raw);
    AssetRecord {
        campaign: "C1".to_string(),
        ad_group: "G1".to_string(),
        asset_name: asset.to_string(),
        asset_link: String::new(),
        day: day.to_string(),
        metrics,
    }
}

#[test]
fn ctr_rise_improves() {
    let signal = classify(Metric::Ctr, &value("2.0%"), &value("3.0%"));
    assert_eq!(signal, Some(Signal::Improved));
}

#[test]
fn ctr_fall_worsens_and_equal_is_unchanged() {
    assert_eq!(
        classify(Metric::Ctr, &value("3.0%"), &value("2.0%")),
        Some(Signal::Worsened)
    );
    assert_eq!(
        classify(Metric::Ctr, &value("2.0%"), &value("2.0%")),
        Some(Signal::Unchanged)
    );
}

#[test]
fn cpc_rise_worsens() {
    let signal = classify(Metric::AvgCpc, &value("₹10"), &value("₹12"));
    assert_eq!(signal, Some(Signal::Worsened));
}

#[test]
fn cpc_equal_counts_as_improved() {
    let signal = classify(Metric::AvgCpc, &value("₹10"), &value("₹10"));
    assert_eq!(signal, Some(Signal::Improved));
}

#[test]
fn cost_per_install_follows_cost_polarity() {
    assert_eq!(
        classify(Metric::CostPerInstall, &value("₹45"), &value("₹40")),
        Some(Signal::Improved)
    );
}

#[test]
fn unclassified_metrics_have_no_signal() {
    assert_eq!(classify(Metric::Cost, &value("₹10"), &value("₹12")), None);
    assert_eq!(classify(Metric::Installs, &value("5"), &value("9")), None);
}

#[test]
fn unparsable_values_have_no_signal() {
    assert_eq!(classify(Metric::Ctr, &value("--"), &value("3.0%")), None);
    assert_eq!(classify(Metric::Ctr, &value("2.0%"), &value("")), None);
}

#[test]
fn day_signals_align_with_sorted_days() {
    let records = vec![
        record_with("a", "2024-01-02", Metric::Ctr, "3.0%"),
        record_with("a", "2024-01-01", Metric::Ctr, "2.0%"),
        record_with("a", "2024-01-03", Metric::Ctr, "1.0%"),
    ];
    let index = AssetIndex::build(records.iter());
    let series = index.get("a").expect("a");
    let signals = day_signals(series, Metric::Ctr);
    // Days sort to 01, 02, 03: first has no prior day, then 2.0 -> 3.0
    // improves, then 3.0 -> 1.0 worsens.
    assert_eq!(
        signals,
        vec![None, Some(Signal::Improved), Some(Signal::Worsened)]
    );
}

#[test]
fn day_signals_skip_unparsable_neighbours() {
    let records = vec![
        record_with("a", "2024-01-01", Metric::AvgCpc, "junk"),
        record_with("a", "2024-01-02", Metric::AvgCpc, "₹10"),
        record_with("a", "2024-01-03", Metric::AvgCpc, "₹9"),
    ];
    let index = AssetIndex::build(records.iter());
    let series = index.get("a").expect("a");
    let signals = day_signals(series, Metric::AvgCpc);
    assert_eq!(signals, vec![None, None, Some(Signal::Improved)]);
}
