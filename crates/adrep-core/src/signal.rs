use adrep_model::{Metric, MetricValue, Polarity, Signal};

use crate::index::AssetSeries;

/// Classify a day-over-day metric change.
///
/// Returns `None` for metrics without a comparison polarity and whenever
/// either value lacks a parsed numeric form. For cost metrics an equal
/// value counts as improved; only CTR distinguishes `Unchanged`.
pub fn classify(metric: Metric, previous: &MetricValue, current: &MetricValue) -> Option<Signal> {
    let polarity = metric.polarity()?;
    let prev = previous.numeric?;
    let cur = current.numeric?;
    let signal = match polarity {
        Polarity::HigherIsBetter => {
            if cur > prev {
                Signal::Improved
            } else if cur < prev {
                Signal::Worsened
            } else {
                Signal::Unchanged
            }
        }
        Polarity::LowerIsBetter => {
            if cur > prev {
                Signal::Worsened
            } else {
                Signal::Improved
            }
        }
    };
    Some(signal)
}

/// Per-day signals for one asset and metric, aligned with the series' day
/// order. The first day never has a signal.
pub fn day_signals(series: &AssetSeries<'_>, metric: Metric) -> Vec<Option<Signal>> {
    let mut signals = Vec::with_capacity(series.day_count());
    let mut previous: Option<&MetricValue> = None;
    for day in series.days() {
        let Some(record) = series.record_for(day) else {
            signals.push(None);
            continue;
        };
        let current = record.metric(metric);
        signals.push(match previous {
            Some(prev) => classify(metric, prev, current),
            None => None,
        });
        previous = Some(current);
    }
    signals
}
