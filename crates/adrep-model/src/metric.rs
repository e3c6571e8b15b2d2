use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine report metrics, in the row order used by the asset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    Impressions,
    Ctr,
    AvgCpc,
    CostPerConv,
    CostPerInstall,
    CostPerInAppAction,
    Installs,
    ConvValuePerCost,
    Cost,
}

/// Number of metric columns carried by every record.
pub const METRIC_COUNT: usize = 9;

impl Metric {
    /// All metrics in presentation order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Impressions,
        Metric::Ctr,
        Metric::AvgCpc,
        Metric::CostPerConv,
        Metric::CostPerInstall,
        Metric::CostPerInAppAction,
        Metric::Installs,
        Metric::ConvValuePerCost,
        Metric::Cost,
    ];

    /// Canonical display label, matching the export's column naming.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Impressions => "Impr.",
            Metric::Ctr => "CTR",
            Metric::AvgCpc => "Avg.CPC",
            Metric::CostPerConv => "Cost/conv.",
            Metric::CostPerInstall => "Cost/Install",
            Metric::CostPerInAppAction => "Cost/In-app action",
            Metric::Installs => "Installs",
            Metric::ConvValuePerCost => "Conv.value/cost",
            Metric::Cost => "Cost",
        }
    }

    /// Loose header-search target handed to the column resolver.
    ///
    /// These are deliberately shorter than the display labels so that
    /// whitespace and punctuation variants in export headers still match
    /// (e.g. a header `"Avg. CPC"` resolves for `Avg.CPC`).
    pub fn header_target(&self) -> &'static str {
        match self {
            Metric::Impressions => "Impr",
            Metric::Ctr => "CTR",
            Metric::AvgCpc => "Avg.CPC",
            Metric::CostPerConv => "Cost / conv",
            Metric::CostPerInstall => "Cost/Install",
            Metric::CostPerInAppAction => "Cost/In-app",
            Metric::Installs => "Installs",
            Metric::ConvValuePerCost => "Conv.value",
            Metric::Cost => "Cost",
        }
    }

    /// Whether the resolver must require header equality instead of
    /// containment. `Cost` is a substring of `Cost/conv.`, `Cost/Install`
    /// and `Cost/In-app action`, so containment would misassign it.
    pub fn requires_exact_header(&self) -> bool {
        matches!(self, Metric::Cost)
    }

    /// Day-over-day comparison polarity. Only CTR, Avg.CPC and Cost/Install
    /// carry a polarity; the remaining metrics produce no signal.
    pub fn polarity(&self) -> Option<Polarity> {
        match self {
            Metric::Ctr => Some(Polarity::HigherIsBetter),
            Metric::AvgCpc | Metric::CostPerInstall => Some(Polarity::LowerIsBetter),
            _ => None,
        }
    }

    /// Position of this metric in [`Metric::ALL`] and in record storage.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    /// Parse a metric from its display label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Metric::ALL
            .iter()
            .find(|metric| metric.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("Unknown metric: {}", s))
    }
}

/// Direction in which a metric change counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// A higher value on the later day is an improvement (CTR).
    HigherIsBetter,
    /// A lower or equal value on the later day is an improvement (costs).
    LowerIsBetter,
}

/// Day-over-day comparative classification of a metric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Improved,
    Worsened,
    Unchanged,
}

/// A metric observation: the raw display string from the export plus the
/// numeric value parsed once at normalization time.
///
/// The display string keeps its original formatting (currency symbols,
/// thousands separators, percent signs). `numeric` is `None` when the text
/// does not parse after stripping that formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub display: String,
    pub numeric: Option<f64>,
}

impl MetricValue {
    /// Build a value from raw display text, parsing the numeric form once.
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let numeric = parse_display_number(&display);
        Self { display, numeric }
    }

    /// An empty cell.
    pub fn empty() -> Self {
        Self {
            display: String::new(),
            numeric: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Parse a formatted metric string as a float.
///
/// Strips the currency/percent/thousands-separator characters seen in the
/// exports (`₹`, `,`, `%`) before parsing. Returns `None` for anything that
/// still fails to parse.
pub fn parse_display_number(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '₹' | ',' | '%'))
        .collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
