pub mod error;
pub mod filter;
pub mod metric;
pub mod record;

pub use error::{ReportError, Result};
pub use filter::{FilterState, FilterUpdate};
pub use metric::{METRIC_COUNT, Metric, MetricValue, Polarity, Signal, parse_display_number};
pub use record::AssetRecord;
