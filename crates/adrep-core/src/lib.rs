pub mod filter;
pub mod index;
pub mod session;
pub mod signal;

pub use filter::{FilteredView, MIN_RECENT_IMPRESSIONS, apply_filters, campaign_options};
pub use index::{AssetIndex, AssetSeries, parse_impressions};
pub use session::{DatasetSummary, ReportSession, SeriesPoint};
pub use signal::{classify, day_signals};
