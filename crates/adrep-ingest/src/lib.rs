pub mod normalize;
pub mod raw;
pub mod resolve;

pub use normalize::{load_records, load_records_from_path, normalize};
pub use raw::{RawTable, read_raw_table, strip_preamble};
pub use resolve::{ColumnLayout, find_column, find_column_exact, normalize_header};
