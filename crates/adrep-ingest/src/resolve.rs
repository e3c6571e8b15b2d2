use adrep_model::{METRIC_COUNT, Metric};

/// Normalize a header or search target for comparison: lowercase with all
/// whitespace removed. Punctuation is kept, so `Avg.CPC` and `Avg. CPC`
/// normalize to the same form while `Cost` and `Cost/Install` stay distinct.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the first header whose normalized form contains the normalized
/// target as a substring.
pub fn find_column(headers: &[String], target: &str) -> Option<usize> {
    let needle = normalize_header(target);
    headers
        .iter()
        .position(|header| normalize_header(header).contains(&needle))
}

/// Find the first header whose normalized form equals the normalized target.
///
/// Required for the `Cost` column: containment would match `Cost/conv.`,
/// `Cost/Install` or `Cost/In-app action` first. Ambiguous short names must
/// resolve by equality; containment is reserved for unambiguous ones.
pub fn find_column_exact(headers: &[String], target: &str) -> Option<usize> {
    let needle = normalize_header(target);
    headers
        .iter()
        .position(|header| normalize_header(header) == needle)
}

/// Resolved column indices for every canonical field, computed once per
/// header row. Missing columns stay `None` and read back as empty strings.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub campaign: Option<usize>,
    pub ad_group: Option<usize>,
    pub app_asset: Option<usize>,
    pub day: Option<usize>,
    pub metrics: [Option<usize>; METRIC_COUNT],
}

impl ColumnLayout {
    pub fn resolve(headers: &[String]) -> Self {
        let mut metrics = [None; METRIC_COUNT];
        for metric in Metric::ALL {
            let target = metric.header_target();
            metrics[metric.index()] = if metric.requires_exact_header() {
                find_column_exact(headers, target)
            } else {
                find_column(headers, target)
            };
        }
        Self {
            campaign: find_column(headers, "Campaign"),
            ad_group: find_column(headers, "Ad group"),
            app_asset: find_column(headers, "App asset"),
            day: find_column(headers, "Day"),
            metrics,
        }
    }

    /// Read a resolved column out of a row; unresolved columns are empty.
    pub fn value<'a>(&self, row: &'a [String], column: Option<usize>) -> &'a str {
        column
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn metric_value<'a>(&self, row: &'a [String], metric: Metric) -> &'a str {
        self.value(row, self.metrics[metric.index()])
    }
}
