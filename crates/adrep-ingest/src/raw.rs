use adrep_model::{ReportError, Result};
use csv::ReaderBuilder;

/// The raw export table: one header row plus untyped string rows.
///
/// Rows are padded or truncated to the header width, so indexing by a
/// resolved column index is always in bounds.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Drop preamble banner/metadata lines above the real header.
///
/// Export files often carry report titles and date ranges before the data.
/// The true header is the first line whose lowercase form starts with
/// `"campaign,"`; everything before it is discarded. When no such line
/// exists the text is returned unchanged.
pub fn strip_preamble(text: &str) -> &str {
    let mut offset = 0usize;
    for line in text.split_inclusive('\n') {
        let lower = line.trim_start_matches('\u{feff}').to_lowercase();
        if lower.starts_with("campaign,") {
            return &text[offset..];
        }
        offset += line.len();
    }
    text
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse post-preamble CSV text into a [`RawTable`].
///
/// The first line is the header row. Fully empty rows are skipped. Quoting
/// and delimiter handling are delegated to the `csv` crate.
pub fn read_raw_table(text: &str) -> Result<RawTable> {
    let cleaned = strip_preamble(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(cleaned.as_bytes());

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ReportError::Csv(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = row;
            continue;
        }
        let mut padded = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = row.get(idx).map(String::as_str).unwrap_or("");
            padded.push(value.to_string());
        }
        rows.push(padded);
    }
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_is_stripped_up_to_the_header_line() {
        let text = "Asset report\nAll time\nCampaign,Day\nC1,2024-01-01\n";
        assert_eq!(strip_preamble(text), "Campaign,Day\nC1,2024-01-01\n");
    }

    #[test]
    fn preamble_strip_is_a_noop_without_a_header_line() {
        let text = "some,other,data\n1,2,3\n";
        assert_eq!(strip_preamble(text), text);
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let text = "banner\nCAMPAIGN,Day\n";
        assert_eq!(strip_preamble(text), "CAMPAIGN,Day\n");
    }
}
