use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adrep_core::SeriesPoint;
use adrep_model::{Metric, Polarity, Signal};

use adrep_cli::output::{AssetReport, MetricCell, ReportOutput};

/// Render the full report: heading, ranked summary, one table per asset.
pub fn print_report(output: &ReportOutput) {
    if let Some(heading) = &output.campaign_heading {
        println!("Campaign: {heading}");
    }
    print_summary_table(output);
    for asset in &output.assets {
        println!();
        print_asset_table(asset);
    }
}

fn print_summary_table(output: &ReportOutput) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Asset"),
        header_cell("Latest Impr."),
        header_cell("Days"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for asset in &output.assets {
        table.add_row(vec![
            Cell::new(&asset.asset)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(asset.latest_impressions),
            Cell::new(asset.days.len()),
        ]);
    }
    println!("{table}");
}

fn print_asset_table(asset: &AssetReport) {
    let mut table = Table::new();
    let title = if asset.link.is_empty() {
        asset.asset.clone()
    } else {
        format!("{} ({})", asset.asset, asset.link)
    };
    let mut header = vec![header_cell(&title)];
    header.extend(asset.days.iter().map(|day| header_cell(day)));
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &asset.metrics {
        let mut cells = vec![Cell::new(&row.metric)];
        cells.extend(row.cells.iter().map(metric_cell));
        table.add_row(cells);
    }
    println!("{table}");
}

/// Render a drill-down series as a two-column table.
pub fn print_series(asset: &str, metric: Metric, points: &[SeriesPoint]) {
    println!("{asset} - {metric}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Day"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in points {
        let value = match point.value {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(&point.day), value]);
    }
    println!("{table}");
}

/// List the supported metric columns and their comparison polarity.
pub fn print_metrics() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Comparison")]);
    apply_table_style(&mut table);
    for metric in Metric::ALL {
        let comparison = match metric.polarity() {
            Some(Polarity::HigherIsBetter) => Cell::new("higher is better").fg(Color::Green),
            Some(Polarity::LowerIsBetter) => Cell::new("lower is better").fg(Color::Yellow),
            None => dim_cell("not compared"),
        };
        table.add_row(vec![Cell::new(metric.as_str()), comparison]);
    }
    println!("{table}");
}

fn metric_cell(cell: &MetricCell) -> Cell {
    if cell.display.is_empty() {
        return Cell::new("");
    }
    match cell.signal {
        Some(Signal::Improved) => Cell::new(&cell.display).fg(Color::Green),
        Some(Signal::Worsened) => Cell::new(&cell.display).fg(Color::Red),
        Some(Signal::Unchanged) => Cell::new(&cell.display).fg(Color::DarkGrey),
        None => Cell::new(&cell.display),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
