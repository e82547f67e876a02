use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    let report = &result.report;
    println!("Dataset: {}", report.dataset);
    let tokens: Vec<String> = report.rules.iter().map(|token| format!("{token:?}")).collect();
    println!("Rules: {}", tokens.join(", "));
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Complete"),
        header_cell("Incomplete"),
        header_cell("Complete %"),
        header_cell("Cells normalized"),
    ]);
    apply_overview_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let incomplete = report.total_records - report.complete_count;
    table.add_row(vec![
        Cell::new(report.total_records).add_attribute(Attribute::Bold),
        count_cell(report.complete_count, Color::Green),
        count_cell(incomplete, Color::Yellow),
        Cell::new(percent(report.complete_fraction)),
        count_cell(report.cells_changed, Color::Cyan),
    ]);
    println!("{table}");

    print_column_table(result);

    if report.zero_effect && report.total_records > 0 {
        println!(
            "Note: normalization changed no cells; the configured tokens may not \
             match this dataset's missing-value encoding."
        );
    }
}

fn print_column_table(result: &CheckResult) {
    let report = &result.report;
    if report.columns.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Empty"),
        header_cell("Numeric"),
        header_cell("Distinct %"),
    ]);
    apply_column_table_style(&mut table);
    for index in 1..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 4, CellAlignment::Center);
    for (column, profile) in &report.columns {
        table.add_row(vec![
            Cell::new(column).fg(Color::Blue),
            count_cell(profile.missing, Color::Red),
            Cell::new(percent(profile.missing_ratio)),
            count_cell(profile.empty, Color::Yellow),
            flag_cell(profile.numeric),
            Cell::new(percent(profile.unique_ratio)),
        ]);
    }
    println!();
    println!("Columns:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_overview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_column_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
