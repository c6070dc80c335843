use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::io::sheet_grid;
use crate::layout::{CellPlan, RenderedReport};

/// Format the summary sheet's header and result rows as a terminal table.
pub fn format_summary_preview(plan: &CellPlan, decimals: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", plan.name.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let grid = sheet_grid(plan, decimals);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    // Row 7 carries the column headers, result rows follow.
    if let Some(header) = grid.get(6) {
        table.set_header(header.iter().map(Cell::new).collect::<Vec<_>>());
    }
    for row in grid.iter().skip(7) {
        if row.iter().all(String::is_empty) {
            continue;
        }
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    output.push_str(&format!("{table}"));
    output
}

/// One line per sheet: name, planned cells and extents.
pub fn format_report_overview(report: &RenderedReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Planned sheets".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Sheet", "Cells", "Rows", "Columns"]);
    for plan in report.sheets() {
        table.add_row(vec![
            Cell::new(&plan.name),
            Cell::new(plan.cells.len()),
            Cell::new(plan.max_row()),
            Cell::new(plan.max_col()),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

pub fn print_report_preview(report: &RenderedReport, decimals: usize) {
    println!("{}", format_report_overview(report));
    println!("{}", format_summary_preview(&report.summary, decimals));
}
