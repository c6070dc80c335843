use std::path::Path;

use crate::error::ReportError;
use crate::layout::{CellPlan, RenderedReport};

/// Dense text grid for one sheet. Merged ranges collapse onto their anchor
/// cell; covered columns stay empty.
pub(crate) fn sheet_grid(plan: &CellPlan, decimals: usize) -> Vec<Vec<String>> {
    let rows = plan.max_row() as usize;
    let cols = plan.max_col() as usize;
    let mut grid = vec![vec![String::new(); cols]; rows];
    for cell in &plan.cells {
        grid[cell.row as usize - 1][cell.col as usize - 1] = cell.value.render(decimals);
    }
    grid
}

fn sheet_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.csv", stem.to_lowercase())
}

fn write_sheet_csv(plan: &CellPlan, path: &Path, decimals: usize) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in sheet_grid(plan, decimals) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report as one CSV grid per sheet into `dir`, named after the
/// resolved sheet names.
pub fn write_csv(
    report: &RenderedReport,
    dir: impl AsRef<Path>,
    decimals: usize,
) -> Result<(), ReportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    for plan in report.sheets() {
        let path = dir.join(sheet_file_name(&plan.name));
        write_sheet_csv(plan, &path, decimals)?;
    }
    Ok(())
}
