//! Plot and tree data dumps: a labelled header row, then the raw rows the
//! caller supplies, positioned as-is.

use crate::catalog::VariableCatalog;
use crate::context::ReportContext;
use crate::error::ReportError;
use crate::labels::{LabelTable, Namespace};
use crate::layout::plan::{CellPlan, CellValue, PlanBuilder, SheetKind};

fn place_rows(b: &mut PlanBuilder, rows: &[Vec<CellValue>]) {
    for (i, row) in rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            if !value.is_empty() {
                b.cell(i as u32 + 2, j as u16 + 1, value.clone());
            }
        }
    }
}

/// Plot dump: scenario columns first, then the printable plot variables.
pub fn layout_plot_data(
    context: &ReportContext,
    labels: &LabelTable,
    catalog: &VariableCatalog,
) -> Result<CellPlan, ReportError> {
    let mut b = PlanBuilder::new(
        SheetKind::PlotData,
        labels.get(Namespace::General, "plot_sheet")?,
    );

    let mut col = 1u16;
    for key in catalog.effective_scenario() {
        b.header_cell(1, col, labels.get(Namespace::Plot, &key)?);
        col += 1;
    }
    for key in catalog.printable_plot() {
        b.header_cell(1, col, labels.get(Namespace::Plot, &key)?);
        col += 1;
    }

    place_rows(&mut b, &context.plot_rows);
    Ok(b.finish())
}

/// Tree dump: every tree variable plus the trailing status column.
pub fn layout_tree_data(
    context: &ReportContext,
    labels: &LabelTable,
    catalog: &VariableCatalog,
) -> Result<CellPlan, ReportError> {
    let mut b = PlanBuilder::new(
        SheetKind::TreeData,
        labels.get(Namespace::General, "trees_sheet")?,
    );

    let mut col = 1u16;
    for key in &catalog.tree {
        b.header_cell(1, col, labels.get(Namespace::Tree, key)?);
        col += 1;
    }
    b.header_cell(1, col, labels.get(Namespace::Tree, "status")?);

    place_rows(&mut b, &context.tree_rows);
    Ok(b.finish())
}
