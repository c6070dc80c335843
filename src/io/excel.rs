use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Image, Workbook, Worksheet};

use crate::error::ReportError;
use crate::layout::{Align, CellPlan, CellValue, PlannedCell, RenderedReport, SheetKind};

/// Number of decimals used when a numeric value lands in a merged range,
/// which only stores strings.
const MERGED_DECIMALS: usize = 2;

fn tab_color(kind: SheetKind) -> Color {
    match kind {
        SheetKind::Summary => Color::RGB(0x228B22),
        SheetKind::Description => Color::RGB(0x996D14),
        SheetKind::Metadata => Color::RGB(0x613605),
        SheetKind::PlotData | SheetKind::TreeData => Color::RGB(0x0C5C00),
    }
}

fn excel_err(e: rust_xlsxwriter::XlsxError) -> ReportError {
    ReportError::Excel(e.to_string())
}

fn cell_format(cell: &PlannedCell) -> Format {
    let mut format = Format::new();
    if cell.bold {
        format = format.set_bold();
    }
    format = format.set_align(match cell.align {
        Align::Center => FormatAlign::Center,
        Align::Left => FormatAlign::Left,
    });
    format
}

fn write_cell(sheet: &mut Worksheet, cell: &PlannedCell) -> Result<(), ReportError> {
    let row = cell.row - 1;
    let col = cell.col - 1;
    let format = cell_format(cell);

    if cell.span > 1 {
        let last_col = col + cell.span - 1;
        let text = match &cell.value {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(_) => cell.value.render(MERGED_DECIMALS),
        };
        sheet
            .merge_range(row, col, row, last_col, &text, &format)
            .map_err(excel_err)?;
        return Ok(());
    }

    match &cell.value {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            sheet
                .write_string_with_format(row, col, s, &format)
                .map_err(excel_err)?;
        }
        CellValue::Number(n) => {
            sheet
                .write_number_with_format(row, col, *n, &format)
                .map_err(excel_err)?;
        }
    }
    Ok(())
}

/// Header sheets carry the project logo when one is configured. A missing
/// image file is logged and skipped, never an error.
fn insert_logo(sheet: &mut Worksheet, logo: &Path) -> Result<(), ReportError> {
    match Image::new(logo) {
        Ok(image) => {
            sheet.insert_image(0, 0, &image).map_err(excel_err)?;
        }
        Err(e) => {
            tracing::warn!(path = %logo.display(), error = %e, "logo image not loaded");
        }
    }
    Ok(())
}

/// Write every sheet of a rendered report to one .xlsx workbook.
pub fn write_excel(
    report: &RenderedReport,
    path: impl AsRef<Path>,
    logo: Option<&Path>,
) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();

    for plan in report.sheets() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&plan.name).map_err(excel_err)?;
        sheet.set_tab_color(tab_color(plan.kind));
        write_sheet(sheet, plan, logo)?;
    }

    workbook.save(path.as_ref()).map_err(excel_err)?;
    Ok(())
}

fn write_sheet(
    sheet: &mut Worksheet,
    plan: &CellPlan,
    logo: Option<&Path>,
) -> Result<(), ReportError> {
    for col in 0..26u16 {
        sheet.set_column_width(col, 12).map_err(excel_err)?;
    }

    let header_sheet = matches!(
        plan.kind,
        SheetKind::Summary | SheetKind::Description | SheetKind::Metadata
    );
    if header_sheet {
        if let Some(logo) = logo {
            insert_logo(sheet, logo)?;
        }
    }

    for cell in &plan.cells {
        write_cell(sheet, cell)?;
    }
    Ok(())
}
