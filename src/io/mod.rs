mod csv_io;
mod excel;
mod json_io;

use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::layout::RenderedReport;

pub use csv_io::write_csv;
pub use excel::write_excel;
pub use json_io::{read_context, read_context_from_bytes, write_json};

pub(crate) use csv_io::sheet_grid;

/// Trait for writing a rendered report to disk.
pub trait ReportWriter {
    fn write(&self, report: &RenderedReport, path: &Path) -> Result<(), ReportError>;
}

/// Excel (.xlsx) report writer: one workbook, one worksheet per sheet plan.
#[derive(Default)]
pub struct ExcelFormat {
    /// Logo placed on the header sheets; missing files are logged and
    /// skipped.
    pub logo: Option<PathBuf>,
}

impl ReportWriter for ExcelFormat {
    fn write(&self, report: &RenderedReport, path: &Path) -> Result<(), ReportError> {
        write_excel(report, path, self.logo.as_deref())
    }
}

/// CSV report writer: one grid file per sheet, written into the target
/// directory.
pub struct CsvFormat {
    pub decimals: usize,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl ReportWriter for CsvFormat {
    fn write(&self, report: &RenderedReport, path: &Path) -> Result<(), ReportError> {
        write_csv(report, path, self.decimals)
    }
}

/// JSON report writer: the full plan set in one file.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ReportWriter for JsonFormat {
    fn write(&self, report: &RenderedReport, path: &Path) -> Result<(), ReportError> {
        write_json(report, path, self.pretty)
    }
}
