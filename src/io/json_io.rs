use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::context::ReportContext;
use crate::error::ReportError;
use crate::layout::RenderedReport;

/// Load a report context from a JSON file.
pub fn read_context(path: impl AsRef<Path>) -> Result<ReportContext, ReportError> {
    let file = File::open(path.as_ref())?;
    let context: ReportContext = serde_json::from_reader(BufReader::new(file))?;
    Ok(context)
}

pub fn read_context_from_bytes(data: &[u8]) -> Result<ReportContext, ReportError> {
    Ok(serde_json::from_slice(data)?)
}

/// Write the rendered report, plans and all, as JSON.
pub fn write_json(
    report: &RenderedReport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ReportError> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }
    Ok(())
}
