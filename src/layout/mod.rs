//! Report layout: pure transformation from a report context to positional
//! cell plans, one per output sheet.

pub mod data_sheets;
pub mod description;
pub mod metadata;
pub mod offsets;
pub mod plan;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::catalog::VariableCatalog;
use crate::config::LayoutConfig;
use crate::context::ReportContext;
use crate::error::ReportError;
use crate::labels::LabelTable;

pub use offsets::{MetadataAnchors, SectionLengths};
pub use plan::{Align, CellPlan, CellValue, PlanBuilder, PlannedCell, SheetKind};

/// The full set of planned sheets for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub summary: CellPlan,
    pub description: CellPlan,
    pub metadata: CellPlan,
    pub plot: CellPlan,
    pub tree: CellPlan,
}

impl RenderedReport {
    pub fn sheets(&self) -> [&CellPlan; 5] {
        [
            &self.summary,
            &self.description,
            &self.metadata,
            &self.plot,
            &self.tree,
        ]
    }
}

/// Build every sheet for one report. Single pass, no side effects; the same
/// inputs always produce the same plans.
pub fn build_report(
    context: &ReportContext,
    labels: &LabelTable,
    catalog: &VariableCatalog,
    config: &LayoutConfig,
) -> Result<RenderedReport, ReportError> {
    context.validate()?;
    Ok(RenderedReport {
        summary: summary::layout_summary(context, labels)?,
        description: description::layout_description(context, labels, catalog)?,
        metadata: metadata::layout_metadata(context, labels, catalog, config.spacers)?,
        plot: data_sheets::layout_plot_data(context, labels, catalog)?,
        tree: data_sheets::layout_tree_data(context, labels, catalog)?,
    })
}
