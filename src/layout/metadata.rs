//! Metadata sheet: variable dictionaries for every group, stacked with
//! computed anchors so the sections never collide whatever the effective
//! list lengths are.
//!
//! Every emitted variable resolves two labels: its display name under the
//! group namespace and its explanation under the metadata namespace.

use crate::catalog::VariableCatalog;
use crate::config::Spacers;
use crate::context::ReportContext;
use crate::error::ReportError;
use crate::labels::{LabelTable, Namespace};
use crate::layout::offsets::{MetadataAnchors, SectionLengths};
use crate::layout::plan::{CellPlan, PlanBuilder, SheetKind};

/// Cuts entries up to this index go in the left sub-column, the rest right.
const CUTS_SPLIT: usize = 3;

pub fn layout_metadata(
    context: &ReportContext,
    labels: &LabelTable,
    catalog: &VariableCatalog,
    spacers: Spacers,
) -> Result<CellPlan, ReportError> {
    let mut b = PlanBuilder::new(
        SheetKind::Metadata,
        labels.get(Namespace::General, "metadata_sheet")?,
    );

    // Project links
    b.merge_bold_center(2, 5, 4, labels.get(Namespace::Metadata, "web_sima")?);
    b.merge_bold_center(3, 5, 4, labels.get(Namespace::Metadata, "link_sima")?);
    b.merge_bold_center(2, 14, 4, labels.get(Namespace::Metadata, "web_iufor")?);
    b.merge_bold_center(3, 14, 4, labels.get(Namespace::Metadata, "link_iufor")?);

    // Model banner
    b.merge_bold_center(6, 1, 6, labels.get(Namespace::Metadata, "model")?);
    b.merge_bold_center(7, 1, 6, context.model.model_name.as_str());
    if !context.model.model_type.is_empty() {
        b.merge_bold_center(
            8,
            1,
            6,
            labels.get(Namespace::Metadata, &context.model.model_type)?,
        );
    }

    let summary = catalog.effective_summary(&context.populated_vars);
    let scenario = catalog.effective_scenario();
    let anchors = MetadataAnchors::compute(
        SectionLengths {
            summary: summary.len(),
            area: catalog.area.len(),
            model: catalog.model.len(),
            scenario: scenario.len(),
            plot: catalog.plot.len(),
            tree: catalog.tree.len(),
        },
        spacers,
    );

    // Section titles
    b.merge_bold_center(10, 1, 20, labels.get(Namespace::Metadata, "vars")?);
    b.merge_bold_center(
        anchors.pair_titles_row,
        1,
        9,
        labels.get(Namespace::Metadata, "summary")?,
    );
    b.merge_bold_center(
        anchors.pair_titles_row,
        10,
        11,
        labels.get(Namespace::Metadata, "area")?,
    );
    b.merge_bold_center(
        anchors.second_titles_row,
        1,
        9,
        labels.get(Namespace::Metadata, "plot_type")?,
    );
    b.merge_bold_center(
        anchors.second_titles_row,
        10,
        11,
        labels.get(Namespace::Metadata, "scenario")?,
    );
    b.merge_bold_center(
        anchors.cuts_title_row,
        1,
        20,
        labels.get(Namespace::Metadata, "cuts")?,
    );
    b.merge_bold_center(
        anchors.plot_title_row,
        1,
        20,
        labels.get(Namespace::Metadata, "plot")?,
    );
    b.merge_bold_center(
        anchors.tree_title_row,
        1,
        20,
        labels.get(Namespace::Metadata, "tree")?,
    );

    // Summary beside area
    for (j, key) in summary.iter().enumerate() {
        let row = anchors.first_pair_start + j as u32;
        b.merge_bold_center(row, 1, 3, labels.get(Namespace::General, key)?);
        b.merge(row, 4, 6, labels.get(Namespace::Metadata, key)?);
    }
    for (j, key) in catalog.area.iter().enumerate() {
        let row = anchors.first_pair_start + j as u32;
        b.merge_bold_center(row, 10, 3, labels.get(Namespace::Area, key)?);
        b.merge(row, 13, 8, labels.get(Namespace::Metadata, key)?);
    }

    // Model beside scenario
    for (j, key) in catalog.model.iter().enumerate() {
        let row = anchors.second_pair_start + j as u32;
        b.merge_bold_center(row, 1, 3, labels.get(Namespace::Model, key)?);
        b.merge(row, 4, 6, labels.get(Namespace::Metadata, key)?);
    }
    for (j, key) in scenario.iter().enumerate() {
        let row = anchors.second_pair_start + j as u32;
        b.merge_bold_center(row, 10, 3, labels.get(Namespace::Plot, key)?);
        b.merge(row, 13, 8, labels.get(Namespace::Metadata, key)?);
    }

    // Cut kind and criteria, then the cuts entries split across sub-columns
    b.merge_bold_center(
        anchors.cut_kind_row,
        1,
        3,
        labels.get(Namespace::Plot, "cut_type")?,
    );
    b.merge(
        anchors.cut_kind_row,
        4,
        6,
        labels.get(Namespace::Metadata, "cut_type")?,
    );
    b.merge_bold_center(
        anchors.cut_kind_row,
        10,
        3,
        labels.get(Namespace::Plot, "cut_criteria")?,
    );
    b.merge(
        anchors.cut_kind_row,
        13,
        8,
        labels.get(Namespace::Metadata, "cut_criteria")?,
    );
    for (j, key) in catalog.cuts.iter().enumerate() {
        if j < CUTS_SPLIT {
            let row = anchors.cuts_items_start + j as u32;
            b.merge_bold_center(row, 1, 3, labels.get(Namespace::General, key)?);
            b.merge(row, 4, 6, labels.get(Namespace::Metadata, key)?);
        } else {
            let row = anchors.cuts_items_start + (j - CUTS_SPLIT) as u32;
            b.merge_bold_center(row, 10, 3, labels.get(Namespace::General, key)?);
            b.merge(row, 13, 8, labels.get(Namespace::Metadata, key)?);
        }
    }

    // Plot variable dictionary
    for (j, key) in catalog.plot.iter().enumerate() {
        let row = anchors.plot_items_start + j as u32;
        b.merge_bold_center(row, 1, 3, labels.get(Namespace::Plot, key)?);
        b.merge(row, 4, 17, labels.get(Namespace::Metadata, key)?);
    }

    // Tree variable dictionary, status first
    b.merge_bold_center(
        anchors.status_row,
        1,
        3,
        labels.get(Namespace::Tree, "status")?,
    );
    b.merge(
        anchors.status_row,
        4,
        17,
        labels.get(Namespace::Metadata, "status")?,
    );
    for (j, key) in catalog.tree.iter().enumerate() {
        let row = anchors.tree_items_start + j as u32;
        b.merge_bold_center(row, 1, 3, labels.get(Namespace::Tree, key)?);
        b.merge(row, 4, 17, labels.get(Namespace::Metadata, key)?);
    }

    Ok(b.finish())
}
