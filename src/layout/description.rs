//! Description sheet: study area attributes, plot quality attributes and the
//! model card.

use crate::catalog::VariableCatalog;
use crate::context::ReportContext;
use crate::error::ReportError;
use crate::labels::{LabelTable, Namespace};
use crate::layout::plan::{CellPlan, PlanBuilder, SheetKind};

/// Plot attributes shown between the area block and the model card, each on
/// its own fixed row.
const PLOT_ATTRIBUTES: &[(u32, &str)] = &[(7, "REINEKE_VALUE"), (8, "REF_SI_AGE"), (9, "SI")];

pub fn layout_description(
    context: &ReportContext,
    labels: &LabelTable,
    catalog: &VariableCatalog,
) -> Result<CellPlan, ReportError> {
    let mut b = PlanBuilder::new(
        SheetKind::Description,
        labels.get(Namespace::General, "description_sheet")?,
    );

    // Project links
    b.merge_bold_center(2, 5, 4, labels.get(Namespace::Metadata, "web_sima")?);
    b.merge_bold_center(3, 5, 4, labels.get(Namespace::Metadata, "link_sima")?);
    b.merge_bold_center(2, 14, 4, labels.get(Namespace::Metadata, "web_iufor")?);
    b.merge_bold_center(3, 14, 4, labels.get(Namespace::Metadata, "link_iufor")?);

    // Study area block. The row advances only when a value is emitted, so
    // the block is as tall as the number of non-empty attributes.
    b.merge_bold_center(6, 1, 9, labels.get(Namespace::General, "study_area")?);
    let mut row = 7;
    for key in &catalog.area {
        let value = context.area_value(key);
        if value.is_empty() {
            continue;
        }
        b.merge_bold_center(row, 1, 3, labels.get(Namespace::Area, key)?);
        b.merge(row, 4, 6, value);
        row += 1;
    }

    // Plot quality attributes
    b.merge_bold_center(6, 10, 11, labels.get(Namespace::General, "plot_info")?);
    for &(attr_row, key) in PLOT_ATTRIBUTES {
        if !context.has_var(key) {
            continue;
        }
        b.merge_bold_center(attr_row, 10, 3, labels.get(Namespace::Plot, key)?);
        if let Some(value) = context.plot_attribute(key) {
            b.merge(attr_row, 13, 8, value);
        }
    }

    // Model card: the eight fields are unconditional. The model-type value
    // is itself a label key.
    b.merge_bold_center(11, 10, 11, labels.get(Namespace::General, "model_info")?);
    let mut model_row = 12;
    for key in &catalog.model {
        b.merge_bold_center(model_row, 10, 3, labels.get(Namespace::Model, key)?);
        let value = context.model.field(key).unwrap_or("");
        if key == "MODEL_TYPE" && !value.is_empty() {
            b.merge(model_row, 13, 8, labels.get(Namespace::Metadata, value)?);
        } else {
            b.merge(model_row, 13, 8, value);
        }
        model_row += 1;
    }

    Ok(b.finish())
}
