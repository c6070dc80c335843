//! Summary sheet: identification header, the three harvest blocks and the
//! per-step result rows.

use crate::context::ReportContext;
use crate::error::ReportError;
use crate::labels::{LabelTable, Namespace};
use crate::layout::plan::{CellPlan, PlanBuilder, SheetKind};

/// Result rows occupy columns A through M.
const SUMMARY_COLS: usize = 13;

pub fn layout_summary(
    context: &ReportContext,
    labels: &LabelTable,
) -> Result<CellPlan, ReportError> {
    let mut b = PlanBuilder::new(
        SheetKind::Summary,
        labels.get(Namespace::General, "summary_sheet")?,
    );

    // First identification block
    b.merge_bold_center(1, 4, 2, labels.get(Namespace::General, "study_area")?);
    b.merge_bold_center(2, 4, 2, labels.get(Namespace::General, "forest")?);
    b.merge_bold_center(3, 4, 2, labels.get(Namespace::General, "main_specie")?);
    b.merge_bold_center(4, 4, 2, labels.get(Namespace::General, "datetime")?);
    b.merge(1, 6, 3, context.area_value("STUDY_AREA"));
    b.merge(2, 6, 3, context.area_value("FOREST"));
    b.merge(3, 6, 3, context.area_value("MAIN_SPECIE"));
    b.merge(
        4,
        6,
        3,
        context.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
    );

    // Second identification block
    b.merge_bold_center(1, 9, 2, labels.get(Namespace::General, "inventory")?);
    b.merge_bold_center(2, 9, 2, labels.get(Namespace::General, "plot")?);
    b.merge_bold_center(3, 9, 2, labels.get(Namespace::General, "model")?);
    b.merge_bold_center(4, 9, 2, labels.get(Namespace::General, "scenario")?);
    b.merge(1, 11, 3, context.inventory_id.as_str());
    b.merge(2, 11, 3, context.plot_id.as_str());
    b.merge(3, 11, 3, context.model.model_name.as_str());
    b.merge(4, 11, 3, context.scenario_name.as_str());

    // Before-cut block
    b.merge_bold_left(6, 1, 2, "");
    b.merge_bold_left(6, 3, 4, labels.get(Namespace::General, "stand_before_cut")?);

    // AGE wins over YEAR, YEAR over the generic scenario age
    let first_header = if context.has_var("AGE") {
        labels.get(Namespace::General, "sum_age")?
    } else if context.has_var("YEAR") {
        labels.get(Namespace::General, "sum_year")?
    } else {
        labels.get(Namespace::Plot, "scenario_age")?
    };
    b.header_cell(7, 1, first_header);
    b.header_cell(7, 2, labels.get(Namespace::General, "sum_hdom")?);
    b.header_cell(7, 3, labels.get(Namespace::General, "sum_density_b_cut")?);
    b.header_cell(7, 4, labels.get(Namespace::General, "sum_qmdbh_b_cut")?);
    b.header_cell(7, 5, labels.get(Namespace::General, "sum_ba_b_cut")?);
    b.header_cell(7, 6, labels.get(Namespace::General, "sum_vol_b_cut")?);

    // Cut block
    b.merge_bold_center(6, 7, 3, labels.get(Namespace::General, "stand_cut")?);
    b.header_cell(7, 7, labels.get(Namespace::General, "sum_density_cut")?);
    b.header_cell(7, 8, labels.get(Namespace::General, "sum_qmdbh_cut")?);
    b.header_cell(7, 9, labels.get(Namespace::General, "sum_vol_cut")?);

    // After-cut block
    b.merge_bold_center(6, 10, 4, labels.get(Namespace::General, "stand_after_cut")?);
    b.header_cell(7, 10, labels.get(Namespace::General, "sum_density_a_cut")?);
    b.header_cell(7, 11, labels.get(Namespace::General, "sum_qmdbh_a_cut")?);
    b.header_cell(7, 12, labels.get(Namespace::General, "sum_ba_a_cut")?);
    b.header_cell(7, 13, labels.get(Namespace::General, "sum_vol_a_cut")?);

    // Per-step result rows
    let mut row = 8;
    for data_row in &context.summary_rows {
        for (i, value) in data_row.iter().take(SUMMARY_COLS).enumerate() {
            if !value.is_empty() {
                b.cell(row, i as u16 + 1, value.clone());
            }
        }
        row += 1;
    }

    // Warning lines below the table, one blank row in between
    if !context.warnings.is_empty() {
        row += 1;
        for warning in &context.warnings {
            b.merge_bold_left(row, 1, SUMMARY_COLS as u16, warning.as_str());
            row += 1;
        }
    }

    Ok(b.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;
    use crate::layout::plan::CellValue;

    fn context() -> ReportContext {
        let mut ctx = ReportContext {
            inventory_id: "IFN-7".to_string(),
            plot_id: "P-31-0214".to_string(),
            scenario_name: "two-thinnings".to_string(),
            ..Default::default()
        };
        ctx.area
            .insert("STUDY_AREA".to_string(), "Sierra de Urbion".to_string());
        ctx.area
            .insert("FOREST".to_string(), "Pinar Grande".to_string());
        ctx
    }

    fn labels() -> LabelTable {
        LabelTable::load(Locale::En).unwrap()
    }

    #[test]
    fn test_identification_blocks() {
        let plan = layout_summary(&context(), &labels()).unwrap();
        let study_area = plan.cell_at(1, 4).unwrap();
        assert!(study_area.bold && study_area.merged);
        assert_eq!(study_area.span, 2);
        assert_eq!(
            plan.cell_at(1, 6).unwrap().value,
            CellValue::Text("Sierra de Urbion".to_string())
        );
        assert_eq!(
            plan.cell_at(2, 11).unwrap().value,
            CellValue::Text("P-31-0214".to_string())
        );
        assert_eq!(
            plan.cell_at(4, 11).unwrap().value,
            CellValue::Text("two-thinnings".to_string())
        );
    }

    #[test]
    fn test_age_beats_year() {
        let mut ctx = context();
        ctx.populated_vars.insert("AGE".to_string());
        ctx.populated_vars.insert("YEAR".to_string());
        let plan = layout_summary(&ctx, &labels()).unwrap();
        let lbls = labels();
        assert_eq!(
            plan.cell_at(7, 1).unwrap().value,
            CellValue::Text(lbls.get(Namespace::General, "sum_age").unwrap().to_string())
        );
    }

    #[test]
    fn test_year_without_age() {
        let mut ctx = context();
        ctx.populated_vars.insert("YEAR".to_string());
        let plan = layout_summary(&ctx, &labels()).unwrap();
        let lbls = labels();
        assert_eq!(
            plan.cell_at(7, 1).unwrap().value,
            CellValue::Text(lbls.get(Namespace::General, "sum_year").unwrap().to_string())
        );
    }

    #[test]
    fn test_generic_fallback_header() {
        let plan = layout_summary(&context(), &labels()).unwrap();
        let lbls = labels();
        assert_eq!(
            plan.cell_at(7, 1).unwrap().value,
            CellValue::Text(
                lbls.get(Namespace::Plot, "scenario_age")
                    .unwrap()
                    .to_string()
            )
        );
    }

    #[test]
    fn test_result_rows_start_at_row_eight() {
        let mut ctx = context();
        ctx.summary_rows = vec![
            vec![CellValue::Number(20.0), CellValue::Number(14.2)],
            vec![CellValue::Number(25.0), CellValue::Number(16.8)],
        ];
        let plan = layout_summary(&ctx, &labels()).unwrap();
        assert_eq!(plan.cell_at(8, 1).unwrap().value, CellValue::Number(20.0));
        assert_eq!(plan.cell_at(9, 2).unwrap().value, CellValue::Number(16.8));
    }

    #[test]
    fn test_warnings_follow_result_rows() {
        let mut ctx = context();
        ctx.summary_rows = vec![vec![CellValue::Number(20.0)]];
        ctx.warnings = vec!["Applied scenario exceeds model validity".to_string()];
        let plan = layout_summary(&ctx, &labels()).unwrap();
        let warning = plan.cell_at(10, 1).unwrap();
        assert!(warning.bold);
        assert_eq!(warning.span, 13);
    }
}
