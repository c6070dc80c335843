//! Row anchor arithmetic for the metadata sheet.
//!
//! The metadata sheet stacks five sections: the (summary | area) pair, the
//! (model | scenario) pair, the cuts block, the plot column and the tree
//! column. Each anchor is a running sum of the preceding section heights
//! plus fixed header padding, with the paired sections advancing by the
//! taller of their two lists.

use crate::config::Spacers;

/// Effective list lengths the anchors are computed from. Summary is the
/// extended per-report length, scenario the length without `scenario_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLengths {
    pub summary: usize,
    pub area: usize,
    pub model: usize,
    pub scenario: usize,
    pub plot: usize,
    pub tree: usize,
}

/// Named anchor rows, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataAnchors {
    /// max(summary, area): height of the first paired section.
    pub len_1: u32,
    /// max(model, scenario): height of the second paired section.
    pub len_2: u32,
    pub pair_titles_row: u32,
    pub first_pair_start: u32,
    pub second_titles_row: u32,
    pub second_pair_start: u32,
    pub cuts_title_row: u32,
    pub cut_kind_row: u32,
    pub cuts_items_start: u32,
    pub plot_title_row: u32,
    pub plot_items_start: u32,
    pub tree_title_row: u32,
    pub status_row: u32,
    pub tree_items_start: u32,
}

impl MetadataAnchors {
    pub fn compute(lengths: SectionLengths, spacers: Spacers) -> Self {
        let len_1 = lengths.summary.max(lengths.area) as u32;
        let len_2 = lengths.model.max(lengths.scenario) as u32;
        let plot_len = lengths.plot as u32;

        let plot_title_row = 21 + len_1 + len_2 + spacers.before_plot;
        let tree_title_row = 24 + len_1 + len_2 + spacers.before_tree + plot_len;

        MetadataAnchors {
            len_1,
            len_2,
            pair_titles_row: 11,
            first_pair_start: 13,
            second_titles_row: 14 + len_1,
            second_pair_start: 16 + len_1,
            cuts_title_row: 17 + len_1 + len_2,
            cut_kind_row: 19 + len_1 + len_2,
            cuts_items_start: 20 + len_1 + len_2,
            plot_title_row,
            plot_items_start: plot_title_row + 2,
            tree_title_row,
            status_row: tree_title_row + 2,
            tree_items_start: tree_title_row + 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lengths(summary: usize, area: usize, model: usize, scenario: usize) -> SectionLengths {
        SectionLengths {
            summary,
            area,
            model,
            scenario,
            plot: 147,
            tree: 81,
        }
    }

    #[test]
    fn test_default_catalog_anchor_rows() {
        // 9 summary vars against 36 area vars, 8 model against 13 scenario.
        let a = MetadataAnchors::compute(lengths(9, 36, 8, 13), Spacers::default());
        assert_eq!(a.len_1, 36);
        assert_eq!(a.len_2, 13);
        assert_eq!(a.pair_titles_row, 11);
        assert_eq!(a.first_pair_start, 13);
        assert_eq!(a.second_titles_row, 50);
        assert_eq!(a.second_pair_start, 52);
        assert_eq!(a.cuts_title_row, 66);
        assert_eq!(a.cut_kind_row, 68);
        assert_eq!(a.cuts_items_start, 69);
        assert_eq!(a.plot_title_row, 73);
        assert_eq!(a.plot_items_start, 75);
        assert_eq!(a.tree_title_row, 223);
        assert_eq!(a.status_row, 225);
        assert_eq!(a.tree_items_start, 226);
    }

    #[test]
    fn test_cork_extension_shifts_later_sections_by_three() {
        let base = MetadataAnchors::compute(lengths(36, 36, 8, 13), Spacers::default());
        let cork = MetadataAnchors::compute(lengths(39, 36, 8, 13), Spacers::default());
        assert_eq!(cork.second_titles_row, base.second_titles_row + 3);
        assert_eq!(cork.cuts_title_row, base.cuts_title_row + 3);
        assert_eq!(cork.plot_title_row, base.plot_title_row + 3);
        assert_eq!(cork.tree_title_row, base.tree_title_row + 3);
        // fixed-header anchors never move
        assert_eq!(cork.pair_titles_row, base.pair_titles_row);
        assert_eq!(cork.first_pair_start, base.first_pair_start);
    }

    #[test]
    fn test_custom_spacers() {
        let spacers = Spacers {
            before_plot: 5,
            before_tree: 1,
        };
        let a = MetadataAnchors::compute(lengths(9, 36, 8, 13), spacers);
        assert_eq!(a.plot_title_row, 21 + 36 + 13 + 5);
        assert_eq!(a.tree_title_row, 24 + 36 + 13 + 1 + 147);
    }

    proptest! {
        #[test]
        fn prop_pair_anchors_follow_max_plus_padding(
            summary in 0usize..200,
            area in 0usize..200,
            model in 0usize..50,
            scenario in 0usize..50,
            plot in 0usize..300,
            before_plot in 0u32..10,
            before_tree in 0u32..10,
        ) {
            let spacers = Spacers { before_plot, before_tree };
            let l = SectionLengths { summary, area, model, scenario, plot, tree: 81 };
            let a = MetadataAnchors::compute(l, spacers);

            let len_1 = summary.max(area) as u32;
            let len_2 = model.max(scenario) as u32;
            prop_assert_eq!(a.second_titles_row, a.pair_titles_row + 3 + len_1);
            prop_assert_eq!(a.second_pair_start, a.first_pair_start + 3 + len_1);
            prop_assert_eq!(a.cuts_title_row, a.second_pair_start + 1 + len_2);
            prop_assert_eq!(a.plot_title_row, a.cuts_title_row + 4 + before_plot);
            prop_assert_eq!(
                a.tree_title_row,
                a.cuts_title_row + 7 + before_tree + plot as u32
            );
            // anchors are strictly ordered whenever the sections are non-empty
            prop_assert!(a.first_pair_start > a.pair_titles_row);
            prop_assert!(a.cuts_items_start > a.cut_kind_row);
            prop_assert!(a.tree_items_start > a.status_row);
        }
    }
}
