//! The variable catalog: ordered key lists per variable group.
//!
//! The catalog is immutable after load. Report-dependent list changes (the
//! conditional SUMMARY extension, dropping `scenario_id`) are computed per
//! call and returned as fresh lists, so concurrent or repeated report
//! generation can never observe a half-extended catalog.

mod groups;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub use groups::{
    AREA_VARS, CUTS, GENERAL_INFO, METADATA_INFO, MODEL_VARS, PLOT_VARS, PLOT_VARS_NOT_PRINT,
    SCENARIO_VARS, SUMMARY_EXTENSION, SUMMARY_VARS, TREE_VARS, WARNING_VARS,
};

/// Summary entries appended when the plot has the trigger variable populated.
///
/// Order matters twice over: triggers are checked in this order, and each
/// appended entry shifts every later metadata-sheet section down one row.
const EXTENSION_TRIGGERS: &[(&str, &[&str])] = &[
    ("DEAD_DENSITY", &["stand_dead"]),
    ("ING_DENSITY", &["stand_ingrowth"]),
    ("W_CORK", &["QSUBER_VARS", "W_CORK", "BARK_VOL"]),
    (
        "ALL_CONES",
        &[
            "PPINEA_VARS",
            "ALL_CONES",
            "SOUND_CONES",
            "SOUND_SEEDS",
            "W_SOUND_CONES",
            "W_ALL_CONES",
        ],
    ),
    (
        "EDIBLE_MUSH",
        &["MUSHROOMS_VARS", "EDIBLE_MUSH", "MARKETED_MUSH", "MARKETED_LACTARIUS"],
    ),
];

/// Scenario variable never shown on any sheet.
const SCENARIO_ID: &str = "scenario_id";

/// The variable groups a report layout is driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableGroup {
    Area,
    Model,
    Plot,
    Tree,
    Scenario,
    Summary,
    SummaryExtension,
    Cuts,
    GeneralInfo,
    Metadata,
    Warnings,
}

/// Ordered variable key lists, one per group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableCatalog {
    pub area: Vec<String>,
    pub model: Vec<String>,
    pub plot: Vec<String>,
    pub plot_not_print: Vec<String>,
    pub tree: Vec<String>,
    pub scenario: Vec<String>,
    pub summary: Vec<String>,
    pub summary_extension: Vec<String>,
    pub cuts: Vec<String>,
    pub general_info: Vec<String>,
    pub metadata: Vec<String>,
    pub warnings: Vec<String>,
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl Default for VariableCatalog {
    fn default() -> Self {
        VariableCatalog {
            area: owned(AREA_VARS),
            model: owned(MODEL_VARS),
            plot: owned(PLOT_VARS),
            plot_not_print: owned(PLOT_VARS_NOT_PRINT),
            tree: owned(TREE_VARS),
            scenario: owned(SCENARIO_VARS),
            summary: owned(SUMMARY_VARS),
            summary_extension: owned(SUMMARY_EXTENSION),
            cuts: owned(CUTS),
            general_info: owned(GENERAL_INFO),
            metadata: owned(METADATA_INFO),
            warnings: owned(WARNING_VARS),
        }
    }
}

impl VariableCatalog {
    /// Load a catalog override from TOML. Omitted groups keep the built-in
    /// lists.
    pub fn from_toml(source: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(source)?)
    }

    /// The SUMMARY list extended with the optional sections this plot
    /// actually carries. Pure: the catalog itself is never touched.
    pub fn effective_summary(&self, populated: &BTreeSet<String>) -> Vec<String> {
        let mut out = self.summary.clone();
        for (trigger, entries) in EXTENSION_TRIGGERS {
            if populated.contains(*trigger) {
                out.extend(entries.iter().map(|e| e.to_string()));
            }
        }
        out
    }

    /// Scenario variables as shown on the output sheets.
    pub fn effective_scenario(&self) -> Vec<String> {
        self.scenario
            .iter()
            .filter(|k| k.as_str() != SCENARIO_ID)
            .cloned()
            .collect()
    }

    /// Plot variables that appear in the plot data dump. The not-printed
    /// tail is shown on the description sheet only.
    pub fn printable_plot(&self) -> Vec<String> {
        self.plot
            .iter()
            .filter(|k| !self.plot_not_print.contains(k))
            .cloned()
            .collect()
    }

    pub fn group_len(&self, group: VariableGroup) -> usize {
        match group {
            VariableGroup::Area => self.area.len(),
            VariableGroup::Model => self.model.len(),
            VariableGroup::Plot => self.plot.len(),
            VariableGroup::Tree => self.tree.len(),
            VariableGroup::Scenario => self.scenario.len(),
            VariableGroup::Summary => self.summary.len(),
            VariableGroup::SummaryExtension => self.summary_extension.len(),
            VariableGroup::Cuts => self.cuts.len(),
            VariableGroup::GeneralInfo => self.general_info.len(),
            VariableGroup::Metadata => self.metadata.len(),
            VariableGroup::Warnings => self.warnings.len(),
        }
    }
}
