//! Per-report input values.
//!
//! A `ReportContext` carries everything one plot/scenario run contributes to
//! its report: identification, the active model's card, area attribute
//! values, the set of plot variables this model actually populates, and the
//! raw tabular rows for the data sheets. It is created per report and
//! discarded after the plan is emitted; upstream simulation concerns never
//! leak in.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::layout::plan::CellValue;

/// The model card shown on the description and metadata sheets. All eight
/// fields are unconditional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    pub specie_ifn_id: String,
    pub aplication_area: String,
    pub valid_prov_reg: String,
    pub exec_time: String,
    /// Key resolved under the metadata label namespace, e.g.
    /// `tree_independent` or `stand_model`.
    pub model_type: String,
    pub model_card_es: String,
    pub model_card_en: String,
}

impl ModelMetadata {
    /// Field value by catalog key, in MODEL group vocabulary.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "MODEL_NAME" => Some(&self.model_name),
            "SPECIE_IFN_ID" => Some(&self.specie_ifn_id),
            "APLICATION_AREA" => Some(&self.aplication_area),
            "VALID_PROV_REG" => Some(&self.valid_prov_reg),
            "EXEC_TIME" => Some(&self.exec_time),
            "MODEL_TYPE" => Some(&self.model_type),
            "MODEL_CARD_ES" => Some(&self.model_card_es),
            "MODEL_CARD_EN" => Some(&self.model_card_en),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportContext {
    pub inventory_id: String,
    pub plot_id: String,
    pub scenario_name: String,
    /// Report generation time; the current time is used when absent.
    pub generated_at: Option<DateTime<Utc>>,
    pub model: ModelMetadata,
    /// Area attribute values keyed by AREA catalog key. Empty strings are
    /// treated as absent by the description sheet.
    pub area: BTreeMap<String, String>,
    /// Plot variables this model populates. Drives the conditional summary
    /// sections and the age/year header choice.
    pub populated_vars: BTreeSet<String>,
    /// Plot attribute values shown on the description sheet
    /// (REINEKE_VALUE, REF_SI_AGE, SI).
    pub plot_attributes: BTreeMap<String, String>,
    pub warnings: Vec<String>,
    /// Raw tabular rows positioned, not interpreted, by the layout.
    pub summary_rows: Vec<Vec<CellValue>>,
    pub plot_rows: Vec<Vec<CellValue>>,
    pub tree_rows: Vec<Vec<CellValue>>,
}

impl ReportContext {
    pub fn has_var(&self, key: &str) -> bool {
        self.populated_vars.contains(key)
    }

    pub fn area_value(&self, key: &str) -> &str {
        self.area.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn plot_attribute(&self, key: &str) -> Option<&str> {
        self.plot_attributes.get(key).map(String::as_str)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }

    /// Identification fields must be present before layout starts; a report
    /// that cannot say which plot it describes is useless downstream.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.plot_id.is_empty() {
            return Err(ReportError::InvalidContext("empty plot id".to_string()));
        }
        if self.inventory_id.is_empty() {
            return Err(ReportError::InvalidContext(
                "empty inventory id".to_string(),
            ));
        }
        if self.scenario_name.is_empty() {
            return Err(ReportError::InvalidContext(
                "empty scenario name".to_string(),
            ));
        }
        Ok(())
    }
}
