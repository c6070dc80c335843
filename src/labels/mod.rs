//! Label resolution for report sheets.
//!
//! Labels live in per-locale TOML assets embedded at compile time, one table
//! per namespace. Lookup is typed (namespace + key) instead of the dotted
//! string keys the assets descend from. Non-English locales are overlaid on
//! the English table entry by entry, so a partially translated locale still
//! renders; a key absent from the merged table is a data-integrity defect
//! and fails the whole report.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

const EN_ASSET: &str = include_str!("../../assets/labels/en.toml");
const GL_ASSET: &str = include_str!("../../assets/labels/gl.toml");

/// Blank label asset, used as a starting point for new translations.
pub const TEMPLATE_ASSET: &str = include_str!("../../assets/labels/template.toml");

/// Label namespaces, mirroring the variable groups they describe.
///
/// Scenario variables resolve under [`Namespace::Plot`], as they always have
/// in the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Area,
    Plot,
    Tree,
    Model,
    General,
    Metadata,
    Warnings,
}

impl Namespace {
    pub const ALL: [Namespace; 7] = [
        Namespace::Area,
        Namespace::Plot,
        Namespace::Tree,
        Namespace::Model,
        Namespace::General,
        Namespace::Metadata,
        Namespace::Warnings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Area => "area",
            Namespace::Plot => "plot",
            Namespace::Tree => "tree",
            Namespace::Model => "model",
            Namespace::General => "general",
            Namespace::Metadata => "metadata",
            Namespace::Warnings => "warnings",
        }
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        match name {
            "area" => Some(Namespace::Area),
            "plot" => Some(Namespace::Plot),
            "tree" => Some(Namespace::Tree),
            "model" => Some(Namespace::Model),
            "general" => Some(Namespace::General),
            "metadata" => Some(Namespace::Metadata),
            "warnings" => Some(Namespace::Warnings),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported report locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Gl,
}

impl Locale {
    fn asset(&self) -> &'static str {
        match self {
            Locale::En => EN_ASSET,
            Locale::Gl => GL_ASSET,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Gl => f.write_str("gl"),
        }
    }
}

impl FromStr for Locale {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "gl" => Ok(Locale::Gl),
            other => Err(ReportError::UnknownLocale(other.to_string())),
        }
    }
}

type RawTables = BTreeMap<String, BTreeMap<String, String>>;

/// Resolved label table for one locale.
#[derive(Debug, Clone)]
pub struct LabelTable {
    locale: Locale,
    map: HashMap<(Namespace, String), String>,
}

impl LabelTable {
    /// Load the label table for `locale`, overlaying it on the English base.
    pub fn load(locale: Locale) -> Result<Self, ReportError> {
        let mut table = LabelTable {
            locale,
            map: HashMap::new(),
        };
        table.merge_asset(Locale::En.asset())?;
        if locale != Locale::En {
            table.merge_asset(locale.asset())?;
        }
        Ok(table)
    }

    fn merge_asset(&mut self, asset: &str) -> Result<(), ReportError> {
        let raw: RawTables = toml::from_str(asset)?;
        for (table_name, entries) in raw {
            let Some(ns) = Namespace::from_table_name(&table_name) else {
                tracing::warn!(table = %table_name, "skipping unknown label namespace");
                continue;
            };
            for (key, value) in entries {
                self.map.insert((ns, key), value);
            }
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a label. A miss fails the report: a silently blank cell would
    /// be indistinguishable from legitimately empty data.
    pub fn get(&self, namespace: Namespace, key: &str) -> Result<&str, ReportError> {
        self.map
            .get(&(namespace, key.to_string()))
            .map(String::as_str)
            .ok_or_else(|| ReportError::MissingLabel {
                namespace,
                key: key.to_string(),
            })
    }

    pub fn contains(&self, namespace: Namespace, key: &str) -> bool {
        self.map.contains_key(&(namespace, key.to_string()))
    }

    /// Register an ad hoc label, e.g. for a model-specific variable that the
    /// shipped assets do not know about.
    pub fn insert(&mut self, namespace: Namespace, key: impl Into<String>, value: impl Into<String>) {
        self.map.insert((namespace, key.into()), value.into());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All entries of one namespace, sorted by key. Used by the CLI dump.
    pub fn namespace_entries(&self, namespace: Namespace) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .map
            .iter()
            .filter(|((ns, _), _)| *ns == namespace)
            .map(|((_, k), v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_english_table() {
        let labels = LabelTable::load(Locale::En).unwrap();
        assert_eq!(labels.get(Namespace::Area, "FOREST").unwrap(), "Forest");
        assert_eq!(labels.get(Namespace::Plot, "DENSITY").unwrap(), "N");
        assert_eq!(
            labels.get(Namespace::General, "stand_cut").unwrap(),
            "Harvested stand"
        );
    }

    #[test]
    fn test_missing_label_is_fatal() {
        let labels = LabelTable::load(Locale::En).unwrap();
        let err = labels.get(Namespace::Tree, "NO_SUCH_VAR").unwrap_err();
        match err {
            ReportError::MissingLabel { namespace, key } => {
                assert_eq!(namespace, Namespace::Tree);
                assert_eq!(key, "NO_SUCH_VAR");
            }
            other => panic!("expected MissingLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_galician_overlays_english() {
        let labels = LabelTable::load(Locale::Gl).unwrap();
        assert_eq!(labels.get(Namespace::Area, "FOREST").unwrap(), "Monte");
        assert_eq!(
            labels.get(Namespace::General, "stand_cut").unwrap(),
            "Masa extraida"
        );
    }

    #[test]
    fn test_galician_falls_back_for_untranslated_explanations() {
        let en = LabelTable::load(Locale::En).unwrap();
        let gl = LabelTable::load(Locale::Gl).unwrap();
        // Explanations are only authored in English so far.
        assert_eq!(
            gl.get(Namespace::Metadata, "BASAL_AREA").unwrap(),
            en.get(Namespace::Metadata, "BASAL_AREA").unwrap()
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("GL".parse::<Locale>().unwrap(), Locale::Gl);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(ReportError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_insert_ad_hoc_label() {
        let mut labels = LabelTable::load(Locale::En).unwrap();
        assert!(!labels.contains(Namespace::Plot, "MY_MODEL_VAR"));
        labels.insert(Namespace::Plot, "MY_MODEL_VAR", "My_model_var");
        assert_eq!(
            labels.get(Namespace::Plot, "MY_MODEL_VAR").unwrap(),
            "My_model_var"
        );
    }

    #[test]
    fn test_template_asset_is_blank() {
        let raw: RawTables = toml::from_str(TEMPLATE_ASSET).unwrap();
        assert!(raw.values().flat_map(|t| t.values()).all(|v| v.is_empty()));
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::Metadata.to_string(), "metadata");
        assert_eq!(Namespace::Warnings.to_string(), "warnings");
    }
}
