//! Layout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::labels::Locale;

/// Blank rows inserted between stacked metadata sections.
///
/// The defaults reproduce the gaps the established report format leaves
/// before the plot and tree variable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacers {
    pub before_plot: u32,
    pub before_tree: u32,
}

impl Default for Spacers {
    fn default() -> Self {
        Spacers {
            before_plot: 3,
            before_tree: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub locale: Locale,
    pub spacers: Spacers,
    /// Decimal places used when numbers are rendered as text (CSV, preview).
    pub decimals: usize,
    /// Logo image placed on the header sheets. Decoration only: a missing
    /// file is logged and skipped.
    pub logo: Option<PathBuf>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            locale: Locale::En,
            spacers: Spacers::default(),
            decimals: 2,
            logo: None,
        }
    }
}

impl LayoutConfig {
    pub fn from_toml(source: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.spacers.before_plot, 3);
        assert_eq!(config.spacers.before_tree, 3);
        assert_eq!(config.decimals, 2);
        assert!(config.logo.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LayoutConfig::from_toml(
            r#"
            locale = "gl"
            [spacers]
            before_plot = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Gl);
        assert_eq!(config.spacers.before_plot, 5);
        assert_eq!(config.spacers.before_tree, 3);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(matches!(
            LayoutConfig::from_toml("locale = \"fr\""),
            Err(ReportError::Toml(_))
        ));
    }
}
