//! The positional output model: ordered, styled cell placements per sheet.
//!
//! Rows and columns are 1-based, matching the coordinate convention the
//! report format was designed in. Writers convert as their backend needs.

use serde::{Deserialize, Serialize};

/// A single cell value. `Number` before `Text` so untagged deserialization
/// tries the numeric reading first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Text rendering for grid outputs and the terminal preview.
    pub fn render(&self, decimals: usize) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{n:.0}")
                } else {
                    format!("{n:.decimals$}")
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

/// One placement instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedCell {
    pub row: u32,
    pub col: u16,
    /// Number of columns covered, 1 for a plain cell.
    pub span: u16,
    pub merged: bool,
    pub bold: bool,
    pub align: Align,
    pub value: CellValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Summary,
    Description,
    Metadata,
    PlotData,
    TreeData,
}

/// The ordered cell placements for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellPlan {
    pub kind: SheetKind,
    /// Resolved, locale-dependent sheet name.
    pub name: String,
    pub cells: Vec<PlannedCell>,
}

impl CellPlan {
    /// The first cell anchored at (row, col), if any. Test helper mostly,
    /// also used by the preview.
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&PlannedCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn max_row(&self) -> u32 {
        self.cells.iter().map(|c| c.row).max().unwrap_or(0)
    }

    pub fn max_col(&self) -> u16 {
        self.cells
            .iter()
            .map(|c| c.col + c.span.saturating_sub(1))
            .max()
            .unwrap_or(0)
    }
}

/// Accumulates placements for one sheet. The three emit helpers mirror the
/// merge styles the report format uses.
#[derive(Debug)]
pub struct PlanBuilder {
    kind: SheetKind,
    name: String,
    cells: Vec<PlannedCell>,
}

impl PlanBuilder {
    pub fn new(kind: SheetKind, name: impl Into<String>) -> Self {
        PlanBuilder {
            kind,
            name: name.into(),
            cells: Vec::new(),
        }
    }

    fn push(
        &mut self,
        row: u32,
        col: u16,
        span: u16,
        bold: bool,
        align: Align,
        value: CellValue,
    ) {
        self.cells.push(PlannedCell {
            row,
            col,
            span,
            merged: span > 1,
            bold,
            align,
            value,
        });
    }

    pub fn merge_bold_center(&mut self, row: u32, col: u16, span: u16, value: impl Into<CellValue>) {
        self.push(row, col, span, true, Align::Center, value.into());
    }

    pub fn merge_bold_left(&mut self, row: u32, col: u16, span: u16, value: impl Into<CellValue>) {
        self.push(row, col, span, true, Align::Left, value.into());
    }

    pub fn merge(&mut self, row: u32, col: u16, span: u16, value: impl Into<CellValue>) {
        self.push(row, col, span, false, Align::Left, value.into());
    }

    /// Plain unmerged cell, used by the data dumps.
    pub fn cell(&mut self, row: u32, col: u16, value: impl Into<CellValue>) {
        self.push(row, col, 1, false, Align::Left, value.into());
    }

    /// Bold unmerged header cell.
    pub fn header_cell(&mut self, row: u32, col: u16, value: impl Into<CellValue>) {
        self.push(row, col, 1, true, Align::Center, value.into());
    }

    pub fn finish(self) -> CellPlan {
        CellPlan {
            kind: self.kind,
            name: self.name,
            cells: self.cells,
        }
    }
}
