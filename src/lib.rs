pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod io;
pub mod labels;
pub mod layout;
pub mod visualization;

pub use catalog::{VariableCatalog, VariableGroup};
pub use config::{LayoutConfig, Spacers};
pub use context::{ModelMetadata, ReportContext};
pub use error::ReportError;
pub use io::ReportWriter;
pub use labels::{LabelTable, Locale, Namespace};
pub use layout::{build_report, CellPlan, CellValue, RenderedReport, SheetKind};
