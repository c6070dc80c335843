mod preview;

pub use preview::{format_report_overview, format_summary_preview, print_report_preview};
