//! Report file output.
//!
//! Every report is written as one JSON array of row objects, indented with
//! four spaces, into a file named after its [`ReportKind`].

mod error;
mod json;

pub use error::{ReportError, Result};
pub use json::{ReportKind, write_report, write_report_json};
