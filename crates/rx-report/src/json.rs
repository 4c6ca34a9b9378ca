//! JSON report writing.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::{ReportError, Result};

const INDENT: &[u8] = b"    ";

/// The reports the tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportKind {
    Metrics,
    MostPrescribed,
    Recommendations,
    Revenue,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Metrics,
        ReportKind::MostPrescribed,
        ReportKind::Recommendations,
        ReportKind::Revenue,
    ];

    /// Output file name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Metrics => "metrics.json",
            ReportKind::MostPrescribed => "most_prescribed.json",
            ReportKind::Recommendations => "recommendations.json",
            ReportKind::Revenue => "revenue.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Metrics => "metrics",
            ReportKind::MostPrescribed => "most prescribed",
            ReportKind::Recommendations => "recommendations",
            ReportKind::Revenue => "revenue",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Writes `rows` to `output_dir/<kind file name>` and returns the path.
pub fn write_report<T: Serialize>(
    output_dir: &Path,
    kind: ReportKind,
    rows: &[T],
) -> Result<PathBuf> {
    let path = output_dir.join(kind.file_name());
    write_report_json(&path, rows)?;
    info!(report = %kind, path = %path.display(), rows = rows.len(), "report written");
    Ok(path)
}

/// Serializes `rows` as a four-space indented JSON array at `path`.
///
/// Parent directories are created as needed; an existing file is replaced.
pub fn write_report_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let io_error = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    rows.serialize(&mut serializer)
        .map_err(|source| ReportError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_error)?;
    Ok(())
}
