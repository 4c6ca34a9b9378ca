//! Pharmacy directory loading from CSV.

use std::path::Path;

use rx_model::PharmacyDirectory;
use tracing::debug;

use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

const NPI_COLUMN: &str = "npi";
const CHAIN_COLUMN: &str = "chain";

/// Reads every `*.csv` file in `dir` into one directory.
///
/// Files are applied in filename order; a later row for an NPI replaces an
/// earlier one.
pub fn read_pharmacies(dir: &Path) -> Result<PharmacyDirectory> {
    let mut directory = PharmacyDirectory::new();
    for path in list_csv_files(dir)? {
        read_pharmacy_file(&path, &mut directory)?;
    }
    Ok(directory)
}

/// Reads one pharmacy CSV into `directory`, returning the number of rows read.
///
/// The header row must contain `npi` and `chain`; other columns are ignored.
pub fn read_pharmacy_file(path: &Path, directory: &mut PharmacyDirectory) -> Result<usize> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();
    let column_index = |column: &'static str| {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| IngestError::MissingColumn {
                column,
                path: path.to_path_buf(),
            })
    };
    let npi_index = column_index(NPI_COLUMN)?;
    let chain_index = column_index(CHAIN_COLUMN)?;

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let (Some(npi), Some(chain)) = (record.get(npi_index), record.get(chain_index)) else {
            continue;
        };
        directory.insert(npi, chain);
        rows += 1;
    }

    debug!(path = %path.display(), rows, "pharmacy file loaded");
    Ok(rows)
}
