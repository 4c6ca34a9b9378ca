//! Claim and revert loading from JSON arrays.
//!
//! Each source file holds one JSON array of objects. Objects are decoded into
//! drafts with every field optional, then promoted to the model types once
//! the required fields are confirmed present.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rx_model::{Claim, Revert};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::discovery::list_json_files;
use crate::error::{IngestError, Result};

/// Quantity assumed for a claim that does not report one.
const DEFAULT_QUANTITY: f64 = 0.0;

#[derive(Debug, Default, Deserialize)]
struct ClaimDraft {
    id: Option<String>,
    npi: Option<String>,
    ndc: Option<String>,
    price: Option<f64>,
    quantity: Option<f64>,
    timestamp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RevertDraft {
    id: Option<String>,
    claim_id: Option<String>,
    timestamp: Option<String>,
}

/// Names a missing field for one record of a source file.
struct RecordContext<'a> {
    kind: &'static str,
    index: usize,
    path: &'a Path,
}

impl RecordContext<'_> {
    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T> {
        value.ok_or_else(|| IngestError::MissingField {
            kind: self.kind,
            field,
            index: self.index,
            path: self.path.to_path_buf(),
        })
    }
}

impl ClaimDraft {
    fn into_claim(self, context: &RecordContext<'_>) -> Result<Claim> {
        Ok(Claim {
            id: context.require(self.id, "id")?,
            npi: context.require(self.npi, "npi")?,
            ndc: context.require(self.ndc, "ndc")?,
            price: context.require(self.price, "price")?,
            quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
            timestamp: context.require(self.timestamp, "timestamp")?,
        })
    }
}

impl RevertDraft {
    fn into_revert(self, context: &RecordContext<'_>) -> Result<Revert> {
        Ok(Revert {
            id: context.require(self.id, "id")?,
            claim_id: context.require(self.claim_id, "claim_id")?,
            timestamp: context.require(self.timestamp, "timestamp")?,
        })
    }
}

/// Reads every `*.json` claim file in `dir`, in filename order.
pub fn read_claims(dir: &Path) -> Result<Vec<Claim>> {
    let mut claims = Vec::new();
    for path in list_json_files(dir)? {
        claims.extend(read_claim_file(&path)?);
    }
    Ok(claims)
}

/// Reads every `*.json` revert file in `dir`, in filename order.
pub fn read_reverts(dir: &Path) -> Result<Vec<Revert>> {
    let mut reverts = Vec::new();
    for path in list_json_files(dir)? {
        reverts.extend(read_revert_file(&path)?);
    }
    Ok(reverts)
}

/// Reads one JSON array of claims.
///
/// A missing `quantity` defaults to `0.0`; any other missing field rejects
/// the file.
pub fn read_claim_file(path: &Path) -> Result<Vec<Claim>> {
    let drafts: Vec<ClaimDraft> = read_json_array(path)?;
    let claims = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.into_claim(&RecordContext {
                kind: "claim",
                index,
                path,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), records = claims.len(), "claim file loaded");
    Ok(claims)
}

/// Reads one JSON array of reverts.
pub fn read_revert_file(path: &Path) -> Result<Vec<Revert>> {
    let drafts: Vec<RevertDraft> = read_json_array(path)?;
    let reverts = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.into_revert(&RecordContext {
                kind: "revert",
                index,
                path,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), records = reverts.len(), "revert file loaded");
    Ok(reverts)
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}
