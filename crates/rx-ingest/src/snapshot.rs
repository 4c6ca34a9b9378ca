//! Loading of a complete input snapshot.

use std::path::Path;

use rx_model::{Claim, PharmacyDirectory, Revert};
use tracing::info;

use crate::error::Result;
use crate::pharmacy::read_pharmacies;
use crate::records::{read_claims, read_reverts};

/// Sub-directory holding pharmacy CSV files.
pub const PHARMACIES_DIR: &str = "pharmacies";
/// Sub-directory holding claim JSON files.
pub const CLAIMS_DIR: &str = "claims";
/// Sub-directory holding revert JSON files.
pub const REVERTS_DIR: &str = "reverts";

/// The three source collections, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub pharmacies: PharmacyDirectory,
    pub claims: Vec<Claim>,
    pub reverts: Vec<Revert>,
}

/// Loads pharmacies, claims and reverts from their sub-directories of `root`.
pub fn load_input(root: &Path) -> Result<InputSnapshot> {
    let pharmacies = read_pharmacies(&root.join(PHARMACIES_DIR))?;
    let claims = read_claims(&root.join(CLAIMS_DIR))?;
    let reverts = read_reverts(&root.join(REVERTS_DIR))?;

    info!(
        pharmacy_count = pharmacies.len(),
        claim_count = claims.len(),
        revert_count = reverts.len(),
        "input loaded"
    );

    Ok(InputSnapshot {
        pharmacies,
        claims,
        reverts,
    })
}
