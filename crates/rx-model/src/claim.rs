//! Claim and revert source records.

use serde::{Deserialize, Serialize};

/// A single drug fill event submitted by a pharmacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique claim identifier, referenced by [`Revert::claim_id`].
    pub id: String,
    /// Prescriber / pharmacy location identifier.
    pub npi: String,
    /// Drug product code.
    pub ndc: String,
    pub price: f64,
    pub quantity: f64,
    pub timestamp: String,
}

/// Reversal of a previously submitted claim.
///
/// `claim_id` is not checked against the claim set; a revert that points at
/// no known claim has no effect on any report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revert {
    pub id: String,
    pub claim_id: String,
    pub timestamp: String,
}
