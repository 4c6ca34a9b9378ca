//! Shared record builders for rx-core tests.

#![allow(dead_code)]

use rx_model::{Claim, PharmacyDirectory, Revert};

pub fn claim(id: &str, npi: &str, ndc: &str, price: f64, quantity: f64) -> Claim {
    Claim {
        id: id.to_string(),
        npi: npi.to_string(),
        ndc: ndc.to_string(),
        price,
        quantity,
        timestamp: "2024-03-28T05:48:38".to_string(),
    }
}

pub fn revert(id: &str, claim_id: &str) -> Revert {
    Revert {
        id: id.to_string(),
        claim_id: claim_id.to_string(),
        timestamp: "2024-04-02T08:00:00".to_string(),
    }
}

pub fn directory(entries: &[(&str, &str)]) -> PharmacyDirectory {
    entries.iter().copied().collect()
}
