//! Fill metrics per (prescriber, drug) pair.

use std::collections::BTreeMap;

use rx_model::{Claim, MetricRecord, Revert};
use tracing::debug;

use crate::reversal::ReversalIndex;

#[derive(Debug, Default)]
struct MetricAccumulator {
    fills: u64,
    reverted: u64,
    total_price: f64,
}

/// Groups claims by `(npi, ndc)` and counts fills, reversals and price.
///
/// Reverted claims still count as fills and still contribute their price to
/// `total_price`; they only raise the `reverted` counter. Every claim counts,
/// whether or not its NPI belongs to a known pharmacy. Records are returned
/// in ascending `(npi, ndc)` order.
pub fn compute_metrics(claims: &[Claim], reverts: &[Revert]) -> Vec<MetricRecord> {
    let reversals = ReversalIndex::from_reverts(reverts);
    let mut groups: BTreeMap<(&str, &str), MetricAccumulator> = BTreeMap::new();

    for claim in claims {
        let entry = groups
            .entry((claim.npi.as_str(), claim.ndc.as_str()))
            .or_default();
        entry.fills += 1;
        entry.total_price += claim.price;
        if reversals.contains_claim(claim) {
            entry.reverted += 1;
        }
    }

    debug!(
        claim_count = claims.len(),
        reversal_count = reversals.len(),
        group_count = groups.len(),
        "metrics computed"
    );

    groups
        .into_iter()
        .map(|((npi, ndc), acc)| MetricRecord {
            npi: npi.to_string(),
            ndc: ndc.to_string(),
            fills: acc.fills,
            reverted: acc.reverted,
            avg_price: if acc.fills == 0 {
                0.0
            } else {
                acc.total_price / acc.fills as f64
            },
            total_price: acc.total_price,
        })
        .collect()
}
