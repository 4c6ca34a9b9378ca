//! Realized revenue per pharmacy chain.

use std::collections::BTreeMap;

use rx_model::{ChainRevenue, Claim, PharmacyDirectory, Revert};
use tracing::debug;

use crate::reversal::ReversalIndex;

/// Sums the price of every non-reverted claim filled at a known chain.
///
/// Unlike the chain recommendations, claims whose NPI is not in the directory
/// are left out. Chains are returned by descending revenue, ties by name.
pub fn chain_revenue(
    claims: &[Claim],
    reverts: &[Revert],
    directory: &PharmacyDirectory,
) -> Vec<ChainRevenue> {
    let reversals = ReversalIndex::from_reverts(reverts);
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for claim in claims {
        let Some(chain) = directory.get(&claim.npi) else {
            continue;
        };
        if reversals.contains_claim(claim) {
            continue;
        }
        *totals.entry(chain).or_insert(0.0) += claim.price;
    }

    debug!(
        claim_count = claims.len(),
        chain_count = totals.len(),
        "chain revenue computed"
    );

    let mut revenues: Vec<ChainRevenue> = totals
        .into_iter()
        .map(|(chain, revenue)| ChainRevenue {
            chain: chain.to_string(),
            revenue,
        })
        .collect();
    revenues.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    revenues
}
