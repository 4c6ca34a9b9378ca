//! Cheapest pharmacy chains per drug.

use std::collections::BTreeMap;

use rx_model::{ChainPrice, ChainRecommendation, Claim, PharmacyDirectory, Revert};
use tracing::debug;

use crate::reversal::ReversalIndex;

/// Number of chains kept per drug by [`recommend_chains`].
pub const MAX_RECOMMENDED_CHAINS: usize = 2;

/// Running sum and count of the price samples for one chain.
#[derive(Debug, Default)]
struct PriceSamples {
    sum: f64,
    count: u64,
}

impl PriceSamples {
    fn push(&mut self, price: f64) {
        self.sum += price;
        self.count += 1;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Recommends the [`MAX_RECOMMENDED_CHAINS`] cheapest chains for each drug.
pub fn recommend_chains(
    claims: &[Claim],
    reverts: &[Revert],
    directory: &PharmacyDirectory,
) -> Vec<ChainRecommendation> {
    recommend_top_chains(claims, reverts, directory, MAX_RECOMMENDED_CHAINS)
}

/// Recommends up to `limit` chains per drug, ascending by average price.
///
/// Each claim adds its price as a sample for `(ndc, chain)`. A reverted claim
/// additionally adds the negated price, so the pair nets to zero but still
/// counts as two samples in the average. Claims whose NPI is not in the
/// directory are grouped under [`rx_model::UNKNOWN_CHAIN`].
///
/// Chains with equal averages are ordered by name. Drugs are returned in
/// ascending NDC order.
pub fn recommend_top_chains(
    claims: &[Claim],
    reverts: &[Revert],
    directory: &PharmacyDirectory,
    limit: usize,
) -> Vec<ChainRecommendation> {
    let reversals = ReversalIndex::from_reverts(reverts);
    let mut by_ndc: BTreeMap<&str, BTreeMap<&str, PriceSamples>> = BTreeMap::new();

    for claim in claims {
        let chain = directory.chain_for(&claim.npi);
        let samples = by_ndc
            .entry(claim.ndc.as_str())
            .or_default()
            .entry(chain)
            .or_default();
        samples.push(claim.price);
        if reversals.contains_claim(claim) {
            samples.push(-claim.price);
        }
    }

    debug!(
        claim_count = claims.len(),
        ndc_count = by_ndc.len(),
        limit,
        "chain recommendations computed"
    );

    by_ndc
        .into_iter()
        .map(|(ndc, chains)| {
            let mut ranked: Vec<ChainPrice> = chains
                .into_iter()
                .map(|(name, samples)| ChainPrice {
                    name: name.to_string(),
                    avg_price: samples.average(),
                })
                .collect();
            // Stable: chains arrive in name order, which breaks price ties.
            ranked.sort_by(|a, b| a.avg_price.total_cmp(&b.avg_price));
            ranked.truncate(limit);
            ChainRecommendation {
                ndc: ndc.to_string(),
                chain: ranked,
            }
        })
        .collect()
}
