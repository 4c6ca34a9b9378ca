//! Most commonly prescribed quantities per drug.

use std::collections::{BTreeMap, HashMap};

use rx_model::{Claim, QuantityRanking, Revert};
use tracing::debug;

use crate::reversal::ReversalIndex;

/// Frequency counter that remembers first-seen order.
///
/// Quantities are grouped by numeric equality, so `0.0` and `-0.0` share one
/// entry.
#[derive(Debug, Clone, Default)]
pub struct QuantityCounter {
    entries: Vec<(f64, u64)>,
    positions: HashMap<u64, usize>,
}

impl QuantityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, quantity: f64) {
        let key = quantity_key(quantity);
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((quantity, 1));
            }
        }
    }

    /// Number of times `quantity` was added.
    pub fn count(&self, quantity: f64) -> u64 {
        self.positions
            .get(&quantity_key(quantity))
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Distinct quantities with their counts, most frequent first.
    ///
    /// Equal counts keep the order in which the quantities were first added.
    pub fn most_common(&self) -> Vec<(f64, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<f64> for QuantityCounter {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for quantity in iter {
            self.add(quantity);
        }
    }
}

fn quantity_key(quantity: f64) -> u64 {
    // -0.0 == 0.0
    if quantity == 0.0 {
        0.0f64.to_bits()
    } else {
        quantity.to_bits()
    }
}

/// Ranks the distinct quantities of non-reverted claims for each drug.
///
/// Reverted claims are skipped entirely. Drugs are returned in ascending NDC
/// order; a drug whose claims were all reverted has no entry.
pub fn rank_quantities(claims: &[Claim], reverts: &[Revert]) -> Vec<QuantityRanking> {
    let reversals = ReversalIndex::from_reverts(reverts);
    let mut counters: BTreeMap<&str, QuantityCounter> = BTreeMap::new();

    for claim in claims {
        if reversals.contains_claim(claim) {
            continue;
        }
        counters
            .entry(claim.ndc.as_str())
            .or_default()
            .add(claim.quantity);
    }

    debug!(
        claim_count = claims.len(),
        ndc_count = counters.len(),
        "quantities ranked"
    );

    counters
        .into_iter()
        .map(|(ndc, counter)| QuantityRanking {
            ndc: ndc.to_string(),
            most_prescribed_quantity: counter
                .most_common()
                .into_iter()
                .map(|(quantity, _)| quantity)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_keeps_first_seen_order_for_ties() {
        let mut counter = QuantityCounter::new();
        counter.extend([3.0, 5.0, 5.0, 3.0, 90.0]);
        assert_eq!(counter.most_common(), vec![(3.0, 2), (5.0, 2), (90.0, 1)]);
    }

    #[test]
    fn counter_groups_signed_zero() {
        let mut counter = QuantityCounter::new();
        counter.extend([0.0, -0.0]);
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.count(0.0), 2);
    }

    #[test]
    fn counter_orders_by_frequency() {
        let mut counter = QuantityCounter::new();
        counter.extend([1.0, 2.0, 2.0]);
        assert_eq!(counter.most_common()[0], (2.0, 2));
        assert_eq!(counter.count(7.0), 0);
    }
}
