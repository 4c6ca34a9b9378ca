//! Set of reverted claim identifiers.

use std::collections::HashSet;

use rx_model::{Claim, Revert};

/// Claim ids referenced by at least one revert.
///
/// Membership is by claim id only; the revert is never checked against the
/// claim's NPI or NDC.
#[derive(Debug, Clone, Default)]
pub struct ReversalIndex<'a> {
    claim_ids: HashSet<&'a str>,
}

impl<'a> ReversalIndex<'a> {
    /// Builds the index; duplicate claim ids collapse to one entry.
    pub fn from_reverts(reverts: &'a [Revert]) -> Self {
        Self {
            claim_ids: reverts.iter().map(|r| r.claim_id.as_str()).collect(),
        }
    }

    pub fn is_reverted(&self, claim_id: &str) -> bool {
        self.claim_ids.contains(claim_id)
    }

    pub fn contains_claim(&self, claim: &Claim) -> bool {
        self.is_reverted(&claim.id)
    }

    /// Number of distinct reverted claim ids.
    pub fn len(&self) -> usize {
        self.claim_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claim_ids.is_empty()
    }
}
