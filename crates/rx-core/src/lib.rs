//! In-memory aggregation over a claim snapshot.
//!
//! Every report is a pure function of the claim, revert and (where needed)
//! pharmacy directory collections. Each builds its own [`ReversalIndex`], so
//! the reports share no state and may be computed in any order.

pub mod metrics;
pub mod quantity;
pub mod recommend;
pub mod reversal;
pub mod revenue;

pub use metrics::compute_metrics;
pub use quantity::{QuantityCounter, rank_quantities};
pub use recommend::{MAX_RECOMMENDED_CHAINS, recommend_chains, recommend_top_chains};
pub use reversal::ReversalIndex;
pub use revenue::chain_revenue;
