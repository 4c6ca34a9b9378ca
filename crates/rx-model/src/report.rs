//! Report rows produced by the aggregators.
//!
//! Field order matches the serialized JSON layout of each report.

use serde::{Deserialize, Serialize};

/// Fill metrics for one (prescriber NPI, drug NDC) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub npi: String,
    pub ndc: String,
    /// Number of claims for the pair, reverted or not.
    pub fills: u64,
    /// Number of those claims that were reverted.
    pub reverted: u64,
    /// `total_price / fills`, or `0.0` when there are no fills.
    pub avg_price: f64,
    /// Sum of every claim price for the pair, including reverted claims.
    pub total_price: f64,
}

/// Distinct prescribed quantities for one drug, most frequent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRanking {
    pub ndc: String,
    pub most_prescribed_quantity: Vec<f64>,
}

/// Average price of one chain for a drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainPrice {
    pub name: String,
    pub avg_price: f64,
}

/// Cheapest chains for one drug, ascending by average price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecommendation {
    pub ndc: String,
    pub chain: Vec<ChainPrice>,
}

/// Realized revenue of one chain across all non-reverted claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRevenue {
    pub chain: String,
    pub revenue: f64,
}
