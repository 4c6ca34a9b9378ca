//! Data model for pharmacy claim aggregation.
//!
//! Source records ([`Claim`], [`Revert`]) and the pharmacy chain directory
//! are produced by ingestion; the report rows ([`MetricRecord`],
//! [`QuantityRanking`], [`ChainRecommendation`], [`ChainRevenue`]) are
//! produced by the aggregators and serialized as-is.

pub mod claim;
pub mod pharmacy;
pub mod report;

pub use claim::{Claim, Revert};
pub use pharmacy::{PharmacyDirectory, UNKNOWN_CHAIN};
pub use report::{ChainPrice, ChainRecommendation, ChainRevenue, MetricRecord, QuantityRanking};
