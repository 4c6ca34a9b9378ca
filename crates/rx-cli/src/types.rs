use std::path::PathBuf;

use rx_model::{ChainRecommendation, ChainRevenue, MetricRecord, QuantityRanking};
use rx_report::ReportKind;

/// Size of the loaded input snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCounts {
    pub pharmacies: usize,
    pub claims: usize,
    pub reverts: usize,
}

/// Computed reports; a report that was not requested is `None`.
#[derive(Debug, Default)]
pub struct ReportSet {
    pub metrics: Option<Vec<MetricRecord>>,
    pub most_prescribed: Option<Vec<QuantityRanking>>,
    pub recommendations: Option<Vec<ChainRecommendation>>,
    pub revenue: Option<Vec<ChainRevenue>>,
}

impl ReportSet {
    /// Row count of `kind`, if it was computed.
    pub fn row_count(&self, kind: ReportKind) -> Option<usize> {
        match kind {
            ReportKind::Metrics => self.metrics.as_ref().map(Vec::len),
            ReportKind::MostPrescribed => self.most_prescribed.as_ref().map(Vec::len),
            ReportKind::Recommendations => self.recommendations.as_ref().map(Vec::len),
            ReportKind::Revenue => self.revenue.as_ref().map(Vec::len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub kind: ReportKind,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub struct RunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub counts: InputCounts,
    pub reports: ReportSet,
    /// Empty on a dry run.
    pub written: Vec<WrittenReport>,
}
