//! Report pipeline with explicit stages.
//!
//! 1. **Ingest**: load pharmacies, claims and reverts from the input directory
//! 2. **Compute**: run each requested aggregator over the snapshot
//! 3. **Output**: write each computed report as JSON
//!
//! Aggregators are independent; each one builds its own reversal index.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rx_core::{chain_revenue, compute_metrics, rank_quantities, recommend_top_chains};
use rx_ingest::{InputSnapshot, load_input};
use rx_report::{ReportKind, write_report};
use tracing::{debug, info, info_span};

use crate::types::{InputCounts, ReportSet, RunResult, WrittenReport};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub kinds: Vec<ReportKind>,
    pub top_chains: usize,
    pub dry_run: bool,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input_dir: &Path) -> Result<InputSnapshot> {
    let span = info_span!("ingest", input_dir = %input_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let snapshot = load_input(input_dir)
        .with_context(|| format!("load input from {}", input_dir.display()))?;
    info!(
        claim_count = snapshot.claims.len(),
        revert_count = snapshot.reverts.len(),
        pharmacy_count = snapshot.pharmacies.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(snapshot)
}

// ============================================================================
// Stage 2: Compute
// ============================================================================

pub fn compute(snapshot: &InputSnapshot, kinds: &[ReportKind], top_chains: usize) -> ReportSet {
    let mut reports = ReportSet::default();
    for &kind in kinds {
        let span = info_span!("compute", report = %kind);
        let _guard = span.enter();
        let start = Instant::now();
        match kind {
            ReportKind::Metrics => {
                reports.metrics = Some(compute_metrics(&snapshot.claims, &snapshot.reverts));
            }
            ReportKind::MostPrescribed => {
                reports.most_prescribed =
                    Some(rank_quantities(&snapshot.claims, &snapshot.reverts));
            }
            ReportKind::Recommendations => {
                reports.recommendations = Some(recommend_top_chains(
                    &snapshot.claims,
                    &snapshot.reverts,
                    &snapshot.pharmacies,
                    top_chains,
                ));
            }
            ReportKind::Revenue => {
                reports.revenue = Some(chain_revenue(
                    &snapshot.claims,
                    &snapshot.reverts,
                    &snapshot.pharmacies,
                ));
            }
        }
        debug!(
            rows = reports.row_count(kind).unwrap_or(0),
            duration_ms = start.elapsed().as_millis(),
            "report computed"
        );
    }
    reports
}

// ============================================================================
// Stage 3: Output
// ============================================================================

pub fn output(output_dir: &Path, reports: &ReportSet) -> Result<Vec<WrittenReport>> {
    let span = info_span!("output", output_dir = %output_dir.display());
    let _guard = span.enter();
    let mut written = Vec::new();
    for kind in ReportKind::ALL {
        let path = match kind {
            ReportKind::Metrics => reports
                .metrics
                .as_deref()
                .map(|rows| write_report(output_dir, kind, rows)),
            ReportKind::MostPrescribed => reports
                .most_prescribed
                .as_deref()
                .map(|rows| write_report(output_dir, kind, rows)),
            ReportKind::Recommendations => reports
                .recommendations
                .as_deref()
                .map(|rows| write_report(output_dir, kind, rows)),
            ReportKind::Revenue => reports
                .revenue
                .as_deref()
                .map(|rows| write_report(output_dir, kind, rows)),
        };
        let Some(path) = path else {
            continue;
        };
        let path = path.with_context(|| format!("write {kind} report"))?;
        written.push(WrittenReport {
            kind,
            path,
            rows: reports.row_count(kind).unwrap_or(0),
        });
    }
    Ok(written)
}

/// Runs ingest, compute and (unless dry-run) output.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let snapshot = ingest(&config.input_dir)?;
    let reports = compute(&snapshot, &config.kinds, config.top_chains);
    let written = if config.dry_run {
        info!("dry run, no reports written");
        Vec::new()
    } else {
        output(&config.output_dir, &reports)?
    };
    Ok(RunResult {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        counts: InputCounts {
            pharmacies: snapshot.pharmacies.len(),
            claims: snapshot.claims.len(),
            reverts: snapshot.reverts.len(),
        },
        reports,
        written,
    })
}
