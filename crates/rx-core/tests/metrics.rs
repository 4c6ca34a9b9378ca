//! Tests for per (npi, ndc) fill metrics.

mod common;

use common::{claim, revert};
use rx_core::compute_metrics;
use rx_model::MetricRecord;

fn find<'a>(records: &'a [MetricRecord], npi: &str, ndc: &str) -> &'a MetricRecord {
    records
        .iter()
        .find(|r| r.npi == npi && r.ndc == ndc)
        .expect("metric record present")
}

#[test]
fn single_claim_without_reverts() {
    let claims = vec![claim("c1", "p1", "d1", 10.0, 30.0)];

    let metrics = compute_metrics(&claims, &[]);

    assert_eq!(
        metrics,
        vec![MetricRecord {
            npi: "p1".to_string(),
            ndc: "d1".to_string(),
            fills: 1,
            reverted: 0,
            avg_price: 10.0,
            total_price: 10.0,
        }]
    );
}

#[test]
fn reverted_claim_keeps_price_totals() {
    let claims = vec![claim("c1", "p1", "d1", 10.0, 30.0)];
    let reverts = vec![revert("r1", "c1")];

    let metrics = compute_metrics(&claims, &reverts);

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].fills, 1);
    assert_eq!(metrics[0].reverted, 1);
    assert_eq!(metrics[0].total_price, 10.0);
    assert_eq!(metrics[0].avg_price, 10.0);
}

#[test]
fn groups_by_npi_and_ndc() {
    let claims = vec![
        claim("c1", "p1", "d1", 10.0, 30.0),
        claim("c2", "p1", "d1", 20.0, 30.0),
        claim("c3", "p1", "d2", 5.0, 10.0),
        claim("c4", "p2", "d1", 7.0, 10.0),
    ];
    let reverts = vec![revert("r1", "c2"), revert("r2", "c2"), revert("r3", "missing")];

    let metrics = compute_metrics(&claims, &reverts);

    assert_eq!(metrics.len(), 3);
    let p1_d1 = find(&metrics, "p1", "d1");
    assert_eq!(p1_d1.fills, 2);
    assert_eq!(p1_d1.reverted, 1);
    assert_eq!(p1_d1.total_price, 30.0);
    assert_eq!(p1_d1.avg_price, 15.0);
    assert_eq!(find(&metrics, "p1", "d2").fills, 1);
    assert_eq!(find(&metrics, "p2", "d1").reverted, 0);
}

#[test]
fn empty_claims_give_no_records() {
    let reverts = vec![revert("r1", "c1")];
    assert!(compute_metrics(&[], &reverts).is_empty());
}

#[test]
fn records_are_ordered_by_key() {
    let claims = vec![
        claim("c1", "p2", "d1", 1.0, 1.0),
        claim("c2", "p1", "d2", 1.0, 1.0),
        claim("c3", "p1", "d1", 1.0, 1.0),
    ];

    let keys: Vec<(String, String)> = compute_metrics(&claims, &[])
        .into_iter()
        .map(|r| (r.npi, r.ndc))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("p1".to_string(), "d1".to_string()),
            ("p1".to_string(), "d2".to_string()),
            ("p2".to_string(), "d1".to_string()),
        ]
    );
}
