//! Tests for most-prescribed quantity ranking.

mod common;

use common::{claim, revert};
use rx_core::rank_quantities;

#[test]
fn equal_frequencies_keep_first_seen_order() {
    let claims = vec![
        claim("c1", "p1", "d1", 1.0, 5.0),
        claim("c2", "p1", "d1", 1.0, 3.0),
        claim("c3", "p2", "d1", 1.0, 5.0),
        claim("c4", "p2", "d1", 1.0, 3.0),
    ];

    let rankings = rank_quantities(&claims, &[]);

    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].ndc, "d1");
    assert_eq!(rankings[0].most_prescribed_quantity, vec![5.0, 3.0]);
}

#[test]
fn higher_frequency_ranks_first() {
    let claims = vec![
        claim("c1", "p1", "d1", 1.0, 90.0),
        claim("c2", "p1", "d1", 1.0, 30.0),
        claim("c3", "p1", "d1", 1.0, 30.0),
    ];

    let rankings = rank_quantities(&claims, &[]);

    assert_eq!(rankings[0].most_prescribed_quantity, vec![30.0, 90.0]);
}

#[test]
fn reverted_claims_are_excluded() {
    let claims = vec![
        claim("c1", "p1", "d1", 1.0, 90.0),
        claim("c2", "p1", "d1", 1.0, 30.0),
        claim("c3", "p1", "d2", 1.0, 60.0),
    ];
    let reverts = vec![revert("r1", "c1"), revert("r2", "c3")];

    let rankings = rank_quantities(&claims, &reverts);

    // d2 had only reverted claims, so it has no entry at all
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].ndc, "d1");
    assert_eq!(rankings[0].most_prescribed_quantity, vec![30.0]);
}

#[test]
fn reverted_claim_does_not_shift_tie_order() {
    // Without the revert 90 would be seen first; once reverted, 30 leads.
    let claims = vec![
        claim("c1", "p1", "d1", 1.0, 90.0),
        claim("c2", "p1", "d1", 1.0, 30.0),
        claim("c3", "p1", "d1", 1.0, 90.0),
    ];
    let reverts = vec![revert("r1", "c1")];

    let rankings = rank_quantities(&claims, &reverts);

    assert_eq!(rankings[0].most_prescribed_quantity, vec![30.0, 90.0]);
}

#[test]
fn numerically_equal_quantities_group_together() {
    let claims = vec![
        claim("c1", "p1", "d1", 1.0, 30.0),
        claim("c2", "p1", "d1", 1.0, 15.0),
        claim("c3", "p1", "d1", 1.0, 30.000),
    ];

    let rankings = rank_quantities(&claims, &[]);

    assert_eq!(rankings[0].most_prescribed_quantity, vec![30.0, 15.0]);
}
