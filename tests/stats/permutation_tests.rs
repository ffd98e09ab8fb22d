use crate::test_helpers::{SeedableRng, StdRng, correlated_pair, pearson};
use itpu::stats::perm_test;

#[test]
fn strong_dependence_is_significant() {
    let (x, y) = correlated_pair(2000, 0.8, 0);
    let mut rng = StdRng::seed_from_u64(1);
    let result = perm_test(pearson, x.view(), y.view(), 199, &mut rng);

    assert_eq!(result.null.len(), 199);
    assert!(result.observed > 0.7);
    assert!(result.p > 0.0 && result.p <= 1.0);
    assert!(result.p < 0.05, "p = {} should be significant", result.p);
    // Nothing in the null should come close to the observed correlation.
    assert!((result.p - 1.0 / 200.0).abs() < 1e-12);
}

#[test]
fn constant_statistic_gives_p_of_one() {
    let (x, y) = correlated_pair(200, 0.0, 2);
    let mut rng = StdRng::seed_from_u64(3);
    let result = perm_test(|_, _| 0.5, x.view(), y.view(), 99, &mut rng);
    assert_eq!(result.observed, 0.5);
    assert!(result.null.iter().all(|&v| v == 0.5));
    assert_eq!(result.p, 1.0);
}

#[test]
fn independent_pair_is_insignificant() {
    // p is roughly uniform under the null, so any single seed can land low by
    // chance; require a clear majority of replicates above 0.1 instead.
    let mut clearly_insignificant = 0;
    for seed in 0..5u64 {
        let (x, y) = correlated_pair(2000, 0.0, 10 + seed);
        let mut rng = StdRng::seed_from_u64(100 + seed);
        let result = perm_test(pearson, x.view(), y.view(), 199, &mut rng);
        assert!(result.p >= 1.0 / 200.0 && result.p <= 1.0);
        if result.p > 0.1 {
            clearly_insignificant += 1;
        }
    }
    assert!(
        clearly_insignificant >= 3,
        "only {clearly_insignificant} of 5 independent replicates had p > 0.1"
    );
}

#[test]
fn p_value_respects_continuity_correction_bounds() {
    let (x, y) = correlated_pair(500, 0.0, 4);
    let mut rng = StdRng::seed_from_u64(5);
    let result = perm_test(pearson, x.view(), y.view(), 99, &mut rng);
    // (exceed + 1) / (n_perm + 1) lies on a grid that excludes 0.
    assert!(result.p >= 1.0 / 100.0);
    assert!(result.p <= 1.0);
}

#[test]
fn zero_permutations_is_degenerate_but_defined() {
    let (x, y) = correlated_pair(100, 0.5, 6);
    let mut rng = StdRng::seed_from_u64(7);
    let result = perm_test(pearson, x.view(), y.view(), 0, &mut rng);
    assert_eq!(result.null.len(), 0);
    assert_eq!(result.p, 1.0);
}
