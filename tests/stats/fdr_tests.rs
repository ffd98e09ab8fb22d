use approx::assert_abs_diff_eq;
use itpu::Error;
use itpu::stats::fdr_bh;
use ndarray::{Array1, array};

#[test]
fn hand_computed_q_values() {
    let p = array![0.01, 0.04, 0.03, 0.005];
    let (rejected, q) = fdr_bh(p.view(), 0.05).unwrap();

    // Sorted: 0.005 (rank 1), 0.01 (2), 0.03 (3), 0.04 (4).
    // Step-down: q4 = 0.04, q3 = min(0.04, 0.04) = 0.04,
    // q2 = min(0.02, 0.04) = 0.02, q1 = min(0.02, 0.02) = 0.02.
    assert_abs_diff_eq!(q[0], 0.02, epsilon = 1e-12);
    assert_abs_diff_eq!(q[1], 0.04, epsilon = 1e-12);
    assert_abs_diff_eq!(q[2], 0.04, epsilon = 1e-12);
    assert_abs_diff_eq!(q[3], 0.02, epsilon = 1e-12);
    assert!(rejected.iter().all(|&r| r));
}

#[test]
fn stricter_alpha_never_rejects_more() {
    let p = array![0.001, 0.008, 0.039, 0.041, 0.3, 0.9];
    let (rej_strict, _) = fdr_bh(p.view(), 0.01).unwrap();
    let (rej_loose, _) = fdr_bh(p.view(), 0.05).unwrap();
    let n_strict = rej_strict.iter().filter(|&&r| r).count();
    let n_loose = rej_loose.iter().filter(|&&r| r).count();
    assert!(n_strict <= n_loose);
    // Every rejection at alpha = 0.01 also stands at alpha = 0.05.
    for (&s, &l) in rej_strict.iter().zip(rej_loose.iter()) {
        assert!(!s || l);
    }
}

#[test]
fn input_order_does_not_change_decisions() {
    let p = array![0.2, 0.005, 0.07, 0.04, 0.55];
    let perm = [4usize, 1, 3, 0, 2];
    let p_shuffled = Array1::from_iter(perm.iter().map(|&i| p[i]));

    let (rej_a, q_a) = fdr_bh(p.view(), 0.05).unwrap();
    let (rej_b, q_b) = fdr_bh(p_shuffled.view(), 0.05).unwrap();

    for (pos, &orig_idx) in perm.iter().enumerate() {
        assert_eq!(rej_b[pos], rej_a[orig_idx]);
        assert_abs_diff_eq!(q_b[pos], q_a[orig_idx], epsilon = 1e-12);
    }
}

#[test]
fn q_values_are_monotone_in_sorted_order() {
    let p = array![0.9, 0.1, 0.02, 0.4, 0.02, 0.75];
    let (_, q) = fdr_bh(p.view(), 0.05).unwrap();
    let mut pairs: Vec<(f64, f64)> = p.iter().cloned().zip(q.iter().cloned()).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for w in pairs.windows(2) {
        assert!(w[0].1 <= w[1].1 + 1e-12);
    }
}

#[test]
fn rejects_out_of_range_p_values() {
    assert_eq!(
        fdr_bh(array![0.1, -0.2].view(), 0.05).unwrap_err(),
        Error::InvalidPValue(-0.2)
    );
    assert_eq!(
        fdr_bh(array![0.1, 1.2].view(), 0.05).unwrap_err(),
        Error::InvalidPValue(1.2)
    );
}

#[test]
fn empty_input_is_fine() {
    let p = Array1::<f64>::zeros(0);
    let (rejected, q) = fdr_bh(p.view(), 0.05).unwrap();
    assert!(rejected.is_empty());
    assert!(q.is_empty());
}
