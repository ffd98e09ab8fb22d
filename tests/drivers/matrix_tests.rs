use crate::test_helpers::correlated_features;
use approx::assert_abs_diff_eq;
use itpu::Error;
use itpu::estimators::{
    HistOptions, KsgOptions, MiMethod, mutual_info_matrix, mutual_info_pairs,
};

fn hist_method(bins: usize) -> MiMethod {
    MiMethod::Hist(HistOptions {
        bins,
        ..Default::default()
    })
}

#[test]
fn full_matrix_is_symmetric_with_zero_diagonal() {
    let data = correlated_features(4000, 6, 0.55, 0);
    let m = mutual_info_matrix(data.view(), &hist_method(64), None).unwrap();
    assert_eq!(m.dim(), (6, 6));
    for i in 0..6 {
        assert_eq!(m[(i, i)], 0.0);
        for j in 0..6 {
            assert_abs_diff_eq!(m[(i, j)], m[(j, i)], epsilon = 1e-12);
        }
    }
    // Shared latent factor, so off-diagonal MI is positive.
    assert!(m[(0, 1)] > 0.0);
}

#[test]
fn pair_subset_matches_full_matrix() {
    let data = correlated_features(4000, 5, 0.55, 1);
    let method = hist_method(32);
    let full = mutual_info_matrix(data.view(), &method, None).unwrap();
    let sel = [(0, 1), (1, 3), (2, 4)];
    let subset = mutual_info_pairs(data.view(), &sel, &method, None).unwrap();
    assert_eq!(subset.len(), sel.len());
    for &(i, j) in &sel {
        assert_abs_diff_eq!(subset[&(i, j)], full[(i, j)], epsilon = 1e-12);
    }
}

#[test]
fn ksg_matrix_works_on_small_data() {
    let data = correlated_features(500, 3, 0.6, 2);
    let method = MiMethod::Ksg(KsgOptions {
        k: 4,
        ..Default::default()
    });
    let m = mutual_info_matrix(data.view(), &method, None).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert!(m[(i, j)] >= 0.0 && m[(i, j)].is_finite());
            assert_abs_diff_eq!(m[(i, j)], m[(j, i)], epsilon = 1e-12);
        }
    }
}

#[test]
fn global_mask_drops_rows_before_any_pair() {
    let data = correlated_features(3000, 4, 0.6, 3);
    let mut mask = vec![true; 3000];
    for flag in mask.iter_mut().take(500) {
        *flag = false;
    }
    let m = mutual_info_matrix(data.view(), &hist_method(32), Some(&mask)).unwrap();
    assert!(m.iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn shape_errors() {
    let data = correlated_features(100, 3, 0.5, 4);
    assert_eq!(
        mutual_info_matrix(data.view(), &hist_method(16), Some(&[true; 7])).unwrap_err(),
        Error::MaskLengthMismatch { mask: 7, data: 100 }
    );
    assert_eq!(
        mutual_info_pairs(data.view(), &[(0, 3)], &hist_method(16), None).unwrap_err(),
        Error::PairIndexOutOfBounds { index: 3, ncols: 3 }
    );
}
