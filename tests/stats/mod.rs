mod fdr_tests;
mod permutation_tests;
