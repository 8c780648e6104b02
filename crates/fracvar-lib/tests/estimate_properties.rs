//! End-to-end properties of the estimator through the facade.

use approx::assert_abs_diff_eq;
use fracvar_lib::prelude::*;
use fracvar_lib::{BlockAggregator, MAX_BLOCK};

/// Deterministic pseudo-random walk (xorshift) so tests need no RNG crate.
fn random_walk(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let mut price = 100.0;
    let mut low = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    for _ in 0..n {
        let open = price;
        price += next() - 0.5;
        let wick = next() * 0.1;
        low.push(open.min(price) - wick);
        high.push(open.max(price) + wick);
    }
    (low, high)
}

#[test]
fn sigma_is_fixed_for_valid_lengths() {
    for n in [32, 64, 96, 128, 512] {
        let (low, high) = random_walk(n, 7);
        let est = estimate(&low, &high).unwrap();
        assert_eq!(est.sigma, [8, 16, 32], "n = {n}");
    }
}

#[test]
fn dimension_is_exactly_index_plus_one() {
    for seed in 1..20 {
        let (low, high) = random_walk(256, seed);
        let est = estimate(&low, &high).unwrap();
        assert_eq!(est.fractal_dim, est.v_indx + 1.0);
    }
}

#[test]
fn flat_series_raises_math_domain() {
    let flat = vec![42.0; 128];
    let series = PriceSeries::new(&flat, &flat).unwrap();

    let sums = FractalEstimator::new().range_sums(&series).unwrap();
    assert_eq!(sums, [0.0, 0.0, 0.0]);
    assert!(matches!(
        estimate(&flat, &flat),
        Err(FracvarError::MathDomain { .. })
    ));
}

#[test]
fn unit_range_regression_values() {
    let low = vec![0.0; 32];
    let high = vec![1.0; 32];

    let est = estimate(&low, &high).unwrap();
    assert_eq!(est.v_sigma, [4.0, 2.0, 1.0]);
}

#[test]
fn length_mismatch_is_rejected() {
    let (low, _) = random_walk(100, 3);
    let (_, high) = random_walk(101, 3);

    assert_eq!(
        estimate(&low, &high).unwrap_err(),
        FracvarError::LengthMismatch {
            low: 100,
            high: 101
        }
    );
}

#[test]
fn ten_bars_is_dimension_error() {
    let (low, high) = random_walk(10, 5);
    assert!(matches!(
        estimate(&low, &high),
        Err(FracvarError::Dimension { .. })
    ));
}

#[test]
fn monotonic_ramp_baseline() {
    let low: Vec<f64> = (0..128u32).map(f64::from).collect();
    let high: Vec<f64> = low.iter().map(|l| l + 1.0).collect();

    let est = estimate(&low, &high).unwrap();
    // Every block spans exactly its own length, so V_sigma is flat at 128.
    assert_eq!(est.v_sigma, [128.0; 3]);
    assert_abs_diff_eq!(est.fractal_dim, 1.0, epsilon = 1e-12);
}

#[test]
fn random_walk_is_near_brownian() {
    let (low, high) = random_walk(4096, 0x9E37_79B9_7F4A_7C15);
    let est = estimate(&low, &high).unwrap();
    assert!(
        est.fractal_dim > 1.2 && est.fractal_dim < 1.8,
        "fractal_dim = {}",
        est.fractal_dim
    );
}

#[test]
fn trimming_matches_explicit_suffix() {
    let (low, high) = random_walk(200, 11);
    let skip = 200 % MAX_BLOCK;

    let full = estimate(&low, &high).unwrap();
    let suffix = estimate(&low[skip..], &high[skip..]).unwrap();
    assert_eq!(full, suffix);
}

#[test]
fn range_sums_agree_with_block_aggregation() {
    let (low, high) = random_walk(256, 13);
    let series = PriceSeries::new(&low, &high).unwrap();

    let sums = FractalEstimator::global().range_sums(&series).unwrap();
    for (i, &scale) in Scale::all().iter().enumerate() {
        let blocks = BlockAggregator::new(scale).blocks(&series).unwrap();
        assert_eq!(blocks.len(), 256 / scale.rows());
        let total: f64 = blocks.iter().map(|b| b.range()).sum();
        assert_abs_diff_eq!(sums[i], total, epsilon = 1e-9);
    }
}

#[test]
fn input_is_not_mutated() {
    let (low, high) = random_walk(128, 17);
    let (low_copy, high_copy) = (low.clone(), high.clone());

    let _ = estimate(&low, &high).unwrap();
    assert_eq!(low, low_copy);
    assert_eq!(high, high_copy);
}
