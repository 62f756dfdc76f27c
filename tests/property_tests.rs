//! Property-based tests for trialboard
//!
//! - Decoder shape, column identity and order preservation
//! - Running-best monotonicity
//! - Plot-height bounds
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use trialboard::chart::{plot_height, running_best, SortKey};
use trialboard::experiment::{DimensionRecord, ObservationRecord};
use trialboard::{decode, ChartConfig};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Value grid: `rows` observations with `cols` values each, plus targets
fn arb_grid() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..6, 0usize..20).prop_flat_map(|(cols, rows)| {
        (
            proptest::collection::vec(proptest::collection::vec(-1e6f64..1e6, cols), rows),
            proptest::collection::vec(-1e3f64..1e3, rows),
        )
    })
}

fn build(values: &[Vec<f64>], targets: &[f64]) -> (Vec<ObservationRecord>, Vec<DimensionRecord>) {
    let cols = values.first().map_or(0, Vec::len);
    let dims: Vec<DimensionRecord> = (0..cols)
        .map(|j| DimensionRecord::linear(format!("d{j}")))
        .collect();
    let observations = values
        .iter()
        .zip(targets)
        .enumerate()
        .map(|(i, (row, &target))| {
            row.iter()
                .zip(&dims)
                .fold(ObservationRecord::builder(i as u64, 1), |b, (&v, d)| {
                    b.value(d.name(), v)
                })
                .target(target)
                .build()
        })
        .collect();
    (observations, dims)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: X is rows x cols and y has one entry per row
    #[test]
    fn prop_decode_shape((values, targets) in arb_grid()) {
        let (observations, dims) = build(&values, &targets);
        let decoded = decode(&observations, &dims).unwrap();

        prop_assert_eq!(decoded.x.rows(), observations.len());
        prop_assert_eq!(decoded.y.len(), observations.len());
        if !observations.is_empty() {
            prop_assert_eq!(decoded.x.cols(), dims.len());
        }
    }

    /// Property: column j is dimension j's values in input order
    #[test]
    fn prop_decode_column_identity((values, targets) in arb_grid()) {
        let (observations, dims) = build(&values, &targets);
        let decoded = decode(&observations, &dims).unwrap();

        for j in 0..decoded.x.cols() {
            let expected: Vec<f64> = values.iter().map(|row| row[j]).collect();
            prop_assert_eq!(decoded.x.column(j), expected);
        }
        prop_assert_eq!(decoded.y, targets);
    }

    /// Property: permuting observations permutes rows and targets identically
    #[test]
    fn prop_decode_order_preserving(
        (values, targets) in arb_grid(),
        seed in any::<u64>()
    ) {
        let (observations, dims) = build(&values, &targets);
        let n = observations.len();

        // Deterministic rotation as the permutation
        let shift = if n == 0 { 0 } else { (seed as usize) % n };
        let mut rotated = observations.clone();
        rotated.rotate_left(shift);

        let original = decode(&observations, &dims).unwrap();
        let permuted = decode(&rotated, &dims).unwrap();

        for i in 0..n {
            let src = (i + shift) % n;
            prop_assert_eq!(permuted.x.row(i), original.x.row(src));
            prop_assert_eq!(permuted.y[i], original.y[src]);
        }
    }

    /// Property: dropping a dimension value fails the whole call
    #[test]
    fn prop_decode_missing_value_fails(
        (values, targets) in arb_grid(),
        victim in any::<prop::sample::Index>()
    ) {
        prop_assume!(!values.is_empty());
        let (mut observations, dims) = build(&values, &targets);
        let i = victim.index(observations.len());

        let mut stripped = ObservationRecord::builder(observations[i].observation_id(), 1)
            .target(targets[i]);
        for d in dims.iter().skip(1) {
            stripped = stripped.value(d.name(), 0.0);
        }
        observations[i] = stripped.build();

        prop_assert!(decode(&observations, &dims).is_err());
    }

    /// Property: running best is non-decreasing and equals the prefix max
    #[test]
    fn prop_running_best(y in proptest::collection::vec(-1e9f64..1e9, 1..200)) {
        let best = running_best(&y);
        prop_assert_eq!(best.len(), y.len());

        for i in 0..y.len() {
            if i > 0 {
                prop_assert!(best[i] >= best[i - 1]);
            }
            let prefix_max = y[..=i].iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(best[i], prefix_max);
        }
    }

    /// Property: plot height never exceeds the default
    #[test]
    fn prop_plot_height_bounded(n in 0usize..2000) {
        let config = ChartConfig::default();
        let height = plot_height(n, &config);
        prop_assert!(height <= config.default_plot_height);
        let plots = u32::try_from(n).unwrap() + 1;
        prop_assert_eq!(height, (700 / plots).min(225));
    }

    /// Property: only "observation" selects id ordering
    #[test]
    fn prop_sort_key_normalization(s in "\\PC*") {
        let key = SortKey::from_request(Some(&s));
        if s == "observation" {
            prop_assert_eq!(key, SortKey::Observation);
        } else {
            prop_assert_eq!(key, SortKey::Target);
        }
    }
}
