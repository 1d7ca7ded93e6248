use super::*;
use std::collections::HashMap;

/// Always answers with the same index and records every bound it was asked for
struct FixedSource {
    pick: fn(usize) -> usize,
    bounds: Vec<usize>,
}

impl FixedSource {
    fn lowest() -> Self {
        Self {
            pick: |_| 0,
            bounds: Vec::new(),
        }
    }

    fn highest() -> Self {
        Self {
            pick: |upper| upper,
            bounds: Vec::new(),
        }
    }
}

impl RandomSource for FixedSource {
    fn index_through(&mut self, upper: usize) -> usize {
        self.bounds.push(upper);
        (self.pick)(upper)
    }
}

struct UnusedSource;

impl RandomSource for UnusedSource {
    fn index_through(&mut self, _upper: usize) -> usize {
        panic!("source must not be consulted");
    }
}

/// Chi-squared statistic of observed counts against a uniform expectation
fn chi_squared(counts: &HashMap<Vec<char>, usize>, outcomes: usize, trials: usize) -> f64 {
    let expected = trials as f64 / outcomes as f64;
    let observed: f64 = counts
        .values()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // Outcomes that never showed up still contribute
    let missing = outcomes.saturating_sub(counts.len()) as f64;
    observed + missing * expected
}

// Critical value for 5 degrees of freedom at p = 0.001
const CHI_SQUARED_CRITICAL_DF5: f64 = 20.515;
const TRIALS: usize = 60_000;

fn tally(mut shuffle_once: impl FnMut(&mut [char])) -> HashMap<Vec<char>, usize> {
    let mut counts = HashMap::new();
    for _ in 0..TRIALS {
        let mut items = ['A', 'B', 'C'];
        shuffle_once(&mut items[..]);
        *counts.entry(items.to_vec()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_empty_slice_is_noop() {
    let mut items: Vec<u32> = Vec::new();
    shuffle(&mut items, &mut UnusedSource);
    assert!(items.is_empty());
}

#[test]
fn test_single_element_is_noop() {
    let mut items = vec!["only"];
    shuffle(&mut items, &mut UnusedSource);
    assert_eq!(items, vec!["only"]);
}

#[test]
fn test_lowest_index_stub_trace() {
    // swap(4,0), swap(3,0), swap(2,0), swap(1,0)
    let mut items = [1, 2, 3, 4, 5];
    let mut source = FixedSource::lowest();
    shuffle(&mut items, &mut source);

    assert_eq!(items, [2, 3, 4, 5, 1]);
    assert_eq!(source.bounds, vec![4, 3, 2, 1]);
}

#[test]
fn test_highest_index_stub_leaves_order() {
    let mut items = [1, 2, 3, 4, 5];
    let mut source = FixedSource::highest();
    shuffle(&mut items, &mut source);

    assert_eq!(items, [1, 2, 3, 4, 5]);
    assert_eq!(source.bounds, vec![4, 3, 2, 1]);
}

#[test]
fn test_unit_interval_zero_matches_lowest_stub() {
    let mut items = [1, 2, 3, 4, 5];
    shuffle(&mut items, &mut UnitIntervalSource::new(|| 0.0));
    assert_eq!(items, [2, 3, 4, 5, 1]);
}

#[test]
fn test_unit_interval_scaling() {
    let mut source = UnitIntervalSource::new(|| 0.5);
    assert_eq!(source.index_through(3), 2);
    assert_eq!(source.index_through(0), 0);

    let mut near_one = UnitIntervalSource::new(|| 0.999_999);
    assert_eq!(near_one.index_through(9), 9);
}

#[test]
fn test_unit_interval_clamps_out_of_range_draws() {
    let mut too_big = UnitIntervalSource::new(|| 1.0);
    assert_eq!(too_big.index_through(4), 4);

    let mut negative = UnitIntervalSource::new(|| -0.25);
    assert_eq!(negative.index_through(4), 0);

    let mut nan = UnitIntervalSource::new(|| f64::NAN);
    assert_eq!(nan.index_through(4), 0);
}

#[test]
fn test_result_is_permutation() {
    let mut source = RngSource::seeded(7);
    for n in 0..40 {
        // Repeated values check multiplicities, not just membership
        let original: Vec<u32> = (0..n).map(|i| i / 3).collect();
        let mut items = original.clone();
        shuffle(&mut items, &mut source);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original, "n = {}", n);
    }
}

#[test]
fn test_same_seed_reproduces_order() {
    let mut first: Vec<u32> = (0..20).collect();
    let mut second = first.clone();

    shuffle_seeded(&mut first, 42);
    shuffle_seeded(&mut second, 42);

    assert_eq!(first, second);
}

#[test]
fn test_shuffle_reorders_large_input() {
    let original: Vec<u32> = (0..100).collect();
    let mut items = original.clone();
    shuffle_seeded(&mut items, 3);
    assert_ne!(items, original);
}

#[test]
fn test_source_can_be_lent_by_reference() {
    let mut rng = RngSource::seeded(11);
    let mut lent = &mut rng;
    let mut items = [1, 2, 3];
    shuffle(&mut items, &mut lent);
    shuffle(&mut items, &mut rng);

    let mut sorted = items;
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 2, 3]);
}

#[test]
fn test_permutations_are_uniform() {
    let mut source = RngSource::seeded(2024);
    let counts = tally(|items| shuffle(items, &mut source));

    assert_eq!(counts.len(), 6, "every permutation of three must appear");
    let stat = chi_squared(&counts, 6, TRIALS);
    assert!(
        stat < CHI_SQUARED_CRITICAL_DF5,
        "chi-squared {} rejects uniformity: {:?}",
        stat,
        counts
    );
}

#[test]
fn test_uniformity_check_rejects_exclusive_upper_bound() {
    // Drawing from 0..pivot instead of 0..=pivot only yields cyclic orders
    let mut source = RngSource::seeded(2024);
    let counts = tally(|items| {
        for pivot in (1..items.len()).rev() {
            let partner = source.index_through(pivot - 1);
            items.swap(pivot, partner);
        }
    });

    assert_eq!(counts.len(), 2);
    assert!(chi_squared(&counts, 6, TRIALS) > CHI_SQUARED_CRITICAL_DF5);
}

#[test]
fn test_uniformity_check_rejects_full_range_draws() {
    // Drawing from the whole slice at every step gives n^n paths over n! orders
    let mut source = RngSource::seeded(2024);
    let counts = tally(|items| {
        let last = items.len() - 1;
        for pivot in 0..items.len() {
            let partner = source.index_through(last);
            items.swap(pivot, partner);
        }
    });

    assert!(chi_squared(&counts, 6, TRIALS) > CHI_SQUARED_CRITICAL_DF5);
}
