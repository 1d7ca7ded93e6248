mod source;

#[cfg(test)]
mod tests;

pub use source::{RandomSource, RngSource, UnitIntervalSource};

/// Shuffle `items` in place into a uniformly random order.
///
/// Fisher-Yates, walking the pivot from the last index down to 1 and drawing
/// the swap partner from the closed range `0..=pivot`. Every one of the `n!`
/// orderings is equally likely as long as `source` is uniform.
///
/// Empty and single-element slices are left untouched and never consult
/// `source`.
///
/// # Panics
/// If `source` returns an index above the requested upper bound.
pub fn shuffle<T, S>(items: &mut [T], source: &mut S)
where
    S: RandomSource + ?Sized,
{
    for pivot in (1..items.len()).rev() {
        let partner = source.index_through(pivot);
        items.swap(pivot, partner);
    }
}

/// Shuffle with a fresh ChaCha8 generator seeded from `seed`.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    shuffle(items, &mut RngSource::seeded(seed));
}
