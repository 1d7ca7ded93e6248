use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplier of uniformly distributed indices for the shuffler
pub trait RandomSource {
    /// Return an integer drawn uniformly from `0..=upper`
    fn index_through(&mut self, upper: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index_through(&mut self, upper: usize) -> usize {
        (**self).index_through(upper)
    }
}

/// Adapter over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed always yields the same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_through(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }
}

/// Adapter over a generator of reals in `[0, 1)`.
///
/// Scales and floors each draw: `floor(x * (upper + 1))`. Values at or above
/// 1.0 are clamped to `upper`, negatives and NaN to 0.
pub struct UnitIntervalSource<F> {
    next_unit: F,
}

impl<F: FnMut() -> f64> UnitIntervalSource<F> {
    pub fn new(next_unit: F) -> Self {
        Self { next_unit }
    }
}

impl<F: FnMut() -> f64> RandomSource for UnitIntervalSource<F> {
    fn index_through(&mut self, upper: usize) -> usize {
        let x = (self.next_unit)();
        let scaled = (x * (upper as f64 + 1.0)).floor();
        // `as` saturates: NaN and negatives become 0
        (scaled as usize).min(upper)
    }
}
