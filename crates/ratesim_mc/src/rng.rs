//! Seeded random number generation for Monte Carlo simulation.
//!
//! [`SimRng`] wraps `rand::StdRng` with explicit seed management: the same
//! seed always produces the same draw sequence, and [`SimRng::for_run`]
//! derives a disjoint, deterministic sub-stream per simulation run for
//! parallel execution. Normal variates come from the Ziggurat sampler in
//! `rand_distr::StandardNormal`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use ratesim_models::DrawSource;

/// Monte Carlo simulation random number generator.
///
/// # Examples
///
/// ```rust
/// use ratesim_mc::SimRng;
///
/// let mut rng1 = SimRng::from_seed(12345);
/// let mut rng2 = SimRng::from_seed(12345);
///
/// // Same seed produces identical sequences.
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// ```
pub struct SimRng {
    inner: StdRng,
    seed: u64,
}

impl SimRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derives the generator for one simulation run.
    ///
    /// The base seed and run index are mixed through a SplitMix64 finaliser,
    /// giving each run a sub-stream that is disjoint from its neighbours and
    /// reproducible without any shared mutable state, which is what parallel
    /// execution requires.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ratesim_mc::SimRng;
    ///
    /// let mut a = SimRng::for_run(42, 0);
    /// let mut b = SimRng::for_run(42, 1);
    /// assert_ne!(a.gen_normal(), b.gen_normal());
    /// ```
    pub fn for_run(base_seed: u64, run_index: u64) -> Self {
        let mut z = base_seed ^ run_index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::from_seed(z ^ (z >> 31))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform values in [0, 1).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl DrawSource for SimRng {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.gen_normal()
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen_uniform()
    }
}
