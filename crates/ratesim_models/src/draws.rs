//! Explicit random-draw abstraction.
//!
//! Models never reach for ambient global randomness: every path generation
//! call receives a [`DrawSource`] and consumes draws from it in order. This
//! keeps simulations reproducible (fix the source, fix the path) and lets the
//! engine hand each parallel run its own disjoint sub-stream.
//!
//! [`FixedDraws`] replays a predefined sequence and exists for deterministic
//! golden-value verification.

/// A sequential source of random draws.
///
/// One path generation call consumes exactly `N - 1` draws, in order. The
/// model decides per step whether it needs a standard-normal or a
/// uniform-[0, 1) variate via [`Innovation`].
pub trait DrawSource {
    /// Returns the next standard normal variate (mean 0, standard deviation 1).
    fn next_normal(&mut self) -> f64;

    /// Returns the next uniform variate in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

/// The innovation distribution a model consumes per discretisation step.
///
/// The continuous-time Vasicek and CIR processes both call for standard
/// normal innovations. The uniform variant exists to reproduce legacy
/// discretisations that fed uniform-[0, 1) draws into the CIR diffusion term;
/// note that uniform draws have positive mean, so the simulated drift is
/// biased upward relative to the true process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Innovation {
    /// Standard normal innovation (mean 0, variance 1).
    #[default]
    StandardNormal,
    /// Uniform-[0, 1) innovation (legacy CIR discretisation).
    Uniform,
}

impl Innovation {
    /// Samples one draw of this distribution from the source.
    #[inline]
    pub fn sample(self, draws: &mut impl DrawSource) -> f64 {
        match self {
            Innovation::StandardNormal => draws.next_normal(),
            Innovation::Uniform => draws.next_uniform(),
        }
    }
}

/// Deterministic draw source replaying a fixed sequence.
///
/// Both `next_normal` and `next_uniform` pop from the same sequence, so a
/// test can script the exact shocks a path will see regardless of the
/// innovation distribution.
///
/// # Panics
///
/// Panics when the sequence is exhausted; a test supplying too few draws is
/// a test bug, not a runtime condition.
///
/// # Examples
///
/// ```
/// use ratesim_models::{DrawSource, FixedDraws};
///
/// let mut draws = FixedDraws::new(vec![0.1, -0.2]);
/// assert_eq!(draws.next_normal(), 0.1);
/// assert_eq!(draws.next_uniform(), -0.2);
/// assert_eq!(draws.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct FixedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedDraws {
    /// Creates a source replaying `values` in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Returns how many draws are left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    fn next(&mut self) -> f64 {
        let value = *self
            .values
            .get(self.cursor)
            .expect("FixedDraws exhausted: test supplied too few draws");
        self.cursor += 1;
        value
    }
}

impl DrawSource for FixedDraws {
    fn next_normal(&mut self) -> f64 {
        self.next()
    }

    fn next_uniform(&mut self) -> f64 {
        self.next()
    }
}
