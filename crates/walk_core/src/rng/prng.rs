//! Pseudo-random number generator wrapper for walk generation.
//!
//! This module provides [`WalkRng`], a seeded PRNG wrapper that draws
//! bounded integer steps with reproducible output.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::WalkError;

/// Counter mixed into time-derived seeds so that two unseeded generators
/// created within the same clock tick still receive distinct seeds.
static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// SplitMix64 finaliser.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives a seed from the wall clock and the process-wide seed sequence.
fn time_derived_seed() -> u64 {
    // A clock set before the epoch still yields a usable (if constant) value;
    // the sequence counter keeps successive seeds distinct.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    splitmix64(nanos ^ splitmix64(sequence))
}

/// Random walk step generator.
///
/// Provides seeded, reproducible draws of integer steps uniformly
/// distributed over a closed interval `[-bound, bound]`.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
///
/// // Single step
/// let step = rng.gen_step(1).unwrap();
/// assert!((-1..=1).contains(&step));
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0_i64; 100];
/// rng.fill_steps(&mut buffer, 5).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct WalkRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl WalkRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_core::rng::WalkRng;
    ///
    /// let mut rng1 = WalkRng::from_seed(12345);
    /// let mut rng2 = WalkRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_step(10).unwrap(), rng2.gen_step(10).unwrap());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG instance from a time-derived seed.
    ///
    /// Successive calls always produce different seeds, even within the
    /// same clock tick. The chosen seed is available through [`seed`](Self::seed)
    /// so that the run can be replayed.
    pub fn from_time() -> Self {
        Self::from_seed(time_derived_seed())
    }

    /// Creates a new RNG instance from an optional seed.
    ///
    /// `None` selects a time-derived seed; any `Some` value, zero included,
    /// is used as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_core::rng::WalkRng;
    ///
    /// let rng = WalkRng::from_optional_seed(Some(0));
    /// assert_eq!(rng.seed(), 0);
    /// ```
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_time(),
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// This is useful for logging and replaying unseeded runs.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single step uniformly from the closed interval `[-bound, bound]`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidArgument`] if `bound <= 0`. No random
    /// state is consumed in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_core::rng::WalkRng;
    ///
    /// let mut rng = WalkRng::from_seed(7);
    /// for _ in 0..100 {
    ///     let step = rng.gen_step(2).unwrap();
    ///     assert!((-2..=2).contains(&step));
    /// }
    /// assert!(rng.gen_step(-1).is_err());
    /// ```
    #[inline]
    pub fn gen_step(&mut self, bound: i64) -> Result<i64, WalkError> {
        Ok(step_distribution(bound)?.sample(&mut self.inner))
    }

    /// Fills the buffer with steps drawn uniformly from `[-bound, bound]`.
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    /// Produces the same draws, in order, as repeated [`gen_step`](Self::gen_step)
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidArgument`] if `bound <= 0`, leaving the
    /// buffer untouched.
    #[inline]
    pub fn fill_steps(&mut self, buffer: &mut [i64], bound: i64) -> Result<(), WalkError> {
        let steps = step_distribution(bound)?;
        for value in buffer.iter_mut() {
            *value = steps.sample(&mut self.inner);
        }
        Ok(())
    }
}

/// Uniform distribution over `[-bound, bound]`, rejecting non-positive bounds.
fn step_distribution(bound: i64) -> Result<Uniform<i64>, WalkError> {
    if bound <= 0 {
        return Err(WalkError::invalid_argument(
            "bound",
            format!("must be positive, got {}", bound),
        ));
    }
    Ok(Uniform::new_inclusive(-bound, bound))
}
