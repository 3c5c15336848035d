//! # Random Number Generation Infrastructure
//!
//! This module provides the explicitly owned, seeded random source used by
//! the walk generator. There is no process-wide generator: every walk owns
//! its own [`WalkRng`], so independent walks never contend on shared state.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a fixed seed always yields the same step sequence
//! - **Explicit absence**: only `None` selects a time-derived seed; `Some(0)`
//!   is an ordinary seed
//! - **Efficiency**: zero-allocation batch operations via `&mut [i64]` slices
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling
//! ("initialise", "randomise", "behaviour").
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_core::rng::WalkRng;
//!
//! // Create a seeded RNG for reproducible walks
//! let mut rng = WalkRng::from_seed(12345);
//!
//! // Draw a single step in [-3, 3]
//! let step = rng.gen_step(3).unwrap();
//! assert!((-3..=3).contains(&step));
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0_i64; 1000];
//! rng.fill_steps(&mut buffer, 3).unwrap();
//! ```
//!
//! ## Algorithm Stability
//!
//! The underlying generator is `rand::rngs::StdRng`. Its algorithm is only
//! guaranteed stable within a `rand` minor release, so seeded output is
//! reproducible for a given lockfile rather than across dependency upgrades.

mod prng;

// Public re-exports
pub use prng::WalkRng;
