//! # Walk Generator
//!
//! Produces a bounded integer random walk: an index sequence `0..length`
//! and a value sequence where each value is the previous one plus a step
//! drawn uniformly from `[-volatility, volatility]`.
//!
//! ## Module Structure
//!
//! - [`request`]: [`WalkRequest`] parameters, defaults and validation
//! - [`result`]: [`WalkResult`] materialised output
//! - [`generator`]: [`generate_walk`] entry point
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_core::walk::{generate_walk, WalkRequest};
//!
//! // Direct call
//! let walk = generate_walk(5, 1, 10, Some(42)).unwrap();
//! assert_eq!(walk.indices(), &[0, 1, 2, 3, 4]);
//!
//! // Through a request with defaults (volatility = 3, start_value = 50)
//! let walk = WalkRequest::new(100).seed(7).generate().unwrap();
//! assert_eq!(walk.len(), 100);
//! ```

pub mod generator;
pub mod request;
pub mod result;

pub use generator::generate_walk;
pub use request::{WalkRequest, DEFAULT_START_VALUE, DEFAULT_VOLATILITY};
pub use result::WalkResult;
