//! # walk_core: Bounded Random-Walk Generation
//!
//! ## Layer Role
//!
//! walk_core is the kernel of the workspace, providing:
//! - The walk generator: `generate_walk`, `WalkRequest`, `WalkResult` (`walk`)
//! - An explicitly owned, seeded random source: `WalkRng` (`rng`)
//! - Error types: `WalkError` (`error`)
//!
//! Front-ends such as the `walkgen` CLI call into this crate and render or
//! serialise the result; nothing here performs I/O.
//!
//! ## Usage Examples
//!
//! ```rust
//! use walk_core::{generate_walk, WalkError, WalkRequest};
//!
//! // Five reproducible points starting one step away from 10
//! let walk = generate_walk(5, 1, 10, Some(42)).unwrap();
//! assert_eq!(walk.indices(), &[0, 1, 2, 3, 4]);
//! for pair in walk.values().windows(2) {
//!     assert!((pair[1] - pair[0]).abs() <= 1);
//! }
//!
//! // Defaults: volatility = 3, start_value = 50
//! let walk = WalkRequest::new(10).seed(0).generate().unwrap();
//! assert_eq!(walk.len(), 10);
//!
//! // Non-positive volatility is rejected
//! assert!(matches!(
//!     generate_walk(10, 0, 50, None),
//!     Err(WalkError::InvalidArgument { .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `WalkRequest` and `WalkResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod rng;
pub mod walk;

pub use error::WalkError;
pub use walk::{generate_walk, WalkRequest, WalkResult};
