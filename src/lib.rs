//! # Gapscan
//!
//! Gap detection over sparse, strictly increasing index sequences.
//!
//! A *mask* is a strictly increasing sequence of indices marking which
//! positions of a larger index space are present. [`extract`] walks the
//! mask's maximal runs of consecutive values and collects the indices that
//! fall in the gaps between runs, recording the boundary pair it crossed for
//! each gap. [`runs`] exposes the run segmentation on its own.
//!
//! ## Quick Start
//!
//! ```
//! use gapscan::extract;
//!
//! let report = extract(&[1, 3, 4, 6, 7, 11, 12]).unwrap();
//!
//! // Indices the scan collects from the gaps between runs
//! assert_eq!(report.missing, vec![2, 5, 8, 9, 10]);
//!
//! // One boundary pair per gap the scan crossed
//! assert_eq!(report.boundaries[0].cursor, 2);
//! assert_eq!(report.boundaries[0].next_start, 3);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Standard library support; enables `std::error::Error`
//!   on error types
//! - `cli` - Build the `gapscan` binary (implies `std`)
//! - `serde` - Enable serialization/deserialization support

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

pub mod gaps;
pub mod runs;

pub use gaps::{extract, ExtractError, GapBoundary, GapReport};
pub use runs::runs;
