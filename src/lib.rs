//! Straight-line cutting of grid shapes into two mirror-congruent pieces
//!
//! The system decides whether one row- or column-aligned cut splits a binary
//! occupancy pattern into two regions holding the same number of filled cells,
//! one region the mirror image of the other up to a quarter-turn rotation,
//! and relabels the mirrored region on success.

#![forbid(unsafe_code)]

/// Cut decision procedure orchestrating the bisection and congruence search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Axis tagging, grid geometry, and board state
pub mod spatial;

pub use io::error::{CutError, Result};
