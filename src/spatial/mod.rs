//! Spatial data structures and grid geometry
//!
//! This module contains spatial-related functionality including:
//! - Axis tagging and cut lines
//! - Reflection and rotation geometry
//! - Board state and occupancy accounting

/// Axis tagging and tagged offsets along an axis
pub mod axis;
/// Board state, occupancy profiles, congruence, and relabeling
pub mod board;
/// Free-standing reflection and rotation geometry
pub mod geometry;

pub use board::Board;
