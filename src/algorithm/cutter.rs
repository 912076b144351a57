//! Decision procedure for the straight-line cut search
//!
//! Tries each axis in a fixed order: find the occupancy bisection, advance it
//! to a concrete cut boundary, search for a congruence-satisfying rotation,
//! and relabel the mirrored half on the first hit.

use crate::io::configuration::QUARTER_TURN_TRIALS;
use crate::io::error::Result;
use crate::spatial::axis::Axis;
use crate::spatial::board::Board;
use num_traits::PrimInt;

/// Search options for the cut decision procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutConfig {
    /// Try quarter-turn rotations in addition to plain reflection
    pub search_rotations: bool,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            search_rotations: true,
        }
    }
}

impl CutConfig {
    const fn turn_limit(self) -> usize {
        if self.search_rotations {
            QUARTER_TURN_TRIALS
        } else {
            1
        }
    }
}

/// Owns a board and decides whether one straight cut splits it in two
#[derive(Debug, Clone)]
pub struct Cutter {
    board: Board,
    config: CutConfig,
}

impl Cutter {
    // Columns are tried first; the first axis with an admissible cut wins.
    const AXIS_ORDER: [Axis; 2] = [Axis::Column, Axis::Row];

    /// Wrap an existing board
    pub const fn new(board: Board, config: CutConfig) -> Self {
        Self { board, config }
    }

    /// Build the board from a flat row-major buffer and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`crate::CutError::InvalidDimensions`] when `width` is zero
    /// or the buffer length is not an exact multiple of `width`.
    pub fn from_values<T: PrimInt>(values: &[T], width: usize, config: CutConfig) -> Result<Self> {
        Ok(Self::new(Board::from_values(values, width)?, config))
    }

    /// Search both axes for an admissible cut and apply the first one found
    ///
    /// Returns whether a cut was applied. The board is left untouched when
    /// no axis yields both an exact bisection and a matching orientation.
    pub fn cut(&mut self) -> bool {
        for axis in Self::AXIS_ORDER {
            let Some(bisection) = self.board.find_bisection(axis) else {
                continue;
            };
            // the bisection marks the last cross-section of the first half;
            // the cut boundary is one past it
            let line = bisection.next();
            if let Some(times) = self.board.best_rotation(line, self.config.turn_limit()) {
                self.board.apply_split(line, times);
                return true;
            }
        }
        false
    }

    /// Read access to the board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Surrender the board to the caller
    pub fn into_board(self) -> Board {
        self.board
    }
}
