//! Board state: occupancy accounting, bisection search, congruence, relabeling
//!
//! The board owns its flat row-major buffer for its whole lifetime. Queries
//! are read-only; [`Board::apply_split`] is the sole mutator and relabels
//! filled cells of the mirrored half so the two pieces are distinguishable.

use crate::io::error::{CutError, Result};
use crate::spatial::axis::{Axis, AxisIndex};
use crate::spatial::geometry::{Extents, HalfScan, Position, Square};
use num_traits::PrimInt;

/// Occupancy state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    /// No filled material
    Empty = 0,
    /// Filled cell belonging to the piece that keeps its label
    Primary = 1,
    /// Filled cell relabeled to the mirrored piece by a successful split
    Secondary = 2,
}

impl Cell {
    /// Numeric label as stored in caller-facing buffers
    pub const fn value(self) -> u8 {
        self as u8
    }

    // Labels outside the known set count as empty, matching the occupancy
    // test used everywhere else.
    const fn from_value(value: u8) -> Self {
        match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            _ => Self::Empty,
        }
    }
}

/// Rectangular occupancy grid owning its flat row-major buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    /// Build a board from a flat row-major buffer of numeric cell labels
    ///
    /// Accepts any primitive integer type; `0` is empty and `1` filled.
    /// Dimensions are fixed for the lifetime of the board.
    ///
    /// # Errors
    ///
    /// Returns [`CutError::InvalidDimensions`] when `width` is zero or the
    /// buffer length is not an exact multiple of `width`.
    pub fn from_values<T: PrimInt>(values: &[T], width: usize) -> Result<Self> {
        if width == 0 || !values.len().is_multiple_of(width) {
            return Err(CutError::InvalidDimensions {
                length: values.len(),
                width,
            });
        }
        let cells: Vec<Cell> = values
            .iter()
            .map(|value| Cell::from_value(value.to_u8().unwrap_or(0)))
            .collect();
        let height = cells.len() / width;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid limits for the geometry routines
    pub const fn extents(&self) -> Extents {
        Extents {
            width: self.width,
            height: self.height,
        }
    }

    /// Number of cross-sections along an axis
    pub const fn limit(&self, axis: Axis) -> usize {
        self.extents().limit(axis)
    }

    /// The cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Caller-facing numeric buffer, row-major
    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.value()).collect()
    }

    /// Count of filled cells under either label
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Cell at a position, `None` outside the grid
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !self.extents().contains(position) {
            return None;
        }
        let index = position.row as usize * self.width + position.column as usize;
        self.cells.get(index).copied()
    }

    /// Whether the cell at a position is inside the grid and filled
    ///
    /// Only [`Cell::Primary`] counts: relabeled cells no longer take part in
    /// occupancy accounting or congruence matching.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Primary)
    }

    fn set_cell(&mut self, position: Position, cell: Cell) {
        if !self.extents().contains(position) {
            return;
        }
        let index = position.row as usize * self.width + position.column as usize;
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Cumulative occupied-cell counts across the cross-sections of an axis
    ///
    /// Entry `k` counts every occupied cell in cross-sections `0..=k`, so the
    /// sequence is non-decreasing and its last entry is the occupied total.
    pub fn occupancy_profile(&self, axis: Axis) -> Vec<usize> {
        let mut total = 0;
        (0..self.limit(axis))
            .map(|section| {
                total += self.cross_section_count(AxisIndex::new(section, axis));
                total
            })
            .collect()
    }

    fn cross_section_count(&self, section: AxisIndex) -> usize {
        (0..self.limit(section.axis.opposite()))
            .filter(|&k| {
                let position = match section.axis {
                    Axis::Row => Position::new(section.value as i32, k as i32),
                    Axis::Column => Position::new(k as i32, section.value as i32),
                };
                self.is_occupied(position)
            })
            .count()
    }

    /// Cross-section index where the occupancy count reaches exactly half
    ///
    /// `None` when the occupied total is odd, or when no profile prefix hits
    /// the exact half (a profile step can jump past it). Otherwise the
    /// smallest matching index; the cut boundary is one past it.
    pub fn find_bisection(&self, axis: Axis) -> Option<AxisIndex> {
        let profile = self.occupancy_profile(axis);
        let total = profile.last().copied().unwrap_or(0);
        if total % 2 != 0 {
            return None;
        }
        let half = total / 2;
        // binary search over the monotone profile, landing on the first match
        let index = profile.partition_point(|&count| count < half);
        (profile.get(index) == Some(&half)).then(|| AxisIndex::new(index, axis))
    }

    /// Position in the mirrored half that `position` must match, if any
    ///
    /// With a nonzero turn count the position is first rotated inside the
    /// square anchored against the cut (skipped when the square is a single
    /// cell and there is no room to turn), then mirrored across the cut.
    /// `None` when the result falls outside the grid; callers treat that as
    /// no constraint rather than a mismatch.
    pub fn mirror_counterpart(
        &self,
        position: Position,
        cut: AxisIndex,
        times: usize,
    ) -> Option<Position> {
        let square = Square::anchored(cut, self.extents());
        let turned = if times == 0 || square.side <= 1 {
            position
        } else {
            position.rotated_clockwise(square, times)
        };
        let reflected = turned.reflected(cut);
        self.extents().contains(reflected).then_some(reflected)
    }

    /// Whether the scanned half matches its mirror image at a turn count
    ///
    /// Every scan position whose counterpart exists must agree with it on
    /// occupancy; any mismatch short-circuits to false.
    pub fn congruent(&self, cut: AxisIndex, times: usize) -> bool {
        HalfScan::new(cut, self.extents()).all(|position| {
            self.mirror_counterpart(position, cut, times)
                .is_none_or(|counterpart| {
                    self.is_occupied(position) == self.is_occupied(counterpart)
                })
        })
    }

    /// First turn count in `0..turn_limit` whose mirror image matches
    pub fn best_rotation(&self, cut: AxisIndex, turn_limit: usize) -> Option<usize> {
        (0..turn_limit).find(|&times| self.congruent(cut, times))
    }

    /// Relabel the mirrored half after a successful congruence match
    ///
    /// Re-walks the same scan set as the congruence test and turns every
    /// occupied counterpart [`Cell::Secondary`]. Cells only move from
    /// [`Cell::Primary`] to [`Cell::Secondary`], so the filled-cell count is
    /// conserved. Callers invoke this at most once, with a cut and turn
    /// count that passed [`Board::congruent`].
    pub fn apply_split(&mut self, cut: AxisIndex, times: usize) {
        for position in HalfScan::new(cut, self.extents()) {
            if let Some(counterpart) = self.mirror_counterpart(position, cut, times) {
                if self.is_occupied(counterpart) {
                    self.set_cell(counterpart, Cell::Secondary);
                }
            }
        }
    }
}
