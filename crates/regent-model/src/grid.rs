// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Row-Major Board Geometry
//!
//! `Grid` is the pure geometry of an N×N board: encoding and decoding
//! row-major cell indices, the on-board predicate, stepping a cell by a
//! slope vector, and generating the lines the safety checks scan. It
//! holds no placement state; every operation is a function of the board
//! size alone.
//!
//! Out-of-bounds results are `None` throughout. Signed coordinate
//! arithmetic stays inside this module; the typed indices crossing the
//! API boundary are always on-board.

use crate::index::{CellIndex, ColIndex, RowIndex};
use crate::vector::SlopeVector;
use smallvec::SmallVec;

/// An ordered sequence of board cells along a line, nearest cell first.
///
/// Lines never exceed the board dimension, so a small inline buffer
/// avoids heap allocation for typical board sizes.
pub type Line = SmallVec<[CellIndex; 16]>;

/// The pure row-major geometry of an N×N board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates the geometry of an N×N board.
    #[inline]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Returns the board dimension N.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells, N².
    #[inline]
    pub const fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Returns `true` if the signed coordinate pair lies on the board.
    #[inline]
    pub const fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Encodes a coordinate pair as a row-major cell index, or `None` if
    /// either coordinate is outside the board.
    #[inline]
    pub fn cell(&self, row: RowIndex, col: ColIndex) -> Option<CellIndex> {
        if row.get() < self.size && col.get() < self.size {
            Some(CellIndex::new(row.get() * self.size + col.get()))
        } else {
            None
        }
    }

    /// Encodes a signed coordinate pair, bounds-checked.
    #[inline]
    fn cell_signed(&self, row: i64, col: i64) -> Option<CellIndex> {
        if self.contains(row, col) {
            Some(CellIndex::new(row as usize * self.size + col as usize))
        } else {
            None
        }
    }

    /// Returns the row of a cell index.
    ///
    /// The cell must belong to this grid; use [`Grid::try_decode`] for
    /// indices of unknown provenance.
    #[inline]
    pub fn row_of(&self, cell: CellIndex) -> RowIndex {
        debug_assert!(
            cell.get() < self.num_cells(),
            "called `Grid::row_of` with cell index out of bounds: the board has {} cells but the index is {}",
            self.num_cells(),
            cell.get()
        );
        RowIndex::new(cell.get() / self.size)
    }

    /// Returns the column of a cell index.
    ///
    /// The cell must belong to this grid; use [`Grid::try_decode`] for
    /// indices of unknown provenance.
    #[inline]
    pub fn col_of(&self, cell: CellIndex) -> ColIndex {
        debug_assert!(
            cell.get() < self.num_cells(),
            "called `Grid::col_of` with cell index out of bounds: the board has {} cells but the index is {}",
            self.num_cells(),
            cell.get()
        );
        ColIndex::new(cell.get() % self.size)
    }

    /// Decodes a cell index into its coordinate pair, or `None` if the
    /// index does not belong to this grid.
    #[inline]
    pub fn try_decode(&self, cell: CellIndex) -> Option<(RowIndex, ColIndex)> {
        if self.size == 0 || cell.get() >= self.num_cells() {
            return None;
        }
        Some((
            RowIndex::new(cell.get() / self.size),
            ColIndex::new(cell.get() % self.size),
        ))
    }

    /// Steps a cell forwards by a slope vector (`dx` along columns, `dy`
    /// along rows), or `None` if the result leaves the board.
    #[inline]
    pub fn step(&self, cell: CellIndex, vector: SlopeVector) -> Option<CellIndex> {
        let (row, col) = self.try_decode(cell)?;
        self.cell_signed(row.get() as i64 + vector.dy(), col.get() as i64 + vector.dx())
    }

    /// Steps a cell backwards by a slope vector, or `None` if the result
    /// leaves the board.
    #[inline]
    pub fn step_back(&self, cell: CellIndex, vector: SlopeVector) -> Option<CellIndex> {
        let (row, col) = self.try_decode(cell)?;
        self.cell_signed(row.get() as i64 - vector.dy(), col.get() as i64 - vector.dx())
    }

    /// Returns the portion of the line through `(row, col)` with the
    /// given slope that lies towards lower columns: the cells reached by
    /// repeatedly stepping backwards by the vector, nearest cell first.
    ///
    /// The origin cell itself is not included. Since `dx >= 1` for every
    /// slope vector, the returned cells all lie in columns strictly left
    /// of the origin — the columns already filled during a left-to-right
    /// column-by-column search.
    pub fn line_before(&self, row: RowIndex, col: ColIndex, vector: SlopeVector) -> Line {
        let mut line = Line::new();
        let Some(mut current) = self.cell(row, col) else {
            return line;
        };
        while let Some(next) = self.step_back(current, vector) {
            line.push(next);
            current = next;
        }
        line
    }

    /// Returns the full horizontal line of a row: the cells at every
    /// column `0..size`, in column order.
    pub fn row_line(&self, row: RowIndex) -> Line {
        (0..self.size)
            .filter_map(|col| self.cell(row, ColIndex::new(col)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::SlopeVector;

    fn r(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn c(i: usize) -> ColIndex {
        ColIndex::new(i)
    }

    fn cells(indices: &[usize]) -> Line {
        indices.iter().map(|&i| CellIndex::new(i)).collect()
    }

    #[test]
    fn test_cell_encoding_and_decoding_round_trip() {
        let grid = Grid::new(4);
        assert_eq!(grid.num_cells(), 16);

        for row in 0..4 {
            for col in 0..4 {
                let cell = grid.cell(r(row), c(col)).unwrap();
                assert_eq!(cell.get(), row * 4 + col);
                assert_eq!(grid.row_of(cell), r(row));
                assert_eq!(grid.col_of(cell), c(col));
                assert_eq!(grid.try_decode(cell), Some((r(row), c(col))));
            }
        }
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let grid = Grid::new(4);
        assert_eq!(grid.cell(r(4), c(0)), None);
        assert_eq!(grid.cell(r(0), c(4)), None);
        assert_eq!(grid.cell(r(7), c(7)), None);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(4);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 3));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(0, 4));
    }

    #[test]
    fn test_try_decode_rejects_foreign_indices() {
        let grid = Grid::new(4);
        assert_eq!(grid.try_decode(CellIndex::new(16)), None);
        assert_eq!(grid.try_decode(CellIndex::new(100)), None);

        // A zero-sized grid has no cells at all.
        let empty = Grid::new(0);
        assert_eq!(empty.try_decode(CellIndex::new(0)), None);
    }

    #[test]
    fn test_step_forwards_and_backwards() {
        let grid = Grid::new(4);
        let origin = grid.cell(r(2), c(2)).unwrap();
        let diagonal = SlopeVector::new(1, 1);

        // Forwards: (2, 2) -> (3, 3)
        assert_eq!(grid.step(origin, diagonal), grid.cell(r(3), c(3)));
        // Backwards: (2, 2) -> (1, 1)
        assert_eq!(grid.step_back(origin, diagonal), grid.cell(r(1), c(1)));

        // Stepping off the board is None.
        let corner = grid.cell(r(3), c(3)).unwrap();
        assert_eq!(grid.step(corner, diagonal), None);
        let start = grid.cell(r(0), c(0)).unwrap();
        assert_eq!(grid.step_back(start, diagonal), None);
    }

    #[test]
    fn test_step_with_steep_vector() {
        let grid = Grid::new(8);
        let origin = grid.cell(r(4), c(4)).unwrap();
        let steep = SlopeVector::new(1, -2);

        assert_eq!(grid.step(origin, steep), grid.cell(r(2), c(5)));
        assert_eq!(grid.step_back(origin, steep), grid.cell(r(6), c(3)));
    }

    #[test]
    fn test_line_before_main_diagonal() {
        let grid = Grid::new(4);
        // From (2, 2) stepping back by (1, 1): (1, 1) = 5, (0, 0) = 0.
        let line = grid.line_before(r(2), c(2), SlopeVector::new(1, 1));
        assert_eq!(line, cells(&[5, 0]));
    }

    #[test]
    fn test_line_before_excludes_origin_and_orders_nearest_first() {
        let grid = Grid::new(8);
        let origin = grid.cell(r(4), c(6)).unwrap();
        let line = grid.line_before(r(4), c(6), SlopeVector::new(2, 1));

        assert!(!line.contains(&origin));
        // (3, 4) = 28, (2, 2) = 18, (1, 0) = 8 — nearest first.
        assert_eq!(line, cells(&[28, 18, 8]));
    }

    #[test]
    fn test_line_before_empty_at_board_edge() {
        let grid = Grid::new(4);
        // Nothing lies left of column 0 along any slope.
        assert!(grid.line_before(r(2), c(0), SlopeVector::new(1, 1)).is_empty());
        assert!(grid.line_before(r(2), c(0), SlopeVector::new(2, 1)).is_empty());
    }

    #[test]
    fn test_line_before_off_board_origin_is_empty() {
        let grid = Grid::new(4);
        assert!(grid.line_before(r(9), c(9), SlopeVector::new(1, 1)).is_empty());
    }

    #[test]
    fn test_row_line() {
        let grid = Grid::new(4);
        // Row 1 spans cells 4..8.
        assert_eq!(grid.row_line(r(1)), cells(&[4, 5, 6, 7]));

        let empty = Grid::new(0);
        assert!(empty.row_line(r(0)).is_empty());
    }
}
