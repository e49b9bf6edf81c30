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

//! # Board Placement State
//!
//! `Board` holds one queen row per column — `None` while a column is
//! still unfilled — and answers the line-safety question the search
//! engine asks: is a given line of cells free of a conflicting queen,
//! under a strict or relaxed counting rule?
//!
//! The struct is a plain vector of `Option<RowIndex>` and is cheap to
//! clone. The search engine relies on that: every candidate branch owns
//! its own deep copy, so no branch ever observes a sibling's placements.

use crate::grid::Grid;
use crate::index::{CellIndex, ColIndex, RowIndex};

/// The counting rule applied when scanning a line for queens.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CheckMode {
    /// The first queen found on the line is a conflict (classical chess
    /// attack along rows and the ±45° diagonals).
    Strict,
    /// One queen on the line is tolerated; a second is a conflict
    /// (the augmented rule for generalized diagonals, which forbids
    /// three collinear queens in total).
    Relaxed,
}

/// Per-column queen placement state of a fixed-size board.
///
/// Index `i` of the row vector is column `i`; the value is the row of
/// the queen in that column, or `None` while the column is unfilled.
/// At most one queen per column holds by construction, since a
/// placement overwrites the column's entry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
    rows: Vec<Option<RowIndex>>,
}

impl Board {
    /// Creates an empty board of the given size, all columns unfilled.
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            rows: vec![None; size],
        }
    }

    /// Builds a board directly from a column-to-row mapping; the board
    /// size is inferred from the mapping's length. Used for test
    /// fixtures and for validity checks on externally supplied boards.
    #[inline]
    pub fn from_rows(rows: Vec<Option<RowIndex>>) -> Self {
        Self {
            grid: Grid::new(rows.len()),
            rows,
        }
    }

    /// Returns the board dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the board's geometry.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the queen row of every column, in column order.
    #[inline]
    pub fn queen_rows(&self) -> &[Option<RowIndex>] {
        &self.rows
    }

    /// Scans a line of cells for conflicting queens.
    ///
    /// Each cell is decoded to its coordinate pair; the cell equal to
    /// `ignored` (the candidate placement under evaluation, never a
    /// conflict with itself) is skipped, as is any cell that does not
    /// belong to this board's grid. A cell conflicts when the queen
    /// placed in its column sits exactly on its row. Under
    /// [`CheckMode::Strict`] the first conflict fails the line; under
    /// [`CheckMode::Relaxed`] only a second one does.
    ///
    /// A zero-sized board has no columns and is never considered safe.
    pub fn is_safe(
        &self,
        line: &[CellIndex],
        mode: CheckMode,
        ignored: Option<(RowIndex, ColIndex)>,
    ) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let mut queens_found = 0usize;
        for &cell in line {
            let Some((row, col)) = self.grid.try_decode(cell) else {
                continue;
            };
            if ignored == Some((row, col)) {
                continue;
            }
            if self.rows[col.get()] == Some(row) {
                queens_found += 1;
                if mode == CheckMode::Strict || queens_found > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Places a queen, overwriting the column's previous entry. A
    /// coordinate outside the board is silently ignored; callers probing
    /// boundary-adjacent coordinates need no separate edge check.
    ///
    /// Returns `&mut Self` so a placement can be chained onto a fresh
    /// copy when the search branches.
    #[inline]
    pub fn place_queen(&mut self, row: RowIndex, col: ColIndex) -> &mut Self {
        if row.get() < self.size() && col.get() < self.size() {
            self.rows[col.get()] = Some(row);
        }
        self
    }

    /// Returns the queen's row in the given column.
    ///
    /// `None` means either "no queen placed yet" or "column index out of
    /// range"; a caller that must distinguish the two pre-validates the
    /// column against [`Board::size`].
    #[inline]
    pub fn row_at(&self, col: ColIndex) -> Option<RowIndex> {
        self.rows.get(col.get()).copied().flatten()
    }

    /// Returns `true` if the board has at least one column and every
    /// column holds a queen.
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.is_some())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        writeln!(f, "Board ({}x{})", size, size)?;
        for row in 0..size {
            write!(f, "   ")?;
            for col in 0..size {
                let symbol = if self.rows[col] == Some(RowIndex::new(row)) {
                    'Q'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Line;
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

    /// Builds a fully occupied board from literal queen rows.
    fn board_of(rows: &[usize]) -> Board {
        Board::from_rows(rows.iter().map(|&row| Some(r(row))).collect())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert!(!board.is_full());
        for col in 0..4 {
            assert_eq!(board.row_at(c(col)), None);
        }
    }

    #[test]
    fn test_from_rows_infers_size() {
        let board = Board::from_rows(vec![Some(r(1)), None, Some(r(0))]);
        assert_eq!(board.size(), 3);
        assert_eq!(board.row_at(c(0)), Some(r(1)));
        assert_eq!(board.row_at(c(1)), None);
        assert_eq!(board.row_at(c(2)), Some(r(0)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_queen_and_overwrite() {
        let mut board = Board::new(4);
        board.place_queen(r(2), c(1));
        assert_eq!(board.row_at(c(1)), Some(r(2)));

        // A second placement in the same column overwrites, never stacks.
        board.place_queen(r(3), c(1));
        assert_eq!(board.row_at(c(1)), Some(r(3)));
    }

    #[test]
    fn test_place_queen_off_board_is_silent_noop() {
        let mut board = Board::new(4);
        board.place_queen(r(4), c(0));
        board.place_queen(r(0), c(4));
        board.place_queen(r(9), c(9));
        assert_eq!(board, Board::new(4));
    }

    #[test]
    fn test_place_queen_chains() {
        let mut board = Board::new(2);
        board.place_queen(r(0), c(0)).place_queen(r(1), c(1));
        assert!(board.is_full());
    }

    #[test]
    fn test_row_at_out_of_range_matches_unfilled() {
        let board = Board::new(2);
        // Out-of-range columns answer exactly like unfilled columns.
        assert_eq!(board.row_at(c(5)), None);
        assert_eq!(board.row_at(c(0)), None);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        assert!(!board.is_full());
        board.place_queen(r(0), c(0));
        assert!(!board.is_full());
        board.place_queen(r(1), c(1));
        assert!(board.is_full());

        // A zero-sized board is never full.
        assert!(!Board::new(0).is_full());
    }

    #[test]
    fn test_is_safe_strict_detects_first_queen() {
        // Full 4x4 board with queen rows [1, 3, 0, 2].
        let board = board_of(&[1, 3, 0, 2]);
        // Cells 2 = (0, 2) and 4 = (1, 0); the queen of column 2 sits on
        // row 0, so cell (0, 2) conflicts immediately.
        assert!(!board.is_safe(&cells(&[2, 4]), CheckMode::Strict, None));
    }

    #[test]
    fn test_is_safe_relaxed_tolerates_one_queen() {
        let board = board_of(&[1, 3, 0, 2]);
        // Cell 2 = (0, 2) holds a queen, cell 4 = (1, 0) holds another.
        assert!(board.is_safe(&cells(&[2]), CheckMode::Relaxed, None));
        assert!(!board.is_safe(&cells(&[2, 4]), CheckMode::Relaxed, None));
    }

    #[test]
    fn test_is_safe_ignores_candidate_cell() {
        let board = board_of(&[1, 3, 0, 2]);
        // Cell 2 = (0, 2) is the candidate itself and must not count.
        assert!(board.is_safe(&cells(&[2]), CheckMode::Strict, Some((r(0), c(2)))));
    }

    #[test]
    fn test_is_safe_skips_foreign_cells() {
        let board = board_of(&[1, 3, 0, 2]);
        // Indices beyond the 16-cell grid are skipped, not conflicts.
        assert!(board.is_safe(&cells(&[16, 99]), CheckMode::Strict, None));
    }

    #[test]
    fn test_is_safe_empty_line_is_safe() {
        let board = board_of(&[1, 3, 0, 2]);
        assert!(board.is_safe(&[], CheckMode::Strict, None));
    }

    #[test]
    fn test_zero_sized_board_is_never_safe() {
        let board = Board::new(0);
        assert!(!board.is_safe(&[], CheckMode::Strict, None));
        assert!(!board.is_safe(&[], CheckMode::Relaxed, None));
    }

    #[test]
    fn test_is_safe_along_generated_line() {
        // Queens at (1, 0) and (3, 1); the line left of (5, 2) with
        // slope (1, 2) passes through exactly those two cells.
        let board = Board::from_rows(vec![
            Some(r(1)),
            Some(r(3)),
            None,
            None,
            None,
            None,
            None,
            None,
        ]);
        let line = board.grid().line_before(r(5), c(2), SlopeVector::new(1, 2));
        assert_eq!(line, cells(&[25, 8]));

        // Relaxed tolerates the first queen but not the second.
        assert!(!board.is_safe(&line, CheckMode::Relaxed, None));
        assert!(!board.is_safe(&line, CheckMode::Strict, None));

        // With only one queen on the line, relaxed passes and strict
        // fails.
        let single = Board::from_rows(vec![
            Some(r(1)),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        ]);
        assert!(single.is_safe(&line, CheckMode::Relaxed, None));
        assert!(!single.is_safe(&line, CheckMode::Strict, None));
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut original = Board::new(4);
        original.place_queen(r(1), c(0));

        let mut copy = original.clone();
        copy.place_queen(r(2), c(1));

        // The original must not observe the copy's placement.
        assert_eq!(original.row_at(c(1)), None);
        assert_eq!(copy.row_at(c(0)), Some(r(1)));
        assert_eq!(copy.row_at(c(1)), Some(r(2)));
    }

    #[test]
    fn test_display_renders_queens() {
        let board = board_of(&[1, 3, 0, 2]);
        let rendered = format!("{}", board);
        assert!(rendered.contains("Board (4x4)"));
        // Row 0 has its queen in column 2.
        assert!(rendered.contains(". . Q . "));
    }
}
