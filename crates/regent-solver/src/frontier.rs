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

//! # Search Frontier
//!
//! The LIFO stack of pending candidate boards the depth-first search
//! expands. Every [`Candidate`] owns an independent board snapshot
//! (copy-on-branch), so popping and expanding one candidate can never
//! leak placements into a sibling branch; there is no undo step because
//! there is nothing shared to undo.

use regent_model::board::Board;
use regent_model::index::ColIndex;

/// A partial solution: a board snapshot together with the next column to
/// fill. Owned exclusively by the frontier until popped and expanded or
/// discarded as a dead branch.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Candidate {
    board: Board,
    next_col: ColIndex,
}

impl Candidate {
    /// Creates a candidate from a board snapshot and the next column to
    /// fill.
    #[inline]
    pub fn new(board: Board, next_col: ColIndex) -> Self {
        Self { board, next_col }
    }

    /// Creates the root candidate for a search: an empty board with
    /// column zero up next.
    #[inline]
    pub fn root(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            next_col: ColIndex::new(0),
        }
    }

    /// Returns the board snapshot.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the next column to fill.
    #[inline]
    pub fn next_col(&self) -> ColIndex {
        self.next_col
    }

    /// Consumes the candidate and returns its board.
    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// A LIFO stack of pending candidates.
///
/// Expanding one candidate pushes at most N children (one per safe row),
/// and the search goes at most N columns deep, which bounds the frontier
/// by N² candidates; `preallocated` reserves that up front. The peak
/// length is tracked for the run statistics.
#[derive(Clone, Debug)]
pub struct Frontier {
    entries: Vec<Candidate>,
    peak_len: usize,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    /// Creates a new, empty `Frontier`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            peak_len: 0,
        }
    }

    /// Creates a preallocated `Frontier` sized for a board dimension.
    #[inline]
    pub fn preallocated(board_size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(board_size.saturating_mul(board_size)),
            peak_len: 0,
        }
    }

    /// Returns the number of pending candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no candidates are pending (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the largest number of candidates held at once since the
    /// last reset.
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    /// Pushes a candidate onto the stack.
    #[inline]
    pub fn push(&mut self, candidate: Candidate) {
        self.entries.push(candidate);
        if self.entries.len() > self.peak_len {
            self.peak_len = self.entries.len();
        }
    }

    /// Pops the most recently pushed candidate (LIFO).
    #[inline]
    pub fn pop(&mut self) -> Option<Candidate> {
        self.entries.pop()
    }

    /// Clears all candidates and the peak counter, keeping allocated
    /// capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.peak_len = 0;
    }
}

impl std::fmt::Display for Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frontier(pending: {}, peak: {})",
            self.entries.len(),
            self.peak_len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regent_model::index::RowIndex;

    fn candidate(board_size: usize, queen_row: usize, next_col: usize) -> Candidate {
        let mut board = Board::new(board_size);
        board.place_queen(RowIndex::new(queen_row), ColIndex::new(0));
        Candidate::new(board, ColIndex::new(next_col))
    }

    #[test]
    fn test_root_candidate() {
        let root = Candidate::root(4);
        assert_eq!(root.board().size(), 4);
        assert!(root.next_col().is_zero());
        assert!(!root.board().is_full());
    }

    #[test]
    fn test_candidate_accessors() {
        let cand = candidate(4, 2, 1);
        assert_eq!(cand.next_col(), ColIndex::new(1));
        assert_eq!(cand.board().row_at(ColIndex::new(0)), Some(RowIndex::new(2)));

        let board = cand.into_board();
        assert_eq!(board.row_at(ColIndex::new(0)), Some(RowIndex::new(2)));
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut frontier = Frontier::new();
        frontier.push(candidate(4, 0, 1));
        frontier.push(candidate(4, 1, 1));
        frontier.push(candidate(4, 2, 1));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(candidate(4, 2, 1)));
        assert_eq!(frontier.pop(), Some(candidate(4, 1, 1)));
        assert_eq!(frontier.pop(), Some(candidate(4, 0, 1)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_peak_len_tracks_high_water_mark() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.peak_len(), 0);

        frontier.push(candidate(4, 0, 1));
        frontier.push(candidate(4, 1, 1));
        assert_eq!(frontier.peak_len(), 2);

        frontier.pop();
        frontier.pop();
        assert_eq!(frontier.peak_len(), 2);

        frontier.push(candidate(4, 2, 1));
        assert_eq!(frontier.peak_len(), 2);
    }

    #[test]
    fn test_reset_clears_entries_and_peak() {
        let mut frontier = Frontier::preallocated(4);
        frontier.push(candidate(4, 0, 1));
        frontier.push(candidate(4, 1, 1));

        frontier.reset();
        assert!(frontier.is_empty());
        assert_eq!(frontier.peak_len(), 0);
    }

    #[test]
    fn test_display_includes_counts() {
        let mut frontier = Frontier::new();
        frontier.push(candidate(4, 0, 1));
        assert_eq!(format!("{}", frontier), "Frontier(pending: 1, peak: 1)");

        frontier.pop();
        assert_eq!(format!("{}", frontier), "Frontier(pending: 0, peak: 1)");
    }
}
