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

//! # Augmented N-Queens Search Engine
//!
//! A depth-first backtracking search that fills an N×N board with one
//! queen per column, left to right. The frontier is an explicit LIFO
//! stack of candidate boards rather than call-stack recursion, so the
//! search depth is controllable regardless of board size, and every
//! candidate owns a private board copy, so no branch observes a
//! sibling's placements.
//!
//! A placement is safe when three checks pass, short-circuiting on the
//! first failure:
//!
//! 1. the full horizontal row line, strict;
//! 2. the left-extending ±45° diagonal lines, strict;
//! 3. the left-extending line of every soft scan vector, relaxed
//!    (one queen already on the line is tolerated, a second is not, so
//!    no three queens end up collinear).
//!
//! The horizontal check is load-bearing: the board guarantees one queen
//! per column structurally, but nothing else guarantees row uniqueness.
//!
//! Within a column, rows are tested in ascending order and the safe
//! candidates pushed in that order; the LIFO pop therefore expands
//! higher rows first. That realized order is deterministic and
//! documented here, but which of several existing solutions is found
//! first is not a semantic contract.

use crate::frontier::{Candidate, Frontier};
use crate::monitor::no_op::NoOpMonitor;
use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::result::SolveOutcome;
use crate::stats::{SearchStatistics, SearchStatisticsBuilder};
use regent_model::board::{Board, CheckMode};
use regent_model::grid::Grid;
use regent_model::index::{ColIndex, RowIndex};
use regent_model::vector::{scan_vectors, SlopeVector, MAIN_DIAGONALS};

/// The augmented N-Queens solver for one fixed board size.
///
/// The attack geometry — the two strict diagonal vectors and the full
/// soft scan vector set — depends only on the board size and is
/// precomputed once at construction. Solving is a pure function of that
/// size: two solvers of equal size produce the same outcome.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Solver {
    grid: Grid,
    attack_vectors: [SlopeVector; 2],
    scan_vectors: Vec<SlopeVector>,
}

impl Solver {
    /// Creates a solver for an N×N board.
    pub fn new(board_size: usize) -> Self {
        Self {
            grid: Grid::new(board_size),
            attack_vectors: MAIN_DIAGONALS,
            scan_vectors: scan_vectors(board_size),
        }
    }

    /// Returns the board dimension N.
    #[inline]
    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the precomputed soft scan vectors.
    #[inline]
    pub fn scan_vectors(&self) -> &[SlopeVector] {
        &self.scan_vectors
    }

    /// Returns `true` if placing a queen at `(row, col)` on the given
    /// board violates no constraint: the horizontal row and the two
    /// ±45° diagonals hold no other queen, and no soft scan line
    /// already holds two.
    pub fn is_safe(&self, board: &Board, row: RowIndex, col: ColIndex) -> bool {
        let ignored = Some((row, col));

        // Horizontal line, strict.
        let horizontal = self.grid.row_line(row);
        if !board.is_safe(&horizontal, CheckMode::Strict, ignored) {
            return false;
        }

        // The two canonical diagonals, strict.
        for &vector in &self.attack_vectors {
            let line = self.grid.line_before(row, col, vector);
            if !board.is_safe(&line, CheckMode::Strict, ignored) {
                return false;
            }
        }

        // Every generalized diagonal, relaxed.
        for &vector in &self.scan_vectors {
            let line = self.grid.line_before(row, col, vector);
            if !board.is_safe(&line, CheckMode::Relaxed, ignored) {
                return false;
            }
        }

        true
    }

    /// Diagnostic full-board check: `true` iff the board is full, has
    /// this solver's size, and every placed queen is safe when
    /// re-checked against the rest of the board. Never called by
    /// [`Solver::solve`].
    pub fn is_valid(&self, board: &Board) -> bool {
        if board.size() != self.grid.size() || !board.is_full() {
            return false;
        }
        (0..board.size()).all(|col| {
            let col = ColIndex::new(col);
            match board.row_at(col) {
                Some(row) => self.is_safe(board, row, col),
                None => false,
            }
        })
    }

    /// Runs the search to the first complete board, with no bound on
    /// search effort.
    pub fn solve(&self) -> SolveOutcome {
        self.solve_with_monitor(&mut NoOpMonitor::new())
    }

    /// Runs the search under the given monitor. The monitor is told of
    /// every expanded frame and consulted before expanding the next
    /// one; when it requests termination the outcome is `Unknown` with
    /// the monitor's reason.
    pub fn solve_with_monitor<M>(&self, monitor: &mut M) -> SolveOutcome
    where
        M: SearchMonitor + ?Sized,
    {
        let start_time = std::time::Instant::now();
        let size = self.grid.size();
        monitor.on_enter_search(size);

        let mut frames_expanded: u64 = 0;
        let mut candidates_pushed: u64 = 0;

        // A board with no columns has no solution.
        if size == 0 {
            monitor.on_exit_search();
            return SolveOutcome::unsolvable(Self::build_statistics(
                start_time,
                frames_expanded,
                candidates_pushed,
                0,
            ));
        }

        let mut frontier = Frontier::preallocated(size);
        frontier.push(Candidate::root(size));
        candidates_pushed += 1;

        loop {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                monitor.on_exit_search();
                return SolveOutcome::aborted(
                    reason,
                    Self::build_statistics(
                        start_time,
                        frames_expanded,
                        candidates_pushed,
                        frontier.peak_len(),
                    ),
                );
            }

            let Some(candidate) = frontier.pop() else {
                break;
            };
            monitor.on_step();
            frames_expanded += 1;

            // Every column filled: the first complete board wins.
            if candidate.next_col().get() >= size {
                let board = candidate.into_board();
                monitor.on_solution_found(&board);
                monitor.on_exit_search();
                return SolveOutcome::solved(
                    board,
                    Self::build_statistics(
                        start_time,
                        frames_expanded,
                        candidates_pushed,
                        frontier.peak_len(),
                    ),
                );
            }

            let col = candidate.next_col();
            for row in 0..size {
                let row = RowIndex::new(row);
                if self.is_safe(candidate.board(), row, col) {
                    // Copy-on-branch: the child owns its own snapshot.
                    let mut next_board = candidate.board().clone();
                    next_board.place_queen(row, col);
                    frontier.push(Candidate::new(next_board, col + 1));
                    candidates_pushed += 1;
                }
            }
        }

        monitor.on_exit_search();
        SolveOutcome::unsolvable(Self::build_statistics(
            start_time,
            frames_expanded,
            candidates_pushed,
            frontier.peak_len(),
        ))
    }

    fn build_statistics(
        start_time: std::time::Instant,
        frames_expanded: u64,
        candidates_pushed: u64,
        peak_frontier_len: usize,
    ) -> SearchStatistics {
        SearchStatisticsBuilder::new()
            .frames_expanded(frames_expanded)
            .candidates_pushed(candidates_pushed)
            .peak_frontier_len(peak_frontier_len)
            .solve_duration(start_time.elapsed())
            .build()
    }
}
