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

use crate::stats::SearchStatistics;
use regent_model::board::Board;

/// The result of a search run.
///
/// "No solution" is a value of this enum, never a panic and never a
/// partially filled board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A complete board satisfying every constraint was found.
    Solved(Board),
    /// The search space was exhausted without finding a solution.
    Unsolvable,
    /// The search terminated early (e.g., a monitor fired) without
    /// finding a solution and without exhausting the search space.
    Unknown,
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Solved(board) => write!(f, "Solved(size={})", board.size()),
            SolveResult::Unsolvable => write!(f, "Unsolvable"),
            SolveResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The first complete board was found.
    SolutionFound,
    /// Every candidate branch was expanded and none completed.
    SearchExhausted,
    /// A search monitor requested termination. The string carries the
    /// monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::SolutionFound => write!(f, "Solution Found"),
            TerminationReason::SearchExhausted => write!(f, "Search Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The full outcome of a search run: the result, why the search
/// stopped, and the statistics collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    result: SolveResult,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SolveOutcome {
    /// Constructs an outcome for a found solution.
    #[inline]
    pub fn solved(board: Board, statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Solved(board),
            reason: TerminationReason::SolutionFound,
            statistics,
        }
    }

    /// Constructs an outcome for an exhausted search space.
    #[inline]
    pub fn unsolvable(statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Unsolvable,
            reason: TerminationReason::SearchExhausted,
            statistics,
        }
    }

    /// Constructs an outcome for a search aborted by a monitor.
    #[inline]
    pub fn aborted(reason: String, statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Unknown,
            reason: TerminationReason::Aborted(reason),
            statistics,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    /// Returns why the search stopped.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `true` if a solution was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self.result, SolveResult::Solved(_))
    }

    /// Returns `true` if the search space was exhausted without a
    /// solution.
    #[inline]
    pub fn is_unsolvable(&self) -> bool {
        matches!(self.result, SolveResult::Unsolvable)
    }

    /// Returns the solution board, if one was found.
    #[inline]
    pub fn board(&self) -> Option<&Board> {
        match &self.result {
            SolveResult::Solved(board) => Some(board),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the solution board, if one was
    /// found.
    #[inline]
    pub fn into_board(self) -> Option<Board> {
        match self.result {
            SolveResult::Solved(board) => Some(board),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SearchStatisticsBuilder;
    use regent_model::index::{ColIndex, RowIndex};

    fn stats() -> SearchStatistics {
        SearchStatisticsBuilder::new().frames_expanded(7).build()
    }

    fn solved_board() -> Board {
        let mut board = Board::new(1);
        board.place_queen(RowIndex::new(0), ColIndex::new(0));
        board
    }

    #[test]
    fn test_solved_outcome() {
        let outcome = SolveOutcome::solved(solved_board(), stats());
        assert!(outcome.is_solved());
        assert!(!outcome.is_unsolvable());
        assert_eq!(outcome.reason(), &TerminationReason::SolutionFound);
        assert_eq!(outcome.statistics().frames_expanded, 7);
        assert!(outcome.board().is_some());
        assert_eq!(outcome.into_board(), Some(solved_board()));
    }

    #[test]
    fn test_unsolvable_outcome() {
        let outcome = SolveOutcome::unsolvable(stats());
        assert!(!outcome.is_solved());
        assert!(outcome.is_unsolvable());
        assert_eq!(outcome.reason(), &TerminationReason::SearchExhausted);
        assert_eq!(outcome.board(), None);
        assert_eq!(outcome.into_board(), None);
    }

    #[test]
    fn test_aborted_outcome() {
        let outcome = SolveOutcome::aborted("frame limit reached".to_string(), stats());
        assert!(!outcome.is_solved());
        assert!(!outcome.is_unsolvable());
        assert_eq!(outcome.result(), &SolveResult::Unknown);
        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("frame limit reached".to_string())
        );
    }

    #[test]
    fn test_display() {
        let outcome = SolveOutcome::unsolvable(stats());
        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Result: Unsolvable"));
        assert!(rendered.contains("Termination: Search Exhausted"));
        assert!(rendered.contains("Frames Expanded: 7"));

        assert_eq!(format!("{}", SolveResult::Unknown), "Unknown");
        assert_eq!(
            format!("{}", TerminationReason::Aborted("time limit reached".into())),
            "Aborted: time limit reached"
        );
    }
}
