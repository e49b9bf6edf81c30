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

/// Statistics collected during a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of frames popped from the frontier and expanded.
    pub frames_expanded: u64,
    /// Number of candidate boards pushed onto the frontier,
    /// including the root.
    pub candidates_pushed: u64,
    /// Largest number of candidates held by the frontier at once.
    pub peak_frontier_len: usize,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Frames Expanded: {}", self.frames_expanded)?;
        writeln!(f, "  Candidates Pushed: {}", self.candidates_pushed)?;
        writeln!(f, "  Peak Frontier Length: {}", self.peak_frontier_len)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    frames_expanded: u64,
    candidates_pushed: u64,
    peak_frontier_len: usize,
    solve_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            frames_expanded: 0,
            candidates_pushed: 0,
            peak_frontier_len: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of frames expanded.
    #[inline]
    pub fn frames_expanded(mut self, frames_expanded: u64) -> Self {
        self.frames_expanded = frames_expanded;
        self
    }

    /// Sets the number of candidates pushed.
    #[inline]
    pub fn candidates_pushed(mut self, candidates_pushed: u64) -> Self {
        self.candidates_pushed = candidates_pushed;
        self
    }

    /// Sets the peak frontier length.
    #[inline]
    pub fn peak_frontier_len(mut self, peak_frontier_len: usize) -> Self {
        self.peak_frontier_len = peak_frontier_len;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            frames_expanded: self.frames_expanded,
            candidates_pushed: self.candidates_pushed,
            peak_frontier_len: self.peak_frontier_len,
            solve_duration: self.solve_duration,
        }
    }
}
