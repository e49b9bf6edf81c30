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

//! # Frame Limit Monitor
//!
//! Terminates the search once a maximum number of frames has been
//! popped and expanded. This is the iteration-count bound for callers
//! that need a deterministic cap on search effort independent of
//! wall-clock time.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use regent_model::board::Board;

/// A monitor that caps the number of expanded frames.
///
/// With a limit of N, exactly N frames may be expanded before the
/// search is asked to terminate; a limit of zero aborts the search
/// before the root frame is expanded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrameLimitMonitor {
    frame_limit: u64,
    frames_expanded: u64,
}

impl FrameLimitMonitor {
    /// Creates a monitor allowing at most `frame_limit` expanded frames.
    #[inline]
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frame_limit,
            frames_expanded: 0,
        }
    }

    /// Returns the configured limit.
    #[inline]
    pub fn frame_limit(&self) -> u64 {
        self.frame_limit
    }

    /// Returns the number of frames expanded so far.
    #[inline]
    pub fn frames_expanded(&self) -> u64 {
        self.frames_expanded
    }
}

impl SearchMonitor for FrameLimitMonitor {
    fn name(&self) -> &str {
        "FrameLimitMonitor"
    }

    fn on_enter_search(&mut self, _board_size: usize) {
        self.frames_expanded = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _board: &Board) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.frames_expanded += 1;
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.frames_expanded >= self.frame_limit {
            return SearchCommand::Terminate("frame limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_limit() {
        let mut monitor = FrameLimitMonitor::new(3);
        monitor.on_enter_search(8);
        monitor.on_step();
        monitor.on_step();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert_eq!(monitor.frames_expanded(), 2);
    }

    #[test]
    fn test_terminates_at_limit() {
        let mut monitor = FrameLimitMonitor::new(2);
        monitor.on_enter_search(8);
        monitor.on_step();
        monitor.on_step();
        assert_eq!(
            monitor.search_command(),
            SearchCommand::Terminate("frame limit reached".to_string())
        );
    }

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let monitor = FrameLimitMonitor::new(0);
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_enter_search_resets_counter() {
        let mut monitor = FrameLimitMonitor::new(1);
        monitor.on_step();
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));

        monitor.on_enter_search(8);
        assert_eq!(monitor.frames_expanded(), 0);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }
}
