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

//! # Regent Solver
//!
//! The search engine of the Regent augmented N-Queens solver: an
//! explicit-stack, depth-first backtracking search that places one queen
//! per column, left to right, under the augmented attack rules — rows,
//! columns, and the two ±45° diagonals strict, every other coprime slope
//! tolerating at most two collinear queens.
//!
//! ## Modules
//!
//! - `engine`: the [`Solver`](engine::Solver) — precomputed attack
//!   geometry, the composed safety check, the search loop, and the
//!   diagnostic full-board validity check.
//! - `frontier`: the LIFO stack of candidate boards the search expands.
//! - `monitor`: pluggable termination criteria (frame limit, wall-clock
//!   limit) for callers that need bounded search time; the core itself
//!   imposes none.
//! - `result`: the explicit solved / unsolvable / aborted outcome; no
//!   panic or partial board ever represents "no solution".
//! - `stats`: per-run search statistics.

pub mod engine;
pub mod frontier;
pub mod monitor;
pub mod result;
pub mod stats;
