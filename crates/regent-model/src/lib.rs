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

//! # Regent Model
//!
//! **The Core Domain Model for the Regent Augmented N-Queens Solver.**
//!
//! This crate defines the data structures shared between problem geometry
//! and the solving engine (`regent_solver`): the board grid, the attack
//! and scan slope vectors, and the mutable per-column queen placement
//! state.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`RowIndex`, `ColIndex`,
//!   `CellIndex`) to prevent logical indexing errors between the three
//!   index spaces of a board.
//! * **`vector`**: Slope vectors of the generalized board diagonals — the
//!   two strict ±45° attack vectors and the coprime soft scan vectors.
//! * **`grid`**: Pure row-major geometry — encode/decode, bounds checks,
//!   vector stepping, and line generation.
//! * **`board`**: The per-column placement state, line-safety evaluation
//!   under strict and relaxed counting rules, and queen placement.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Rows, columns, and cells are distinct index types.
//! 2.  **Sum types over sentinels**: An unfilled column is `None`, an
//!     off-board cell is `None`; no magic `-1` values cross an API
//!     boundary.
//! 3.  **Copy-on-branch**: `Board` is cheap to clone, and the search
//!     engine clones it per candidate branch instead of maintaining an
//!     undo trail.

pub mod board;
pub mod grid;
pub mod index;
pub mod vector;
