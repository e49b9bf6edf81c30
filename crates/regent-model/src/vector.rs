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

//! # Slope Vectors
//!
//! The attack geometry of the augmented N-Queens rule set. A
//! `SlopeVector` is an integer pair `(dx, dy)` with `dx >= 1` describing
//! the slope of a board line. Two kinds of vector exist:
//!
//! - **Strict vectors** ([`MAIN_DIAGONALS`]): the two canonical ±45°
//!   diagonals `(1, 1)` and `(1, -1)`. A single shared queen on such a
//!   line is already an attack.
//! - **Soft scan vectors** ([`scan_vectors`]): every other coprime slope
//!   `(dx, dy)` with `1 <= dx, dy <= n/2`. Two queens sharing such a line
//!   are tolerated, a third is not.
//!
//! The enumeration order of [`scan_vectors`] is part of the observable
//! contract: dx-major, dy-minor, with `(dx, dy)` emitted immediately
//! before its mirror `(dx, -dy)`.

use regent_core::math::are_coprime;

/// The two canonical diagonal slopes, for which a single shared queen is
/// already a classical chess attack.
pub const MAIN_DIAGONALS: [SlopeVector; 2] = [SlopeVector::new(1, 1), SlopeVector::new(1, -1)];

/// An integer slope `(dx, dy)` of a board line, `dx >= 1`.
///
/// `dx` is the change along the column (x) axis, `dy` the change along
/// the row (y) axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SlopeVector {
    dx: i64,
    dy: i64,
}

impl SlopeVector {
    /// Creates a new `SlopeVector`.
    ///
    /// The invariant `dx >= 1` keeps every representable slope pointing
    /// rightwards, so a line is fully described by one vector and its
    /// mirror rather than four sign combinations.
    #[inline]
    pub const fn new(dx: i64, dy: i64) -> Self {
        debug_assert!(dx >= 1, "called `SlopeVector::new` with dx < 1");
        Self { dx, dy }
    }

    /// Returns the change along the column (x) axis.
    #[inline]
    pub const fn dx(&self) -> i64 {
        self.dx
    }

    /// Returns the change along the row (y) axis.
    #[inline]
    pub const fn dy(&self) -> i64 {
        self.dy
    }

    /// Returns the vector mirrored across the horizontal axis,
    /// `(dx, -dy)`.
    #[inline]
    pub const fn mirrored(&self) -> Self {
        Self {
            dx: self.dx,
            dy: -self.dy,
        }
    }
}

impl std::fmt::Display for SlopeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// Generates the soft scan vectors for a board of the given size: every
/// slope `(dx, dy)` with `1 <= dx, dy <= size / 2`, `gcd(dx, dy) = 1`,
/// excluding the strict diagonal `(1, 1)`, together with its mirror
/// `(dx, -dy)`.
///
/// The output order is fixed: dx-major, dy-minor, each vector followed
/// immediately by its mirror.
pub fn scan_vectors(size: usize) -> Vec<SlopeVector> {
    let half = (size / 2) as i64;
    let mut vectors = Vec::new();
    for dx in 1..=half {
        for dy in 1..=half {
            if are_coprime(dx, dy) && !(dx == 1 && dy == 1) {
                let vector = SlopeVector::new(dx, dy);
                vectors.push(vector);
                vectors.push(vector.mirrored());
            }
        }
    }
    vectors
}
