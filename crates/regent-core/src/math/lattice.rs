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

//! # Integer Lattice Helpers
//!
//! The Euclidean greatest common divisor and a coprimality predicate,
//! generic over `num_traits::PrimInt`. These drive the enumeration of
//! generalized board diagonals: a slope `(dx, dy)` describes a distinct
//! lattice line exactly when `dx` and `dy` are coprime.

use num_traits::PrimInt;

/// Computes the greatest common divisor of two integers using the
/// Euclidean algorithm.
///
/// # Examples
///
/// ```rust
/// use regent_core::math::gcd;
///
/// assert_eq!(gcd(6, 8), 2);
/// assert_eq!(gcd(5, 7), 1);
/// ```
#[inline]
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt,
{
    while b != T::zero() {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns `true` if `a` and `b` share no common divisor other than one.
#[inline]
pub fn are_coprime<T>(a: T, b: T) -> bool
where
    T: PrimInt,
{
    gcd(a, b) == T::one()
}
