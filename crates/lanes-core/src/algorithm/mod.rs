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

use crate::functional::BinaryPredicate;
use std::ops::Deref;

/// Selects whichever of two positions lies closer to a reference point.
///
/// `comp_it` orders positions (it answers "is `a` before `b`" relative to the
/// scan's pivot), `comp` orders the values behind them. The rule is:
///
/// - if `comp_it(a, b)` holds, return `b` when `comp(*b, *a)` holds, else `a`;
/// - otherwise return `a` when `comp(*a, *b)` holds, else `b`.
///
/// Outward scans from a pivot use this to pick the nearer operand while still
/// honouring the value ordering. The asymmetry is part of the contract: equal
/// values resolve to the position `comp_it` does not favour.
///
/// Positions are anything that dereferences to the value, typically `&T`.
///
/// # Examples
///
/// ```rust
/// use lanes_core::algorithm::cmp_iterators_by_values;
///
/// let data = [7, 3, 9];
/// let (a, b) = (&data[0], &data[1]);
/// let before = |x: &&i32, y: &&i32| std::ptr::from_ref(*x) < std::ptr::from_ref(*y);
/// let less = |x: &i32, y: &i32| x < y;
///
/// // `a` precedes `b`, and the value at `b` is smaller: `b` wins.
/// let picked = cmp_iterators_by_values(a, b, less, before);
/// assert!(std::ptr::eq(picked, b));
/// ```
#[inline]
pub fn cmp_iterators_by_values<P, C, CP>(a: P, b: P, mut comp: C, mut comp_it: CP) -> P
where
    P: Deref,
    C: for<'x> BinaryPredicate<&'x P::Target, &'x P::Target>,
    CP: for<'x> BinaryPredicate<&'x P, &'x P>,
{
    if comp_it.test_pair(&a, &b) {
        if comp.test_pair(&*b, &*a) { b } else { a }
    } else if comp.test_pair(&*a, &*b) {
        a
    } else {
        b
    }
}

/// Slice-index flavour of [`cmp_iterators_by_values`].
///
/// Positions are indices into `values`; `comp_idx` orders the indices and
/// `comp` orders `values[a]` and `values[b]`. The selection rule is the same.
///
/// # Panics
///
/// Panics if `a` or `b` is out of bounds for `values`.
///
/// # Examples
///
/// ```rust
/// use lanes_core::algorithm::cmp_indices_by_values;
///
/// let values = [4, 1, 1, 6];
/// let less = |x: &i32, y: &i32| x < y;
/// let before = |i: usize, j: usize| i < j;
///
/// assert_eq!(cmp_indices_by_values(&values, 0, 1, less, before), 1);
/// // Equal values: the later index is not strictly better, so `a` stays.
/// assert_eq!(cmp_indices_by_values(&values, 1, 2, less, before), 1);
/// ```
#[inline]
pub fn cmp_indices_by_values<T, C, CI>(
    values: &[T],
    a: usize,
    b: usize,
    mut comp: C,
    mut comp_idx: CI,
) -> usize
where
    C: for<'x> BinaryPredicate<&'x T, &'x T>,
    CI: BinaryPredicate<usize, usize>,
{
    let (va, vb) = (&values[a], &values[b]);
    if comp_idx.test_pair(a, b) {
        if comp.test_pair(vb, va) { b } else { a }
    } else if comp.test_pair(va, vb) {
        a
    } else {
        b
    }
}
