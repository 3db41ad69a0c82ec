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

use super::BinaryPredicate;

/// Calls a binary predicate with its two arguments swapped.
///
/// Algorithms that only hold a comparator for one argument order use this to
/// get the mirrored comparison: `ReorderPred::new(less)` answers "is `b`
/// less than `a`", i.e. "greater".
///
/// # Examples
///
/// ```rust
/// use lanes_core::functional::{BinaryPredicate, ReorderPred};
///
/// let mut greater = ReorderPred::new(|a: &i32, b: &i32| a < b);
/// assert!(greater.test_pair(&5, &3));
/// assert!(!greater.test_pair(&3, &5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderPred<P> {
    pred: P,
}

impl<P> ReorderPred<P> {
    /// Wraps `pred`.
    #[inline]
    pub const fn new(pred: P) -> Self {
        Self { pred }
    }

    /// Consumes the adaptor and returns the wrapped predicate.
    #[inline]
    pub fn into_inner(self) -> P {
        self.pred
    }
}

impl<P, A, B> BinaryPredicate<A, B> for ReorderPred<P>
where
    P: BinaryPredicate<B, A>,
{
    #[inline(always)]
    fn test_pair(&mut self, a: A, b: B) -> bool {
        self.pred.test_pair(b, a)
    }
}

/// Shorthand for [`ReorderPred::new`].
#[inline]
pub const fn reorder_pred<P>(pred: P) -> ReorderPred<P> {
    ReorderPred::new(pred)
}
