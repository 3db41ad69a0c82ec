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

use super::{BinaryPredicate, UnaryPredicate};

/// Logical negation of a predicate.
///
/// Works for unary and binary predicates alike; arguments are forwarded to
/// the wrapped predicate exactly as they were received.
///
/// # Examples
///
/// ```rust
/// use lanes_core::functional::{NotPred, UnaryPredicate};
///
/// let mut odd = NotPred::new(|x: &u32| x % 2 == 0);
/// assert!(odd.test(&3));
/// assert!(!odd.test(&4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotPred<P> {
    pred: P,
}

impl<P> NotPred<P> {
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

impl<P, A> UnaryPredicate<A> for NotPred<P>
where
    P: UnaryPredicate<A>,
{
    #[inline(always)]
    fn test(&mut self, arg: A) -> bool {
        !self.pred.test(arg)
    }
}

impl<P, A, B> BinaryPredicate<A, B> for NotPred<P>
where
    P: BinaryPredicate<A, B>,
{
    #[inline(always)]
    fn test_pair(&mut self, a: A, b: B) -> bool {
        !self.pred.test_pair(a, b)
    }
}

/// Shorthand for [`NotPred::new`].
#[inline]
pub const fn not_pred<P>(pred: P) -> NotPred<P> {
    NotPred::new(pred)
}
