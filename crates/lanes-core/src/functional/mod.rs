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

//! # Predicate Adaptors
//!
//! Composable building blocks that let generic algorithms express "not P",
//! "P with its arguments swapped" and "argument relates to a fixed value"
//! without hand-writing a new callable type at every call site.
//!
//! ## Submodules
//!
//! - `negate`: `NotPred`, the logical complement of a unary or binary predicate.
//! - `reorder`: `ReorderPred`, which calls a binary predicate as `(b, a)`.
//! - `value`: `EqualValueByPred`, `EqualValue` and `NotEqualValue`, which
//!   borrow a bound value and test arguments against it.
//!
//! ## Calling Convention
//!
//! Predicates are invoked through `&mut self` so that stateful callables keep
//! their state across calls made by the same adaptor. Arguments are generic
//! and passed through as they are: owned values are moved, borrows stay
//! borrows, nothing is cloned. Plain closures implement both traits through
//! blanket impls, and every adaptor implements them as well, so adaptors nest:
//!
//! ```rust
//! use lanes_core::functional::{BinaryPredicate, NotPred, ReorderPred};
//!
//! // !(b < a) == a <= b
//! let mut le = NotPred::new(ReorderPred::new(|a: &i32, b: &i32| a < b));
//! assert!(le.test_pair(&1, &2));
//! assert!(le.test_pair(&2, &2));
//! assert!(!le.test_pair(&3, &2));
//! ```

pub mod negate;
pub mod reorder;
pub mod value;

pub use negate::{NotPred, not_pred};
pub use reorder::{ReorderPred, reorder_pred};
pub use value::{
    EqualValue, EqualValueByPred, NotEqualValue, equal_value, equal_value_by_pred,
    not_equal_value,
};

/// A predicate over one argument.
pub trait UnaryPredicate<A> {
    /// Evaluates the predicate for `arg`.
    fn test(&mut self, arg: A) -> bool;

    /// Turns the predicate into a closure, e.g. for `Iterator::position`.
    #[inline]
    fn into_fn(mut self) -> impl FnMut(A) -> bool
    where
        Self: Sized,
    {
        move |arg| self.test(arg)
    }
}

impl<F, A> UnaryPredicate<A> for F
where
    F: FnMut(A) -> bool,
{
    #[inline(always)]
    fn test(&mut self, arg: A) -> bool {
        self(arg)
    }
}

/// A predicate over two arguments, such as a comparator.
pub trait BinaryPredicate<A, B> {
    /// Evaluates the predicate for `(a, b)`.
    fn test_pair(&mut self, a: A, b: B) -> bool;

    /// Turns the predicate into a two-argument closure.
    #[inline]
    fn into_pair_fn(mut self) -> impl FnMut(A, B) -> bool
    where
        Self: Sized,
    {
        move |a, b| self.test_pair(a, b)
    }
}

impl<F, A, B> BinaryPredicate<A, B> for F
where
    F: FnMut(A, B) -> bool,
{
    #[inline(always)]
    fn test_pair(&mut self, a: A, b: B) -> bool {
        self(a, b)
    }
}
