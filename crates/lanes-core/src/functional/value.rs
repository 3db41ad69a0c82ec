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

//! # Bound-Value Predicates
//!
//! One-argument tests against a value fixed at construction time. The value
//! is borrowed, never copied: these adaptors sit inside hot search loops, and
//! the bound value may be expensive to clone. The borrow checker enforces
//! that the value outlives the predicate.
//!
//! ## Usage
//!
//! ```rust
//! use lanes_core::functional::{UnaryPredicate, equal_value, equal_value_by_pred};
//!
//! let names = [
//!     String::from("north"),
//!     String::from("south"),
//!     String::from("east"),
//! ];
//!
//! let idx = names.iter().position(equal_value("south").into_fn());
//! assert_eq!(idx, Some(1));
//!
//! let len = 4;
//! let by_len = equal_value_by_pred(&len, |s: &String, n: &usize| s.len() == *n);
//! assert_eq!(names.iter().position(by_len.into_fn()), Some(2));
//! ```

use super::{BinaryPredicate, UnaryPredicate};

/// Tests `pred(arg, value)` for a borrowed `value`.
///
/// Turns a two-argument predicate into a one-argument "matches this value"
/// test. The argument comes first, the bound value second.
#[derive(Debug)]
pub struct EqualValueByPred<'a, T: ?Sized, P> {
    value: &'a T,
    pred: P,
}

impl<'a, T: ?Sized, P> EqualValueByPred<'a, T, P> {
    /// Binds `value` and `pred`.
    #[inline]
    pub const fn new(value: &'a T, pred: P) -> Self {
        Self { value, pred }
    }

    /// Returns the bound value.
    #[inline]
    pub const fn value(&self) -> &'a T {
        self.value
    }

    /// Consumes the adaptor and returns the wrapped predicate.
    #[inline]
    pub fn into_inner(self) -> P {
        self.pred
    }
}

// Manual impls: a derive would demand `T: Clone`, which rules out unsized
// bound values even though only the reference is copied.
impl<T: ?Sized, P: Clone> Clone for EqualValueByPred<'_, T, P> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            pred: self.pred.clone(),
        }
    }
}

impl<T: ?Sized, P: Copy> Copy for EqualValueByPred<'_, T, P> {}

impl<'a, T: ?Sized, P, A> UnaryPredicate<A> for EqualValueByPred<'a, T, P>
where
    P: BinaryPredicate<A, &'a T>,
{
    #[inline(always)]
    fn test(&mut self, arg: A) -> bool {
        self.pred.test_pair(arg, self.value)
    }
}

/// Shorthand for [`EqualValueByPred::new`].
#[inline]
pub const fn equal_value_by_pred<T: ?Sized, P>(
    value: &T,
    pred: P,
) -> EqualValueByPred<'_, T, P> {
    EqualValueByPred::new(value, pred)
}

/// Tests `*arg == *value` for a borrowed `value`.
///
/// Arguments are taken as `&U`, the form slice iterators yield. For owned
/// arguments, such as the items of a range, use [`EqualValueByPred`] with a
/// comparison written for the owned type.
#[derive(Debug)]
pub struct EqualValue<'a, T: ?Sized> {
    value: &'a T,
}

impl<'a, T: ?Sized> EqualValue<'a, T> {
    /// Binds `value`.
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self { value }
    }

    /// Returns the bound value.
    #[inline]
    pub const fn value(&self) -> &'a T {
        self.value
    }

    /// Returns `true` if `arg` equals the bound value.
    #[inline(always)]
    pub fn matches<U>(&self, arg: &U) -> bool
    where
        U: PartialEq<T> + ?Sized,
    {
        *arg == *self.value
    }
}

impl<T: ?Sized> Clone for EqualValue<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EqualValue<'_, T> {}

impl<T: ?Sized, U> UnaryPredicate<&U> for EqualValue<'_, T>
where
    U: PartialEq<T> + ?Sized,
{
    #[inline(always)]
    fn test(&mut self, arg: &U) -> bool {
        self.matches(arg)
    }
}

/// Shorthand for [`EqualValue::new`].
#[inline]
pub const fn equal_value<T: ?Sized>(value: &T) -> EqualValue<'_, T> {
    EqualValue::new(value)
}

/// Tests `!(*arg == *value)` for a borrowed `value`.
///
/// Arguments are taken as `&U`, like [`EqualValue`].
///
/// Defined as the complement of equality rather than through `!=`, so types
/// with a custom `ne` still behave as the negation of `EqualValue`.
#[derive(Debug)]
pub struct NotEqualValue<'a, T: ?Sized> {
    value: &'a T,
}

impl<'a, T: ?Sized> NotEqualValue<'a, T> {
    /// Binds `value`.
    #[inline]
    pub const fn new(value: &'a T) -> Self {
        Self { value }
    }

    /// Returns the bound value.
    #[inline]
    pub const fn value(&self) -> &'a T {
        self.value
    }

    /// Returns `true` if `arg` does not equal the bound value.
    #[inline(always)]
    pub fn matches<U>(&self, arg: &U) -> bool
    where
        U: PartialEq<T> + ?Sized,
    {
        !(*arg == *self.value)
    }
}

impl<T: ?Sized> Clone for NotEqualValue<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NotEqualValue<'_, T> {}

impl<T: ?Sized, U> UnaryPredicate<&U> for NotEqualValue<'_, T>
where
    U: PartialEq<T> + ?Sized,
{
    #[inline(always)]
    fn test(&mut self, arg: &U) -> bool {
        self.matches(arg)
    }
}

/// Shorthand for [`NotEqualValue::new`].
#[inline]
pub const fn not_equal_value<T: ?Sized>(value: &T) -> NotEqualValue<'_, T> {
    NotEqualValue::new(value)
}
