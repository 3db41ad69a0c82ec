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

//! # Identity and Unary Operations
//!
//! The `UnaryOp` seam lets algorithm bodies accept either a closure or a named
//! operation such as `NoOp` wherever a transform is expected. `InvokeUnaryOp`
//! adapts any such transform into a "read input, write output" operation,
//! which is the shape transform-style algorithms write their results in.
//!
//! ## Usage
//!
//! ```rust
//! use lanes_core::utils::identity::{InvokeUnaryOp, NoOp};
//!
//! let mut square = InvokeUnaryOp::new(|x: i32| x * x);
//! let mut out = 0;
//! square.call(7, &mut out);
//! assert_eq!(out, 49);
//!
//! let mut copy = InvokeUnaryOp::new(NoOp);
//! let mut dst = String::new();
//! copy.call(String::from("lane"), &mut dst);
//! assert_eq!(dst, "lane");
//! ```

/// A transform applied to one argument.
///
/// Blanket-implemented for every `FnMut(A) -> R`, so closures can be used
/// directly. The call path takes `&mut self` because transforms may carry
/// state that changes on every application (counters, generators).
pub trait UnaryOp<A> {
    /// The type produced by the transform.
    type Output;

    /// Applies the transform to `arg`.
    fn apply(&mut self, arg: A) -> Self::Output;
}

impl<F, A, R> UnaryOp<A> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    #[inline(always)]
    fn apply(&mut self, arg: A) -> R {
        self(arg)
    }
}

/// Returns its argument unchanged.
///
/// The argument is moved in and moved out. A `&T` stays a shared borrow and a
/// `&mut T` stays a mutable borrow of the same place, so no copy is made.
#[inline(always)]
pub const fn identity<T>(value: T) -> T {
    value
}

/// The identity operation as a value.
///
/// Useful where an algorithm takes a transform but the caller wants the
/// elements passed through as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoOp;

impl NoOp {
    /// Returns `value` unchanged.
    #[inline(always)]
    pub fn call<T>(&self, value: T) -> T {
        value
    }
}

impl<A> UnaryOp<A> for NoOp {
    type Output = A;

    #[inline(always)]
    fn apply(&mut self, arg: A) -> A {
        arg
    }
}

impl std::fmt::Display for NoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NoOp")
    }
}

/// Adapts a unary transform into a binary "input, output" operation.
///
/// The adaptor owns its own copy of the transform; state mutated by repeated
/// calls lives in that copy and never aliases the caller's instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvokeUnaryOp<Op> {
    op: Op,
}

impl<Op> InvokeUnaryOp<Op> {
    /// Wraps `op`.
    #[inline]
    pub const fn new(op: Op) -> Self {
        Self { op }
    }

    /// Assigns `op(input)` into `output`.
    ///
    /// The previous value of `output` is dropped in place.
    #[inline(always)]
    pub fn call<I>(&mut self, input: I, output: &mut <Op as UnaryOp<I>>::Output)
    where
        Op: UnaryOp<I>,
    {
        *output = self.op.apply(input);
    }

    /// Returns a shared reference to the wrapped transform.
    #[inline]
    pub fn get_ref(&self) -> &Op {
        &self.op
    }

    /// Consumes the adaptor and returns the wrapped transform.
    #[inline]
    pub fn into_inner(self) -> Op {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts how often it is cloned.
    struct Tracked<'a> {
        clones: &'a Cell<usize>,
        id: u32,
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                clones: self.clones,
                id: self.id,
            }
        }
    }

    #[test]
    fn test_identity_moves_without_cloning() {
        let clones = Cell::new(0);
        let value = Tracked {
            clones: &clones,
            id: 7,
        };

        let out = identity(value);
        assert_eq!(out.id, 7);

        let out = NoOp.call(out);
        assert_eq!(out.id, 7);

        let mut op = NoOp;
        let out = op.apply(out);
        assert_eq!(out.id, 7);

        assert_eq!(clones.get(), 0);
    }

    #[test]
    fn test_identity_preserves_shared_borrow() {
        let clones = Cell::new(0);
        let value = Tracked {
            clones: &clones,
            id: 1,
        };

        let r = identity(&value);
        assert!(std::ptr::eq(r, &value));

        let r = NoOp.call(&value);
        assert!(std::ptr::eq(r, &value));
        assert_eq!(clones.get(), 0);
    }

    #[test]
    fn test_identity_preserves_mutable_borrow() {
        let mut value = vec![1, 2, 3];
        let addr = &value as *const Vec<i32>;

        let r = NoOp.call(&mut value);
        assert!(std::ptr::eq(&*r, addr));
        r.push(4);

        assert_eq!(value, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_invoke_unary_op_assigns_result() {
        let mut op = InvokeUnaryOp::new(|x: i32| x + 1);
        let mut out = 0;

        op.call(41, &mut out);
        assert_eq!(out, 42);

        op.call(-1, &mut out);
        assert_eq!(out, 0);
    }

    #[test]
    fn test_invoke_unary_op_with_no_op_copies_through() {
        let input = [3, 1, 4, 1, 5];
        let mut output = [0; 5];
        let mut op = InvokeUnaryOp::new(NoOp);

        for (x, y) in input.iter().zip(output.iter_mut()) {
            op.call(*x, y);
        }
        assert_eq!(output, input);
    }

    #[test]
    fn test_invoke_unary_op_keeps_state_across_calls() {
        let mut counter = 0;
        let mut op = InvokeUnaryOp::new(move |x: i32| {
            counter += 1;
            x * counter
        });

        let mut out = 0;
        op.call(10, &mut out);
        assert_eq!(out, 10);
        op.call(10, &mut out);
        assert_eq!(out, 20);
        op.call(10, &mut out);
        assert_eq!(out, 30);
    }

    #[test]
    fn test_invoke_unary_op_owns_private_copy() {
        #[derive(Clone)]
        struct Counter {
            calls: usize,
        }

        impl UnaryOp<u8> for Counter {
            type Output = usize;

            fn apply(&mut self, _arg: u8) -> usize {
                self.calls += 1;
                self.calls
            }
        }

        let original = Counter { calls: 0 };
        let mut op = InvokeUnaryOp::new(original.clone());
        let mut out = 0;
        op.call(0, &mut out);
        op.call(0, &mut out);

        assert_eq!(out, 2);
        assert_eq!(op.get_ref().calls, 2);
        assert_eq!(original.calls, 0);
        assert_eq!(op.into_inner().calls, 2);
    }

    #[test]
    fn test_invoke_unary_op_drops_previous_output() {
        let mut op = InvokeUnaryOp::new(|s: &str| s.to_uppercase());
        let mut out = String::from("stale");

        op.call("lane", &mut out);
        assert_eq!(out, "LANE");
    }

    #[test]
    fn test_no_op_display() {
        assert_eq!(format!("{}", NoOp), "NoOp");
    }
}
