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

//! # Exception Boundary
//!
//! Every parallel algorithm entry point runs its body through
//! [`except_handler`], which enforces a two-outcome failure contract:
//!
//! - **Allocation failure** is the one recoverable failure. Algorithm bodies
//!   signal it by panicking with an [`AllocError`] payload
//!   ([`raise_alloc_error`], [`reserve_or_raise`]); the boundary lets that
//!   panic continue to the caller with the very same payload.
//! - **Anything else** aborts the process. Once work has fanned out across
//!   concurrently running tasks there is no single place where an arbitrary
//!   panic could be caught and given a meaning, so the boundary does not try:
//!   it does not recover, translate or log, it calls `std::process::abort`.
//!
//! Panics raised inside `rayon::join` or parallel iterators are re-raised by
//! rayon on the joining thread with their original payload, so fan-out does not
//! change what the boundary sees.
//!
//! Only failures signalled through [`raise_alloc_error`], [`reserve_or_raise`]
//! or a `try_reserve` error converted into [`AllocError`] are seen as
//! allocation failure. Out-of-memory inside infallible std allocation goes
//! through `handle_alloc_error` and aborts before the boundary runs, and std's
//! `capacity overflow` panic carries a string payload, so the boundary aborts
//! on it like on any other panic.
//!
//! Under `panic = "abort"` every panic terminates the process before the
//! boundary runs. The contract still holds, but allocation failure stops being
//! observable.
//!
//! ## Usage
//!
//! ```rust
//! use lanes_core::exception::{AllocError, except_handler, reserve_or_raise};
//!
//! let squares = except_handler(|| {
//!     let mut out = Vec::new();
//!     reserve_or_raise(&mut out, 4);
//!     out.extend((1..=4).map(|x: u64| x * x));
//!     out
//! });
//! assert_eq!(squares, [1, 4, 9, 16]);
//!
//! // Allocation failure reaches the caller as a panic carrying `AllocError`.
//! let caught = std::panic::catch_unwind(|| {
//!     except_handler(|| {
//!         let mut huge: Vec<u64> = Vec::new();
//!         reserve_or_raise(&mut huge, usize::MAX);
//!     })
//! });
//! let payload = caught.unwrap_err();
//! assert!(payload.downcast_ref::<AllocError>().is_some());
//! ```

use std::any::Any;
use std::collections::TryReserveError;
use std::panic::{self, AssertUnwindSafe};

/// The allocation-failure condition.
///
/// Carries the number of bytes that were requested when it is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AllocError {
    requested: Option<usize>,
}

impl AllocError {
    /// An allocation failure of unknown size.
    #[inline]
    pub const fn new() -> Self {
        Self { requested: None }
    }

    /// An allocation failure for a request of `bytes` bytes.
    #[inline]
    pub const fn with_size(bytes: usize) -> Self {
        Self {
            requested: Some(bytes),
        }
    }

    /// Returns the size of the failed request in bytes, if known.
    #[inline]
    pub const fn requested_bytes(&self) -> Option<usize> {
        self.requested
    }
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.requested {
            Some(bytes) => write!(f, "memory allocation of {bytes} bytes failed"),
            None => write!(f, "memory allocation failed"),
        }
    }
}

impl std::error::Error for AllocError {}

impl From<TryReserveError> for AllocError {
    fn from(_: TryReserveError) -> Self {
        Self::new()
    }
}

/// Raises `err` as a panic with an [`AllocError`] payload.
///
/// This is how algorithm bodies report allocation failure; [`except_handler`]
/// lets it through and [`try_except_handler`] turns it into `Err`.
#[cold]
#[track_caller]
pub fn raise_alloc_error(err: AllocError) -> ! {
    panic::panic_any(err)
}

/// Reserves room for `additional` more elements in `buf`, or raises
/// [`AllocError`] if the allocator refuses or the capacity would overflow.
#[inline]
#[track_caller]
pub fn reserve_or_raise<T>(buf: &mut Vec<T>, additional: usize) {
    if buf.try_reserve(additional).is_err() {
        let bytes = additional.saturating_mul(std::mem::size_of::<T>());
        raise_alloc_error(AllocError::with_size(bytes));
    }
}

/// Runs `f` under the library's failure contract.
///
/// Returns `f`'s result unchanged on success. A panic carrying an
/// [`AllocError`] is resumed with the original payload; any other panic aborts
/// the process.
///
/// `f` is not required to be unwind safe: the only unwinding that leaves this
/// function is the one `f` started, resumed unchanged.
#[inline]
pub fn except_handler<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) if is_alloc_failure(&*payload) => panic::resume_unwind(payload),
        Err(_) => std::process::abort(),
    }
}

/// Result-returning flavour of [`except_handler`].
///
/// An `Err(AllocError)` returned by `f` is passed through, and a panic carrying
/// an [`AllocError`] is converted into `Err` with the same value. Any other
/// panic aborts the process.
#[inline]
pub fn try_except_handler<F, R>(f: F) -> Result<R, AllocError>
where
    F: FnOnce() -> Result<R, AllocError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => match payload.downcast::<AllocError>() {
            Ok(err) => Err(*err),
            Err(_) => std::process::abort(),
        },
    }
}

#[inline]
fn is_alloc_failure(payload: &(dyn Any + Send)) -> bool {
    payload.is::<AllocError>()
}
