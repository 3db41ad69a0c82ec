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

//! # Lanes Core
//!
//! Foundational adaptors and the failure contract underneath the lanes
//! parallel algorithms. Nothing in this crate schedules work or owns data;
//! it shapes the callables that algorithm bodies pass around and decides
//! what happens when one of them panics.
//!
//! ## Modules
//!
//! - `functional`: Predicate trait seam (`UnaryPredicate`, `BinaryPredicate`)
//!   and the adaptors built on it: negation (`NotPred`), argument reordering
//!   (`ReorderPred`) and bound-value tests (`EqualValueByPred`, `EqualValue`,
//!   `NotEqualValue`).
//! - `utils`: The identity operation (`NoOp`), the `UnaryOp` seam and the
//!   unary-to-binary adaptor (`InvokeUnaryOp`).
//! - `algorithm`: Closer-position selection used by outward scans from a
//!   pivot (`cmp_iterators_by_values`, `cmp_indices_by_values`).
//! - `exception`: The two-outcome failure boundary (`except_handler`):
//!   allocation failure (`AllocError`) propagates, anything else aborts.
//!
//! ## Purpose
//!
//! Parallel algorithm bodies are written once against these primitives, so
//! "not P", "P with swapped arguments" and "equals this value" never need a
//! hand-written callable per call site, and every entry point enforces the
//! same failure semantics regardless of how its work fanned out.

pub mod algorithm;
pub mod exception;
pub mod functional;
pub mod utils;
