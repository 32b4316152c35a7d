//! Core library for rectools
//!
//! This crate implements the **Functional Core** of the rectools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The rectools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`rectools_core`** (this crate): Pure recursive computations with zero I/O
//! - **`rectools`**: Argument parsing, bounding, and console rendering (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with direct assertions, no console capture required
//!
//! The classic tutorial versions of these algorithms print their call trace as
//! they recurse. Here the trace is data: each function has a `*_traced` form
//! that hands [`trace::TraceEvent`] values to a caller-supplied sink, so the
//! computation stays independently testable and the shell decides whether
//! anything reaches a terminal.
//!
//! # Module Organization
//!
//! - [`factorial`]: n! by linear recursion
//! - [`fibonacci`]: naive double recursion, plus a memoized variant for comparison
//! - [`hanoi`]: Tower of Hanoi move-sequence generation
//! - [`trace`]: call-trace events shared by the traced entry points
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use rectools_core::factorial::factorial_traced;
//! use rectools_core::trace::TraceEvent;
//!
//! let mut events = Vec::new();
//! let value = factorial_traced(5, &mut |event| events.push(event)).unwrap();
//!
//! assert_eq!(value, 120);
//! assert!(matches!(events[0], TraceEvent::Enter { n: 5, .. }));
//! ```

use thiserror::Error;

pub mod factorial;
pub mod fibonacci;
pub mod hanoi;
pub mod trace;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecursionError {
    #[error("{function} is not defined for negative numbers (got {n})")]
    NegativeInput { function: &'static str, n: i64 },
    #[error("{function}({n}) does not fit in a u64")]
    Overflow { function: &'static str, n: i64 },
}
