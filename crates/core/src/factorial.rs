//! Factorial by linear recursion
//!
//! The simplest recursion shape: one call frame per decrement of `n`, one
//! multiplication per unwind step.

use crate::trace::TraceEvent;
use crate::RecursionError;

const FUNCTION: &str = "factorial";

/// Largest n whose factorial fits in a u64.
pub const MAX_U64_INPUT: i64 = 20;

/// Compute n! recursively.
///
/// Base case: `factorial(0) = factorial(1) = 1`.
/// Recursive case: `factorial(n) = n * factorial(n - 1)`.
///
/// # Returns
/// The factorial of `n`, `RecursionError::NegativeInput` for `n < 0`, or
/// `RecursionError::Overflow` once the product no longer fits in a u64
/// (first hit at n = 21).
pub fn factorial(n: i64) -> Result<u64, RecursionError> {
    factorial_traced(n, &mut |_| {})
}

/// Compute n! recursively, reporting each call frame to `trace`.
///
/// Events arrive in execution order: `Enter` on the way down, then a single
/// `BaseCase` at the bottom, then one `Computed` per unwind step on the way
/// back up.
pub fn factorial_traced(
    n: i64,
    trace: &mut dyn FnMut(TraceEvent),
) -> Result<u64, RecursionError> {
    trace(TraceEvent::Enter { function: FUNCTION, n });

    if n < 0 {
        return Err(RecursionError::NegativeInput { function: FUNCTION, n });
    }

    // 21! already overflows a u64; bail here instead of recursing n frames
    // deep only to fail on the unwind.
    if n > MAX_U64_INPUT {
        return Err(RecursionError::Overflow { function: FUNCTION, n });
    }

    if n <= 1 {
        trace(TraceEvent::BaseCase {
            function: FUNCTION,
            n,
            value: 1,
        });
        return Ok(1);
    }

    let previous = factorial_traced(n - 1, trace)?;
    let value = (n as u64)
        .checked_mul(previous)
        .ok_or(RecursionError::Overflow { function: FUNCTION, n })?;

    trace(TraceEvent::Computed {
        function: FUNCTION,
        n,
        value,
    });

    Ok(value)
}
