//! Fibonacci numbers by naive double recursion
//!
//! The naive form is deliberately unmemoized: the point of the demonstration
//! is the exponential call tree, so `fibonacci(n)` really does recompute
//! every subproblem. [`fibonacci_memoized`] exists as a separate variant for
//! comparing values (and runtimes) against the naive form, never as a
//! drop-in replacement for it.

use std::collections::HashMap;

use crate::trace::TraceEvent;
use crate::RecursionError;

const FUNCTION: &str = "fibonacci";

/// Largest index whose Fibonacci number fits in a u64.
pub const MAX_U64_INDEX: i64 = 93;

/// Compute the nth Fibonacci number by naive double recursion.
///
/// Base cases: `fibonacci(0) = 0`, `fibonacci(1) = 1`.
/// Recursive case: `fibonacci(n) = fibonacci(n - 1) + fibonacci(n - 2)`.
///
/// Runs in exponential time. Callers are expected to keep `n` small; the
/// CLI refuses anything above 35 on this path.
pub fn fibonacci(n: i64) -> Result<u64, RecursionError> {
    fibonacci_traced(n, &mut |_| {})
}

/// Compute the nth Fibonacci number, reporting each call frame to `trace`.
///
/// The `n - 1` subtree is fully explored before the `n - 2` subtree, so the
/// event stream makes the repeated subproblems visible.
pub fn fibonacci_traced(
    n: i64,
    trace: &mut dyn FnMut(TraceEvent),
) -> Result<u64, RecursionError> {
    trace(TraceEvent::Enter { function: FUNCTION, n });

    if n < 0 {
        return Err(RecursionError::NegativeInput { function: FUNCTION, n });
    }

    if n > MAX_U64_INDEX {
        return Err(RecursionError::Overflow { function: FUNCTION, n });
    }

    if n <= 1 {
        let value = n as u64;
        trace(TraceEvent::BaseCase {
            function: FUNCTION,
            n,
            value,
        });
        return Ok(value);
    }

    let left = fibonacci_traced(n - 1, trace)?;
    let right = fibonacci_traced(n - 2, trace)?;
    let value = left
        .checked_add(right)
        .ok_or(RecursionError::Overflow { function: FUNCTION, n })?;

    trace(TraceEvent::Computed {
        function: FUNCTION,
        n,
        value,
    });

    Ok(value)
}

/// Compute the nth Fibonacci number with memoization.
///
/// Linear in `n` instead of exponential, so the whole u64 range is
/// reachable: fibonacci(93) is the last value that fits, fibonacci(94)
/// fails with `RecursionError::Overflow`.
pub fn fibonacci_memoized(n: i64) -> Result<u64, RecursionError> {
    if n < 0 {
        return Err(RecursionError::NegativeInput { function: FUNCTION, n });
    }

    // The memo recursion is n frames deep; past the last index that fits in
    // a u64 there is nothing to compute, so refuse before descending.
    if n > MAX_U64_INDEX {
        return Err(RecursionError::Overflow { function: FUNCTION, n });
    }

    let mut memo = HashMap::new();
    fibonacci_memo(n, &mut memo)
}

fn fibonacci_memo(n: i64, memo: &mut HashMap<i64, u64>) -> Result<u64, RecursionError> {
    if n <= 1 {
        return Ok(n as u64);
    }

    if let Some(&value) = memo.get(&n) {
        return Ok(value);
    }

    let left = fibonacci_memo(n - 1, memo)?;
    let right = fibonacci_memo(n - 2, memo)?;
    let value = left
        .checked_add(right)
        .ok_or(RecursionError::Overflow { function: FUNCTION, n })?;

    memo.insert(n, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values for n in 0..=15.
    const REFERENCE: [u64; 16] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610];

    // ============================================================================
    // fibonacci (naive) tests
    // ============================================================================

    #[test]
    fn test_fibonacci_matches_reference_sequence() {
        for (n, expected) in REFERENCE.iter().enumerate() {
            assert_eq!(fibonacci(n as i64).unwrap(), *expected);
        }
    }

    #[test]
    fn test_fibonacci_of_seven() {
        assert_eq!(fibonacci(7).unwrap(), 13);
    }

    #[test]
    fn test_fibonacci_negative_input() {
        assert_eq!(
            fibonacci(-3),
            Err(RecursionError::NegativeInput {
                function: "fibonacci",
                n: -3
            })
        );
    }

    #[test]
    fn test_fibonacci_trace_order() {
        let mut events = Vec::new();
        let value = fibonacci_traced(2, &mut |event| events.push(event)).unwrap();

        assert_eq!(value, 1);
        assert_eq!(
            events,
            vec![
                TraceEvent::Enter {
                    function: "fibonacci",
                    n: 2
                },
                TraceEvent::Enter {
                    function: "fibonacci",
                    n: 1
                },
                TraceEvent::BaseCase {
                    function: "fibonacci",
                    n: 1,
                    value: 1
                },
                TraceEvent::Enter {
                    function: "fibonacci",
                    n: 0
                },
                TraceEvent::BaseCase {
                    function: "fibonacci",
                    n: 0,
                    value: 0
                },
                TraceEvent::Computed {
                    function: "fibonacci",
                    n: 2,
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn test_fibonacci_trace_revisits_subproblems() {
        // fibonacci(4) computes fibonacci(2) twice; the trace shows both.
        let mut entries_for_two = 0;
        fibonacci_traced(4, &mut |event| {
            if matches!(event, TraceEvent::Enter { n: 2, .. }) {
                entries_for_two += 1;
            }
        })
        .unwrap();

        assert_eq!(entries_for_two, 2);
    }

    // ============================================================================
    // fibonacci_memoized tests
    // ============================================================================

    #[test]
    fn test_memoized_agrees_with_naive() {
        for n in 0..=20 {
            assert_eq!(fibonacci_memoized(n).unwrap(), fibonacci(n).unwrap());
        }
    }

    #[test]
    fn test_memoized_reaches_largest_u64_fibonacci() {
        assert_eq!(fibonacci_memoized(93).unwrap(), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_memoized_overflow() {
        assert_eq!(
            fibonacci_memoized(94),
            Err(RecursionError::Overflow {
                function: "fibonacci",
                n: 94
            })
        );
    }

    #[test]
    fn test_memoized_overflow_rejected_before_recursing() {
        assert_eq!(
            fibonacci_memoized(10_000),
            Err(RecursionError::Overflow {
                function: "fibonacci",
                n: 10_000
            })
        );
    }

    #[test]
    fn test_memoized_negative_input() {
        assert_eq!(
            fibonacci_memoized(-1),
            Err(RecursionError::NegativeInput {
                function: "fibonacci",
                n: -1
            })
        );
    }
}
