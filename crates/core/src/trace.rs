//! Call-trace events for the traced recursion entry points
//!
//! The tutorial form of these algorithms narrates itself: one line on entry,
//! one line per base case, one line per computed return. This module keeps
//! that narration as data so the core stays pure. A traced function pushes
//! events into a caller-supplied `FnMut(TraceEvent)` sink; the shell chooses
//! between streaming them to the console, embedding them in JSON output, or
//! dropping them.

use serde::Serialize;

/// One step in a recursive computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A call frame was entered with argument `n`.
    Enter { function: &'static str, n: i64 },
    /// A base case resolved directly to `value`.
    BaseCase {
        function: &'static str,
        n: i64,
        value: u64,
    },
    /// A recursive case combined its sub-results into `value`.
    Computed {
        function: &'static str,
        n: i64,
        value: u64,
    },
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEvent::Enter { function, n } => write!(f, "Entering {}({})", function, n),
            TraceEvent::BaseCase { function, n, value } => {
                write!(f, "Base case reached: {}({}) = {}", function, n, value)
            }
            TraceEvent::Computed { function, n, value } => {
                write!(f, "Computed {}({}) = {}", function, n, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_enter() {
        let event = TraceEvent::Enter {
            function: "factorial",
            n: 5,
        };
        assert_eq!(event.to_string(), "Entering factorial(5)");
    }

    #[test]
    fn test_display_base_case() {
        let event = TraceEvent::BaseCase {
            function: "fibonacci",
            n: 0,
            value: 0,
        };
        assert_eq!(event.to_string(), "Base case reached: fibonacci(0) = 0");
    }

    #[test]
    fn test_display_computed() {
        let event = TraceEvent::Computed {
            function: "factorial",
            n: 5,
            value: 120,
        };
        assert_eq!(event.to_string(), "Computed factorial(5) = 120");
    }
}
