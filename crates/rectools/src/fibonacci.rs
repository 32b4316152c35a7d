use crate::prelude::{println, *};
use colored::Colorize;
use rectools_core::fibonacci::{fibonacci_memoized, fibonacci_traced};
use rectools_core::trace::TraceEvent;
use serde::Serialize;

/// Naive double recursion above this index takes longer than anyone wants
/// to wait for a demonstration.
const NAIVE_LIMIT: i64 = 35;

#[derive(Debug, clap::Parser)]
#[command(name = "fibonacci")]
#[command(about = "Compute the nth Fibonacci number by naive double recursion")]
#[command(allow_negative_numbers = true)]
pub struct App {
    /// Index in the Fibonacci sequence
    n: i64,

    /// Print every recursive call and return as it happens
    #[arg(short, long)]
    trace: bool,

    /// Use the memoized variant instead of naive recursion
    #[arg(short, long)]
    memoized: bool,

    /// Print the whole sequence up to n as a table
    #[arg(short, long)]
    sequence: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct FibonacciOutput {
    pub n: i64,
    pub value: u64,
    pub memoized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_calls: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEvent>>,
}

#[derive(Debug, Serialize)]
pub struct SequenceEntry {
    pub n: i64,
    pub value: u64,
}

#[derive(Debug, Serialize)]
pub struct SequenceOutput {
    pub count: usize,
    pub values: Vec<SequenceEntry>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Calculating Fibonacci number at index {}", app.n);
        println!();
    }

    if app.trace && app.memoized {
        return Err(eyre!(
            "--trace only applies to the naive recursion; drop --memoized to see the call tree"
        ));
    }

    if app.trace && app.sequence {
        return Err(eyre!("--trace cannot be combined with --sequence"));
    }

    if app.sequence {
        return print_sequence(&app);
    }

    if app.memoized {
        let value = fibonacci_memoized(app.n)?;
        return output_value(&app, value, None, None);
    }

    if app.n > NAIVE_LIMIT {
        return Err(eyre!(
            "fibonacci({}) by naive recursion is past the practical limit of {}; rerun with --memoized",
            app.n,
            NAIVE_LIMIT
        ));
    }

    let stream_trace = app.trace && !app.json;
    let mut events = Vec::new();
    let value = fibonacci_traced(app.n, &mut |event| {
        if stream_trace {
            println!("{}", event);
        }
        events.push(event);
    })?;

    if stream_trace {
        println!();
    }

    let recursive_calls = events
        .iter()
        .filter(|event| matches!(event, TraceEvent::Enter { .. }))
        .count();

    output_value(
        &app,
        value,
        Some(recursive_calls),
        app.trace.then_some(events),
    )
}

fn output_value(
    app: &App,
    value: u64,
    recursive_calls: Option<usize>,
    trace: Option<Vec<TraceEvent>>,
) -> Result<()> {
    if app.json {
        let output = FibonacciOutput {
            n: app.n,
            value,
            memoized: app.memoized,
            recursive_calls,
            trace,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Index".bold().cyan(), app.n.to_string()]);
    table.add_row(prettytable::row![
        "Fibonacci".bold().cyan(),
        value.to_string().bright_white()
    ]);
    if let Some(calls) = recursive_calls {
        table.add_row(prettytable::row![
            "Recursive calls".bold().cyan(),
            calls.to_string().bright_black()
        ]);
    }
    if app.memoized {
        table.add_row(prettytable::row![
            "Variant".bold().cyan(),
            "memoized".bright_yellow().to_string()
        ]);
    }
    table.printstd();

    Ok(())
}

fn print_sequence(app: &App) -> Result<()> {
    // Rejects a negative index before the range below silently turns empty.
    fibonacci_memoized(app.n)?;

    let mut values = Vec::new();
    for n in 0..=app.n {
        values.push(SequenceEntry {
            n,
            value: fibonacci_memoized(n)?,
        });
    }

    if app.json {
        let output = SequenceOutput {
            count: values.len(),
            values,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["n".bold().cyan(), "fibonacci(n)".bold().cyan()]);
    for entry in &values {
        table.add_row(prettytable::row![
            entry.n.to_string(),
            entry.value.to_string().bright_white()
        ]);
    }
    table.printstd();

    Ok(())
}
