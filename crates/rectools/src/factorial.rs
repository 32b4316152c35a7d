use crate::prelude::{println, *};
use colored::Colorize;
use rectools_core::factorial::factorial_traced;
use rectools_core::trace::TraceEvent;
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "factorial")]
#[command(about = "Compute n! by linear recursion")]
#[command(allow_negative_numbers = true)]
pub struct App {
    /// Number to take the factorial of
    n: i64,

    /// Print every recursive call and return as it happens
    #[arg(short, long)]
    trace: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct FactorialOutput {
    pub n: i64,
    pub value: u64,
    pub recursive_calls: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEvent>>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Calculating factorial of {}", app.n);
        println!();
    }

    let stream_trace = app.trace && !app.json;
    let mut events = Vec::new();
    let value = factorial_traced(app.n, &mut |event| {
        if stream_trace {
            println!("{}", event);
        }
        events.push(event);
    })?;

    let recursive_calls = events
        .iter()
        .filter(|event| matches!(event, TraceEvent::Enter { .. }))
        .count();

    if app.json {
        let output = FactorialOutput {
            n: app.n,
            value,
            recursive_calls,
            trace: app.trace.then_some(events),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if stream_trace {
        println!();
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Input".bold().cyan(), app.n.to_string()]);
    table.add_row(prettytable::row![
        "Factorial".bold().cyan(),
        value.to_string().bright_white()
    ]);
    table.add_row(prettytable::row![
        "Recursive calls".bold().cyan(),
        recursive_calls.to_string().bright_black()
    ]);
    table.printstd();

    Ok(())
}
