use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use rectools_core::hanoi::{move_count, solve, Move};
use serde::Serialize;

/// 2^20 - 1 moves is already more than a terminal full of output; refuse
/// anything bigger before allocating it.
const MAX_DISKS: i32 = 20;

#[derive(Debug, clap::Parser)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi puzzle and print the move sequence")]
#[command(allow_negative_numbers = true)]
pub struct App {
    /// Number of disks on the source peg
    n: i32,

    /// Label of the peg the disks start on
    #[arg(long, default_value = "A")]
    source: char,

    /// Label of the peg the disks must end on
    #[arg(long, default_value = "C")]
    destination: char,

    /// Label of the spare peg
    #[arg(long, default_value = "B")]
    auxiliary: char,

    /// Print the moves as a table instead of one line per move
    #[arg(long)]
    table: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct HanoiOutput {
    pub disks: i32,
    pub source: char,
    pub destination: char,
    pub auxiliary: char,
    pub total_moves: usize,
    pub moves: Vec<Move>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if app.source == app.destination
        || app.source == app.auxiliary
        || app.destination == app.auxiliary
    {
        return Err(eyre!(
            "peg labels must be distinct (got {}, {}, {})",
            app.source,
            app.destination,
            app.auxiliary
        ));
    }

    if app.n > MAX_DISKS {
        return Err(eyre!(
            "{} disks would take {} moves; the practical limit is {} disks",
            app.n,
            move_count(app.n),
            MAX_DISKS
        ));
    }

    if global.verbose {
        println!(
            "Solving Tower of Hanoi for {} disks ({} -> {}, spare {})",
            app.n, app.source, app.destination, app.auxiliary
        );
        println!();
    }

    if app.n <= 0 {
        eprintln!("Number of disks must be greater than 0.");
        return Ok(());
    }

    let moves = solve(app.n, app.source, app.destination, app.auxiliary);

    if app.json {
        let output = HanoiOutput {
            disks: app.n,
            source: app.source,
            destination: app.destination,
            auxiliary: app.auxiliary,
            total_moves: moves.len(),
            moves,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "=".repeat(80));
    println!("TOWER OF HANOI ({} disks)", app.n);
    println!("{}", "=".repeat(80));
    println!();

    if app.table {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "#".bold().cyan(),
            "Disk".bold().cyan(),
            "From".bold().cyan(),
            "To".bold().cyan()
        ]);
        for (index, step) in moves.iter().enumerate() {
            table.add_row(prettytable::row![
                (index + 1).to_string().bright_black(),
                step.disk.to_string(),
                step.from.to_string(),
                step.to.to_string()
            ]);
        }
        table.printstd();
    } else {
        for step in &moves {
            println!("{}", step);
        }
    }

    println!();
    println!(
        "Solved in {} moves (the minimum for {} disks).",
        moves.len().to_string().bright_white(),
        app.n
    );

    Ok(())
}
