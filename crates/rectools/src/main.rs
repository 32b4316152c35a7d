#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod factorial;
mod fibonacci;
mod hanoi;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classic recursive algorithms with visible call traces"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "RECTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Compute n! by linear recursion
    Factorial(crate::factorial::App),

    /// Compute the nth Fibonacci number by naive double recursion
    Fibonacci(crate::fibonacci::App),

    /// Solve the Tower of Hanoi puzzle and print the move sequence
    Hanoi(crate::hanoi::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Factorial(sub_app) => crate::factorial::run(sub_app, app.global),
        SubCommands::Fibonacci(sub_app) => crate::fibonacci::run(sub_app, app.global),
        SubCommands::Hanoi(sub_app) => crate::hanoi::run(sub_app, app.global),
    }
}
