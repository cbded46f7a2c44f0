use std::process::ExitCode;

use clap::Parser;

mod filter;

use filter::FilterArgs;
use mpifilter_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about = "Filter mpistat data")]
pub struct Cli {
    #[command(flatten)]
    pub filter: FilterArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    filter::run(cli.filter)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
