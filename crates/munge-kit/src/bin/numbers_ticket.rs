//! Draws a sorted lottery ticket of unique numbers.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use munge_kit::cli::numbers_ticket::{Args, run};
use munge_kit::cli::{exit_with, init_tracing};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    exit_with(run(&args, &mut io::stdout().lock()))
}
