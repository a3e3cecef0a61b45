//! Prints the signed number of days between a date and the current time.
//!
//! Argument parsing and output live in `munge_kit::cli::days_from_today`;
//! this binary only supplies the real clock and standard streams.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mockable::DefaultClock;
use munge_kit::cli::days_from_today::{Args, run};
use munge_kit::cli::{exit_with, init_tracing};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    exit_with(run(&args, &DefaultClock, &mut io::stdout().lock()))
}
