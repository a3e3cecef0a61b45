//! Lists users whose congratulation date falls within the lookahead window.
//!
//! The window defaults to `MUNGE_BIRTHDAY_WINDOW_DAYS` (or 7) unless
//! `--days` is given.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mockable::DefaultClock;
use munge_kit::cli::upcoming_birthdays::{Args, run};
use munge_kit::cli::{exit_with, init_tracing, load_settings};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings("upcoming-birthdays");
    exit_with(run(
        &args,
        &settings,
        &DefaultClock,
        &mut io::stdout().lock(),
    ))
}
