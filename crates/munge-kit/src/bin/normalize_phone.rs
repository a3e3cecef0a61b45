//! Normalizes phone numbers read from a file or standard input.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use munge_kit::MungeSettings;
use munge_kit::cli::normalize_phone::{Args, open_data_file, run};
use munge_kit::cli::{CliError, exit_with, init_tracing, load_settings};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings("normalize-phone");
    exit_with(normalize(&args, &settings))
}

fn normalize(args: &Args, settings: &MungeSettings) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    if args.reads_stdin() {
        run(args, settings, io::stdin().lock(), &mut out)
    } else {
        let input = open_data_file(&args.data_file)?;
        run(args, settings, input, &mut out)
    }
}
