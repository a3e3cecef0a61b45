//! `normalize-phone`: normalizes one phone number per input line.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use super::{CliError, open_file};
use crate::config::MungeSettings;
use crate::phone::normalize_phone;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// `normalize-phone` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "normalize-phone",
    about = "Normalize phone numbers to the international format",
    version
)]
pub struct Args {
    /// Data file or `-` for STDIN.
    #[arg(value_name = "path", default_value = STDIN_PATH)]
    pub data_file: PathBuf,
    /// Country code. Defaults to the configured code.
    #[arg(long)]
    pub country_code: Option<String>,
}

impl Args {
    /// Returns `true` when input should come from standard input.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.data_file == Path::new(STDIN_PATH)
    }
}

/// Opens the configured data file for line-by-line reading.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be opened.
pub fn open_data_file(path: &Path) -> Result<impl BufRead + use<>, CliError> {
    open_file(path).map(BufReader::new)
}

/// Writes the normalized form of every line in `input`.
///
/// Lines are trimmed before normalization.
///
/// # Errors
///
/// Returns [`CliError::Io`] when reading fails and [`CliError::Output`]
/// when writing fails.
pub fn run(
    args: &Args,
    settings: &MungeSettings,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let country_code = args
        .country_code
        .as_deref()
        .unwrap_or_else(|| settings.country_code());

    for read in input.lines() {
        let line = read.map_err(|err| CliError::io(&args.data_file, &err))?;
        writeln!(out, "{}", normalize_phone(line.trim(), country_code))
            .map_err(|err| CliError::output(&err))?;
    }
    Ok(())
}
