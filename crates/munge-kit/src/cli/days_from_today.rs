//! `days-from-today`: prints the day offset of a date from now.

use std::io::Write;

use clap::Parser;
use mockable::Clock;

use super::CliError;
use crate::day_offset::days_from_today;

/// `days-from-today` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "days-from-today",
    about = "Print the number of days between a date and today",
    version
)]
pub struct Args {
    /// Date in format YYYY-MM-DD.
    pub date: String,
}

/// Prints the offset of `args.date` from the clock's local time.
///
/// # Errors
///
/// Returns [`CliError::Date`] for malformed dates and
/// [`CliError::Output`] when writing fails.
pub fn run(args: &Args, clock: &dyn Clock, out: &mut impl Write) -> Result<(), CliError> {
    let reference = clock.local().naive_local();
    let offset = days_from_today(args.date.as_str(), reference)?;
    writeln!(out, "{offset}").map_err(|err| CliError::output(&err))
}
