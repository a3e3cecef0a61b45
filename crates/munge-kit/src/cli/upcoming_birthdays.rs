//! `upcoming-birthdays`: lists users to congratulate soon.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use mockable::Clock;
use tracing::info;

use super::{CliError, read_to_string};
use crate::birthdays::{BIRTHDAY_FORMAT, load_users, upcoming_reminders};
use crate::config::MungeSettings;

/// `upcoming-birthdays` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "upcoming-birthdays",
    about = "List users whose birthday falls within the next few days",
    version
)]
pub struct Args {
    /// Users database JSON file.
    #[arg(value_name = "path")]
    pub users_db_json: PathBuf,
    /// Days to check. Defaults to the configured window.
    #[arg(long)]
    pub days: Option<u32>,
}

/// Prints one `name  date (note)` line per upcoming birthday.
///
/// Lines are written as reminders are computed, so records before a
/// malformed one are still printed.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read,
/// [`CliError::Birthday`] for invalid JSON or records, and
/// [`CliError::Output`] when writing fails.
pub fn run(
    args: &Args,
    settings: &MungeSettings,
    clock: &dyn Clock,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let contents = read_to_string(&args.users_db_json)?;
    let users = load_users(&contents)?;
    let window = args.days.unwrap_or_else(|| settings.birthday_window_days());
    let today = clock.local().date_naive();

    let mut reported = 0_usize;
    for entry in upcoming_reminders(&users, window, today) {
        let reminder = entry?;
        let date = reminder.congratulation_date.format(BIRTHDAY_FORMAT).to_string();
        writeln!(out, "{:<20} {date:>10} ({})", reminder.name, reminder.note)
            .map_err(|err| CliError::output(&err))?;
        reported += 1;
    }

    info!(users = users.len(), reported, window, %today, "birthday reminders listed");
    Ok(())
}
