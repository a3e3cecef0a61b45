//! `numbers-ticket`: prints a sorted lottery ticket.

use std::io::Write;

use clap::Parser;
use tracing::info;

use super::CliError;
use crate::ticket::get_numbers_ticket;

/// `numbers-ticket` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "numbers-ticket",
    about = "Draw unique random numbers within a range",
    version
)]
pub struct Args {
    /// Minimum number.
    #[arg(allow_negative_numbers = true)]
    pub min: i64,
    /// Maximum number.
    #[arg(allow_negative_numbers = true)]
    pub max: i64,
    /// Quantity of numbers.
    pub quantity: usize,
    /// Random seed for a reproducible draw.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Draws the ticket and prints it as `[a, b, c]`.
///
/// Invalid bounds print `[]` and still succeed.
///
/// # Errors
///
/// Returns [`CliError::Output`] when writing fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let ticket = get_numbers_ticket(args.min, args.max, args.quantity, args.seed);
    info!(drawn = ticket.len(), seeded = args.seed.is_some(), "ticket drawn");
    writeln!(out, "{}", format_ticket(&ticket)).map_err(|err| CliError::output(&err))
}

fn format_ticket(ticket: &[i64]) -> String {
    let numbers: Vec<String> = ticket.iter().map(i64::to_string).collect();
    format!("[{}]", numbers.join(", "))
}
