//! CLI support for the munge-kit binaries.
//!
//! Each binary parses its arguments with `clap` and delegates to the `run`
//! function of its submodule, so command behaviour can be exercised in
//! tests without spawning a process. Only the binaries read the real clock
//! and process streams.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::MungeSettings;
use crate::error::{BirthdayError, DateError};

pub mod days_from_today;
pub mod normalize_phone;
pub mod numbers_ticket;
pub mod upcoming_birthdays;

/// Errors surfaced by the command-line entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A date argument could not be interpreted.
    #[error(transparent)]
    Date(#[from] DateError),
    /// The users document or one of its records is invalid.
    #[error(transparent)]
    Birthday(#[from] BirthdayError),
    /// An input file could not be opened or read.
    #[error("failed to read '{path}': {message}")]
    Io {
        /// Path of the input.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// Writing to the output stream failed.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the I/O error.
        message: String,
    },
}

impl CliError {
    fn io(path: &Path, err: &io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    fn output(err: &io::Error) -> Self {
        Self::Output {
            message: err.to_string(),
        }
    }
}

/// Installs the stderr `tracing` subscriber used by every binary.
///
/// Filtering follows `RUST_LOG`; stdout is left for command output.
pub fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Loads [`MungeSettings`], falling back to defaults when loading fails.
#[must_use]
pub fn load_settings(program: &str) -> MungeSettings {
    match MungeSettings::load_from_iter([OsString::from(program)]) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "settings could not be loaded; using defaults");
            MungeSettings::default()
        }
    }
}

/// Maps a command result to an exit code, reporting errors on stderr.
#[must_use]
pub fn exit_with(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Opens `path` for reading through a handle on its parent directory.
fn open_file(path: &Path) -> Result<cap_std::fs::File, CliError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        CliError::io(
            path,
            &io::Error::new(io::ErrorKind::InvalidInput, "path must name a file"),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| CliError::io(path, &err))?;
    dir.open(Path::new(file_name))
        .map_err(|err| CliError::io(path, &err))
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    let mut file = open_file(path)?;
    let mut contents = String::new();
    io::Read::read_to_string(&mut file, &mut contents).map_err(|err| CliError::io(path, &err))?;
    Ok(contents)
}
