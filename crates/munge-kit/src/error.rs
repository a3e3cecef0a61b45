//! Error types for the munge-kit crate.
//!
//! Each concern gets its own semantic enum, derived with `thiserror`, so
//! callers can match on the failure without parsing messages.

use thiserror::Error;

/// Errors raised while computing a day offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The date string does not match `YYYY-MM-DD`.
    #[error("Invalid date format: '{value}'")]
    InvalidFormat {
        /// The rejected input.
        value: String,
    },

    /// The input is neither a date-like value nor a string.
    #[error("Invalid input type: expected a date or string, found {kind}")]
    InvalidInputType {
        /// Description of the type that was received.
        kind: String,
    },
}

/// Errors raised while computing upcoming birthdays.
///
/// Record-level errors carry enough context to locate the offending entry
/// in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthdayError {
    /// A record is not an object with string `name` and `birthday` keys.
    #[error("Invalid user format at index {index}")]
    InvalidUserFormat {
        /// Position of the record in the input.
        index: usize,
    },

    /// A birthday does not match `YYYY.MM.DD`.
    #[error("Invalid date format: '{value}'")]
    InvalidDateFormat {
        /// The rejected birthday string.
        value: String,
    },

    /// The birthday has no occurrence in the reference year (29 February).
    #[error("birthday {month:02}.{day:02} does not occur in {year}")]
    NoOccurrence {
        /// Birth month.
        month: u32,
        /// Birth day of month.
        day: u32,
        /// Reference year without that date.
        year: i32,
    },

    /// The users document is not valid JSON.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// Parser error message.
        message: String,
    },

    /// The users document is valid JSON but not an array.
    #[error("users document must be a JSON array")]
    NotAList,
}
