//! Everyday data munging helpers.
//!
//! This crate bundles four small, independent utilities, each usable as a
//! library function or through its own binary:
//!
//! - [`days_from_today`]: signed day offset of a `YYYY-MM-DD` date from a
//!   reference moment
//! - [`get_numbers_ticket`]: sorted, unique random numbers within bounds
//! - [`get_upcoming_birthdays`]: users to congratulate within a lookahead
//!   window, with weekend birthdays moved to Monday
//! - [`normalize_phone`]: free-form phone numbers in a canonical
//!   international format
//!
//! None of the functions read the clock; callers pass the reference date
//! explicitly and only the binaries supply the current time.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use munge_kit::{get_numbers_ticket, get_upcoming_birthdays, normalize_phone};
//! use serde_json::json;
//!
//! let users = vec![json!({"name": "Jane Smith", "birthday": "1990.01.27"})];
//! let today = NaiveDate::from_ymd_opt(2024, 1, 22).expect("valid date");
//! let upcoming = get_upcoming_birthdays(&users, 7, today).expect("valid users");
//! assert_eq!(upcoming.first().map(|u| u.congratulation_date.as_str()), Some("2024.01.29"));
//!
//! assert_eq!(get_numbers_ticket(1, 10, 10, Some(3)), (1..=10).collect::<Vec<_>>());
//! assert_eq!(normalize_phone("067\t123 4567", "+380"), "+380671234567");
//! ```

mod birthdays;
pub mod cli;
mod config;
mod day_offset;
mod error;
mod phone;
mod ticket;

pub use birthdays::{
    BIRTHDAY_FORMAT, DEFAULT_WINDOW_DAYS, Reminder, ReminderNote, UpcomingBirthday, UserRecord,
    congratulation_date, get_upcoming_birthdays, load_users, upcoming_reminders,
};
pub use config::MungeSettings;
pub use day_offset::{DATE_FORMAT, DateInput, days_from_today};
pub use error::{BirthdayError, DateError};
pub use phone::{DEFAULT_COUNTRY_CODE, SIGNIFICANT_DIGITS, normalize_phone};
pub use ticket::{TICKET_MAX, TICKET_MIN, TicketBounds, TicketRejection, get_numbers_ticket};
