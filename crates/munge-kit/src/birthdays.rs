//! Upcoming birthday reminders.
//!
//! Birthdays are projected onto the reference year, weekend dates move to
//! the following Monday, and anything inside the lookahead window is
//! reported. Dates that already passed this year are skipped; there is no
//! rollover into next year.

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::BirthdayError;

/// Layout of `birthday` fields and of rendered congratulation dates.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// Lookahead window used when none is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

const DAYS_PER_WEEK: i64 = 7;

/// A validated user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
    birthday: String,
}

impl UserRecord {
    /// Builds a record from already-typed fields.
    #[must_use]
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }

    /// Validates a loosely typed JSON record.
    ///
    /// The value must be an object with string `name` and `birthday` keys;
    /// other keys are ignored. `index` is reported back in the error.
    ///
    /// # Errors
    ///
    /// Returns [`BirthdayError::InvalidUserFormat`] when the shape does not
    /// match.
    ///
    /// # Example
    ///
    /// ```
    /// use munge_kit::{BirthdayError, UserRecord};
    /// use serde_json::json;
    ///
    /// let record = UserRecord::from_value(&json!({"name": "Ada", "birthday": "1815.12.10"}), 0);
    /// assert!(record.is_ok());
    ///
    /// let missing = UserRecord::from_value(&json!({"name": "Ada"}), 4);
    /// assert_eq!(missing, Err(BirthdayError::InvalidUserFormat { index: 4 }));
    /// ```
    pub fn from_value(value: &Value, index: usize) -> Result<Self, BirthdayError> {
        let field = |key: &str| value.get(key).and_then(Value::as_str);
        match (field("name"), field("birthday")) {
            (Some(name), Some(birthday)) => Ok(Self::new(name, birthday)),
            _ => Err(BirthdayError::InvalidUserFormat { index }),
        }
    }

    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw birthday string.
    #[must_use]
    pub fn birthday(&self) -> &str {
        &self.birthday
    }

    fn birthdate(&self) -> Result<NaiveDate, BirthdayError> {
        NaiveDate::parse_from_str(&self.birthday, BIRTHDAY_FORMAT).map_err(|_| {
            BirthdayError::InvalidDateFormat {
                value: self.birthday.clone(),
            }
        })
    }
}

/// Human-readable hint about when a congratulation falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderNote {
    /// Same weekday as the reference date.
    Today,
    /// Later in the current week.
    On(Weekday),
    /// Wrapped into the following week.
    OnNext(Weekday),
}

impl ReminderNote {
    fn between(congratulation: NaiveDate, today: NaiveDate) -> Self {
        let target = congratulation.weekday();
        let current = today.weekday();
        if target == current {
            Self::Today
        } else if target.num_days_from_monday() > current.num_days_from_monday() {
            Self::On(target)
        } else {
            Self::OnNext(target)
        }
    }
}

impl fmt::Display for ReminderNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("today"),
            Self::On(day) => write!(f, "on {}", weekday_name(*day)),
            Self::OnNext(day) => write!(f, "on next {}", weekday_name(*day)),
        }
    }
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A reminder with its presentation note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// The user's name.
    pub name: String,
    /// Date the congratulation should be sent.
    pub congratulation_date: NaiveDate,
    /// When the date falls relative to the reference date.
    pub note: ReminderNote,
}

impl Reminder {
    /// Drops the note, keeping the public fields.
    #[must_use]
    pub fn into_upcoming(self) -> UpcomingBirthday {
        UpcomingBirthday {
            name: self.name,
            congratulation_date: self.congratulation_date.format(BIRTHDAY_FORMAT).to_string(),
        }
    }
}

/// Public result record for an upcoming birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The user's name.
    pub name: String,
    /// Congratulation date rendered as `YYYY.MM.DD`.
    pub congratulation_date: String,
}

/// Projects a birthdate onto `year`, moving weekend dates to Monday.
///
/// # Errors
///
/// Returns [`BirthdayError::NoOccurrence`] for 29 February in a year that is
/// not a leap year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use munge_kit::congratulation_date;
///
/// let saturday_birthday = NaiveDate::from_ymd_opt(1985, 6, 29).expect("valid date");
/// let monday = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");
///
/// assert_eq!(congratulation_date(saturday_birthday, 2024), Ok(monday));
/// ```
pub fn congratulation_date(birthdate: NaiveDate, year: i32) -> Result<NaiveDate, BirthdayError> {
    let (month, day) = (birthdate.month(), birthdate.day());
    let birthday = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(BirthdayError::NoOccurrence { month, day, year })?;

    let weekday = birthday.weekday();
    match weekday {
        Weekday::Sat | Weekday::Sun => {
            let offset = DAYS_PER_WEEK - i64::from(weekday.num_days_from_monday());
            Ok(birthday + TimeDelta::days(offset))
        }
        _ => Ok(birthday),
    }
}

/// Lazily computes reminders for users inside the lookahead window.
///
/// Records are validated one by one; the iterator yields an error at the
/// first malformed record and the caller decides whether to stop. Output
/// keeps the input order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use munge_kit::upcoming_reminders;
/// use serde_json::json;
///
/// let users = vec![json!({"name": "John Doe", "birthday": "1985.01.23"})];
/// let today = NaiveDate::from_ymd_opt(2024, 1, 22).expect("valid date");
///
/// let notes: Vec<String> = upcoming_reminders(&users, 7, today)
///     .map(|reminder| reminder.map(|r| r.note.to_string()))
///     .collect::<Result<_, _>>()
///     .expect("valid users");
///
/// assert_eq!(notes, vec!["on Tuesday".to_owned()]);
/// ```
pub fn upcoming_reminders<'a, I>(
    users: I,
    window_days: u32,
    today: NaiveDate,
) -> impl Iterator<Item = Result<Reminder, BirthdayError>>
where
    I: IntoIterator<Item = &'a Value>,
{
    let window = TimeDelta::days(i64::from(window_days));
    users
        .into_iter()
        .enumerate()
        .filter_map(move |(index, value)| reminder_for(value, index, window, today).transpose())
}

fn reminder_for(
    value: &Value,
    index: usize,
    window: TimeDelta,
    today: NaiveDate,
) -> Result<Option<Reminder>, BirthdayError> {
    let record = UserRecord::from_value(value, index)?;
    let birthdate = record.birthdate()?;
    let congratulation = congratulation_date(birthdate, today.year())?;

    if congratulation < today {
        debug!(name = record.name(), %congratulation, "birthday already passed this year");
        return Ok(None);
    }
    if congratulation - today > window {
        return Ok(None);
    }

    Ok(Some(Reminder {
        note: ReminderNote::between(congratulation, today),
        name: record.name,
        congratulation_date: congratulation,
    }))
}

/// Returns the users whose congratulation date falls inside the window.
///
/// # Errors
///
/// Fails with the first [`BirthdayError`] raised by a record; no partial
/// list is returned.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use munge_kit::get_upcoming_birthdays;
/// use serde_json::json;
///
/// let users = vec![
///     json!({"name": "John Doe", "birthday": "1985.01.23"}),
///     json!({"name": "Jane Smith", "birthday": "1990.01.27"}),
/// ];
/// let today = NaiveDate::from_ymd_opt(2024, 1, 22).expect("valid date");
///
/// let upcoming = get_upcoming_birthdays(&users, 7, today).expect("valid users");
/// let dates: Vec<&str> = upcoming.iter().map(|u| u.congratulation_date.as_str()).collect();
///
/// assert_eq!(dates, vec!["2024.01.23", "2024.01.29"]);
/// ```
pub fn get_upcoming_birthdays<'a, I>(
    users: I,
    window_days: u32,
    today: NaiveDate,
) -> Result<Vec<UpcomingBirthday>, BirthdayError>
where
    I: IntoIterator<Item = &'a Value>,
{
    upcoming_reminders(users, window_days, today)
        .map(|reminder| reminder.map(Reminder::into_upcoming))
        .collect()
}

/// Parses a users document, which must be a JSON array.
///
/// # Errors
///
/// Returns [`BirthdayError::InvalidJson`] for malformed JSON and
/// [`BirthdayError::NotAList`] when the top-level value is not an array.
pub fn load_users(json: &str) -> Result<Vec<Value>, BirthdayError> {
    let document: Value = serde_json::from_str(json).map_err(|e| BirthdayError::InvalidJson {
        message: e.to_string(),
    })?;
    match document {
        Value::Array(users) => Ok(users),
        _ => Err(BirthdayError::NotAList),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    #[fixture]
    fn pirates() -> Vec<Value> {
        vec![
            json!({"name": "Blackbeard Teach", "birthday": "1680.06.28"}),
            json!({"name": "Anne Bonny", "birthday": "1697.06.29"}),
            json!({"name": "Calico Jack Rackham", "birthday": "1682.06.30"}),
            json!({"name": "Charles Vane", "birthday": "1680.07.01"}),
            json!({"name": "Mary Read", "birthday": "1695.07.02"}),
            json!({"name": "Edward England", "birthday": "1683.02.09"}),
            json!({"name": "Bartholomew Roberts", "birthday": "1682.05.17"}),
            json!({"name": "Henry Morgan", "birthday": "1635.01.24"}),
            json!({"name": "Samuel Bellamy", "birthday": "1689.02.23"}),
            json!({"name": "Stede Bonnet", "birthday": "1688.07.29"}),
        ]
    }

    #[rstest]
    #[case(date(1985, 1, 23), date(2024, 1, 23))]
    #[case(date(1985, 6, 29), date(2024, 7, 1))]
    #[case(date(1985, 6, 30), date(2024, 7, 1))]
    #[case(date(1990, 7, 5), date(2024, 7, 5))]
    fn projects_and_shifts_weekends(#[case] birthdate: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(congratulation_date(birthdate, 2024), Ok(expected));
    }

    #[test]
    fn leap_day_has_no_occurrence_in_common_years() {
        assert_eq!(
            congratulation_date(date(2000, 2, 29), 2023),
            Err(BirthdayError::NoOccurrence {
                month: 2,
                day: 29,
                year: 2023
            })
        );
        assert_eq!(congratulation_date(date(2000, 2, 29), 2024), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn reports_users_inside_window() {
        let users = vec![
            json!({"name": "John Doe", "birthday": "1985.01.23"}),
            json!({"name": "Jane Smith", "birthday": "1990.01.27"}),
        ];

        let upcoming = get_upcoming_birthdays(&users, 7, date(2024, 1, 22)).expect("valid users");

        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "John Doe".to_owned(),
                    congratulation_date: "2024.01.23".to_owned(),
                },
                UpcomingBirthday {
                    name: "Jane Smith".to_owned(),
                    congratulation_date: "2024.01.29".to_owned(),
                },
            ]
        );
    }

    #[rstest]
    fn filters_and_keeps_input_order(pirates: Vec<Value>) {
        let upcoming = get_upcoming_birthdays(&pirates, 7, date(2024, 6, 26)).expect("valid users");
        let summary: Vec<(&str, &str)> = upcoming
            .iter()
            .map(|u| (u.name.as_str(), u.congratulation_date.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Blackbeard Teach", "2024.06.28"),
                ("Anne Bonny", "2024.07.01"),
                ("Calico Jack Rackham", "2024.07.01"),
                ("Charles Vane", "2024.07.01"),
                ("Mary Read", "2024.07.02"),
            ]
        );
    }

    #[rstest]
    fn notes_describe_position_in_week(pirates: Vec<Value>) {
        let notes: Vec<String> = upcoming_reminders(&pirates, 7, date(2024, 6, 26))
            .map(|reminder| reminder.map(|r| r.note.to_string()))
            .collect::<Result<_, _>>()
            .expect("valid users");

        assert_eq!(
            notes,
            vec![
                "on Friday",
                "on next Monday",
                "on next Monday",
                "on next Monday",
                "on next Tuesday",
            ]
        );
    }

    #[test]
    fn same_weekday_is_noted_as_today() {
        let users = vec![json!({"name": "Ada", "birthday": "1815.06.26"})];
        let reminders: Vec<Reminder> = upcoming_reminders(&users, 7, date(2024, 6, 26))
            .collect::<Result<_, _>>()
            .expect("valid users");

        assert_eq!(
            reminders.first().map(|r| r.note),
            Some(ReminderNote::Today)
        );
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let users = vec![
            json!({"name": "Edge", "birthday": "1990.01.29"}),
            json!({"name": "Beyond", "birthday": "1990.01.30"}),
        ];

        let upcoming = get_upcoming_birthdays(&users, 7, date(2024, 1, 22)).expect("valid users");

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming.first().map(|u| u.name.as_str()), Some("Edge"));
    }

    #[test]
    fn passed_birthdays_do_not_roll_over() {
        let users = vec![json!({"name": "New Year", "birthday": "1990.01.01"})];

        let upcoming = get_upcoming_birthdays(&users, 7, date(2024, 12, 30)).expect("valid users");

        assert!(upcoming.is_empty());
    }

    #[rstest]
    #[case(json!({"name": "No Birthday"}))]
    #[case(json!({"birthday": "1990.01.01"}))]
    #[case(json!({"name": "Numeric", "birthday": 19_900_101}))]
    #[case(json!("John Doe"))]
    fn rejects_malformed_records(#[case] record: Value) {
        let users = vec![json!({"name": "Fine", "birthday": "1990.01.23"}), record];

        assert_eq!(
            get_upcoming_birthdays(&users, 7, date(2024, 1, 22)),
            Err(BirthdayError::InvalidUserFormat { index: 1 })
        );
    }

    #[test]
    fn rejects_malformed_birthdays() {
        let users = vec![json!({"name": "Dashes", "birthday": "1990-01-23"})];

        assert_eq!(
            get_upcoming_birthdays(&users, 7, date(2024, 1, 22)),
            Err(BirthdayError::InvalidDateFormat {
                value: "1990-01-23".to_owned()
            })
        );
    }

    #[test]
    fn iterator_yields_records_before_the_first_error() {
        let users = vec![
            json!({"name": "John Doe", "birthday": "1985.01.23"}),
            json!({"name": "Broken"}),
        ];

        let mut reminders = upcoming_reminders(&users, 7, date(2024, 1, 22));

        assert!(matches!(reminders.next(), Some(Ok(_))));
        assert_eq!(
            reminders.next(),
            Some(Err(BirthdayError::InvalidUserFormat { index: 1 }))
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let record = json!({"name": "Ada", "birthday": "1815.12.10", "email": "ada@example.com"});

        assert_eq!(
            UserRecord::from_value(&record, 0),
            Ok(UserRecord::new("Ada", "1815.12.10"))
        );
    }

    #[test]
    fn public_records_serialize_without_notes() {
        let upcoming = UpcomingBirthday {
            name: "John Doe".to_owned(),
            congratulation_date: "2024.01.23".to_owned(),
        };

        let json = serde_json::to_value(&upcoming).expect("serialize");

        assert_eq!(
            json,
            json!({"name": "John Doe", "congratulation_date": "2024.01.23"})
        );
    }

    #[rstest]
    #[case("not json", true)]
    #[case(r#"{"name": "Ada"}"#, false)]
    fn load_users_rejects_bad_documents(#[case] input: &str, #[case] is_json_error: bool) {
        let result = load_users(input);

        if is_json_error {
            assert!(matches!(result, Err(BirthdayError::InvalidJson { .. })));
        } else {
            assert_eq!(result, Err(BirthdayError::NotAList));
        }
    }

    #[test]
    fn load_users_returns_array_entries() {
        let users = load_users(r#"[{"name": "Ada", "birthday": "1815.12.10"}, 3]"#)
            .expect("valid document");

        assert_eq!(users.len(), 2);
    }
}
