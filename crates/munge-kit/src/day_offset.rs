//! Signed day offsets between a date and a reference moment.
//!
//! The reference is always supplied by the caller. Binaries read the real
//! clock at their boundary and pass it in; tests pass fixed values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::error::DateError;

/// Accepted textual date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 86_400;

/// A date supplied to [`days_from_today`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use munge_kit::DateInput;
///
/// let from_text = DateInput::from("2021-01-01");
/// let from_date = DateInput::from(NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"));
///
/// assert!(matches!(from_text, DateInput::Text(_)));
/// assert!(matches!(from_date, DateInput::Date(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date, interpreted as midnight.
    Date(NaiveDate),
    /// A date with a time of day.
    DateTime(NaiveDateTime),
    /// A string to be parsed as `YYYY-MM-DD`.
    Text(String),
}

impl DateInput {
    fn resolve(self) -> Result<NaiveDateTime, DateError> {
        match self {
            Self::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            Self::DateTime(moment) => Ok(moment),
            Self::Text(text) => NaiveDate::parse_from_str(&text, DATE_FORMAT)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| DateError::InvalidFormat { value: text }),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl TryFrom<&Value> for DateInput {
    type Error = DateError;

    /// Accepts JSON strings only; every other JSON type is rejected with
    /// [`DateError::InvalidInputType`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(DateError::InvalidInputType {
                kind: json_kind(other).to_owned(),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the number of whole days from `input` to `reference`.
///
/// The result is positive when `reference` is after the date, negative when
/// it is before and zero on the same day. Partial days round towards
/// negative infinity, so a reference of 10:00 on the day before the date
/// yields `-1`.
///
/// # Errors
///
/// Returns [`DateError::InvalidFormat`] when a text input is not a valid
/// `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use munge_kit::days_from_today;
///
/// let reference = NaiveDate::from_ymd_opt(2021, 5, 5)
///     .and_then(|date| date.and_hms_opt(0, 0, 0))
///     .expect("valid reference");
///
/// assert_eq!(days_from_today("2021-10-09", reference), Ok(-157));
/// ```
pub fn days_from_today(
    input: impl Into<DateInput>,
    reference: NaiveDateTime,
) -> Result<i64, DateError> {
    let date = input.into().resolve()?;
    let elapsed = reference.signed_duration_since(date);
    Ok(elapsed.num_seconds().div_euclid(SECONDS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid fixture date")
    }

    #[rstest]
    #[case(midnight(2021, 1, 1), 0)]
    #[case(midnight(2021, 1, 2), 1)]
    #[case(midnight(2020, 12, 31), -1)]
    #[case(midnight(2021, 1, 3), 2)]
    #[case(midnight(2020, 12, 30), -2)]
    fn offsets_from_new_year(#[case] reference: NaiveDateTime, #[case] expected: i64) {
        assert_eq!(days_from_today("2021-01-01", reference), Ok(expected));
    }

    #[test]
    fn offset_across_months() {
        assert_eq!(
            days_from_today("2021-10-09", midnight(2021, 5, 5)),
            Ok(-157)
        );
    }

    #[rstest]
    #[case("2021-01-01", "2021-03-15")]
    #[case("1999-12-31", "2000-01-01")]
    #[case("2024-02-29", "2023-02-28")]
    fn offset_is_antisymmetric(#[case] first: &str, #[case] second: &str) {
        let first_date = NaiveDate::parse_from_str(first, DATE_FORMAT).expect("valid date");
        let second_date = NaiveDate::parse_from_str(second, DATE_FORMAT).expect("valid date");

        let forward = days_from_today(first, second_date.and_time(NaiveTime::MIN));
        let backward = days_from_today(second, first_date.and_time(NaiveTime::MIN));

        assert_eq!(forward.map(|days| -days), backward);
    }

    #[test]
    fn time_of_day_floors_towards_earlier_day() {
        let morning_after = midnight(2021, 1, 1) + chrono::TimeDelta::hours(10);
        let evening_before = midnight(2020, 12, 31) + chrono::TimeDelta::hours(10);

        assert_eq!(days_from_today("2021-01-01", morning_after), Ok(0));
        assert_eq!(days_from_today("2021-01-01", evening_before), Ok(-1));
    }

    #[test]
    fn accepts_typed_dates() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
        assert_eq!(days_from_today(date, midnight(2021, 1, 11)), Ok(10));
    }

    #[rstest]
    #[case("xxxxx")]
    #[case("2021/01/01")]
    #[case("2021-13-01")]
    #[case("")]
    fn rejects_malformed_strings(#[case] value: &str) {
        assert_eq!(
            days_from_today(value, midnight(2021, 1, 1)),
            Err(DateError::InvalidFormat {
                value: value.to_owned()
            })
        );
    }

    #[rstest]
    #[case(json!(123), "number")]
    #[case(json!(null), "null")]
    #[case(json!(["2021-01-01"]), "array")]
    fn rejects_non_string_json(#[case] value: Value, #[case] kind: &str) {
        assert_eq!(
            DateInput::try_from(&value),
            Err(DateError::InvalidInputType {
                kind: kind.to_owned()
            })
        );
    }

    #[test]
    fn json_strings_become_text_inputs() {
        let input = DateInput::try_from(&json!("2021-01-01")).expect("string accepted");
        assert_eq!(input, DateInput::Text("2021-01-01".to_owned()));
    }
}
