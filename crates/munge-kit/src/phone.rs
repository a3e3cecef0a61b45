//! Phone number normalization.

/// Country code prepended when none is configured.
pub const DEFAULT_COUNTRY_CODE: &str = "+380";

/// Number of trailing digits kept from the input.
pub const SIGNIFICANT_DIGITS: usize = 9;

/// Normalizes a free-form phone number to `<country_code><9 digits>`.
///
/// Every character that is not an ASCII digit is dropped. The last
/// [`SIGNIFICANT_DIGITS`] digits are kept and left-padded with zeros when
/// fewer remain. Longer numbers lose their leading digits, which is how
/// national prefixes and existing country codes are discarded.
///
/// # Example
///
/// ```
/// use munge_kit::{DEFAULT_COUNTRY_CODE, normalize_phone};
///
/// assert_eq!(normalize_phone("(095) 234-5678", DEFAULT_COUNTRY_CODE), "+380952345678");
/// assert_eq!(normalize_phone("067", "+380"), "+380000000067");
/// ```
#[must_use]
pub fn normalize_phone(phone: &str, country_code: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
    let skip = digits.len().saturating_sub(SIGNIFICANT_DIGITS);
    let local: String = digits.into_iter().skip(skip).collect();
    format!("{country_code}{local:0>SIGNIFICANT_DIGITS$}")
}
