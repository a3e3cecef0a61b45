//! Command-line defaults loaded via OrthoConfig.
//!
//! Values come from `MUNGE_*` environment variables or a discovered
//! configuration file. Flags passed to a binary take precedence over both.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::phone::DEFAULT_COUNTRY_CODE;

/// Defaults shared by the munge-kit binaries.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MUNGE")]
pub struct MungeSettings {
    /// Country code prepended by `normalize-phone`.
    #[serde(default, deserialize_with = "deserialize_country_code")]
    pub country_code: Option<String>,
    /// Lookahead window for `upcoming-birthdays`, in days.
    #[ortho_config(default = 7)]
    pub birthday_window_days: u32,
}

impl Default for MungeSettings {
    fn default() -> Self {
        Self {
            country_code: None,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl MungeSettings {
    /// Return the configured country code, falling back to the default.
    #[must_use]
    pub fn country_code(&self) -> &str {
        self.country_code.as_deref().unwrap_or(DEFAULT_COUNTRY_CODE)
    }

    /// Return the configured lookahead window.
    #[must_use]
    pub const fn birthday_window_days(&self) -> u32 {
        self.birthday_window_days
    }
}

/// Raw country code as written in the environment or a configuration file.
///
/// Environment values such as `+48` arrive as integers, so the sign has to
/// be restored.
#[derive(Deserialize)]
#[serde(untagged)]
enum CountryCodeValue {
    Text(String),
    Number(u64),
}

fn deserialize_country_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<CountryCodeValue>::deserialize(deserializer)?;
    Ok(value.map(|code| match code {
        CountryCodeValue::Text(text) => text,
        CountryCodeValue::Number(digits) => format!("+{digits}"),
    }))
}
