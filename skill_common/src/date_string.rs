use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------     DateString       ---------------------------------------------------------
/// A calendar date in `yyyy-mm-dd` form.
///
/// The only way to build one is through validation, so any `DateString` in hand is safe to splice into API queries
/// or compare against the date portion of an order timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateString(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a date in yyyy-mm-dd format")]
pub struct DateStringError(pub String);

/// Returns true iff `s` is a date string in `yyyy-mm-dd` format, e.g. `2020-04-29`.
///
/// Only the shape is checked: ten characters, with the year, month and day fields made up of decimal digits.
pub fn is_date(s: &str) -> bool {
    if s.len() != 10 || !s.is_ascii() {
        return false;
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    all_digits(&s[0..4]) && all_digits(&s[5..7]) && all_digits(&s[8..10])
}

impl DateString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for DateString {
    type Err = DateStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_date(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DateStringError(s.to_string()))
        }
    }
}

impl TryFrom<String> for DateString {
    type Error = DateStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_date(&value) {
            Ok(Self(value))
        } else {
            Err(DateStringError(value))
        }
    }
}

impl From<DateString> for String {
    fn from(value: DateString) -> Self {
        value.0
    }
}

impl AsRef<str> for DateString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for DateString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DateString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for DateString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
