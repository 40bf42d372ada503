use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use super::account::AccountError;

/// Calendar date of birth, rendered as `YYYY-MM-DD`.
///
/// The rendered form sorts textually in the same order as the dates themselves,
/// which is what the birthday listings and the SQL store rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole years elapsed on `today`. The count only moves up once the
    /// (month, day) of the birthday has been reached in the current year.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.0.year();
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            years - 1
        } else {
            years
        }
    }

    /// True when `today` falls on the same month and day, whatever the year.
    pub fn is_birthday_on(&self, today: NaiveDate) -> bool {
        (self.0.month(), self.0.day()) == (today.month(), today.day())
    }
}

impl FromStr for Birthdate {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(AccountError::EmptyBirthdate);
        }
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .map(Self)
            .map_err(|_| AccountError::InvalidBirthdate(raw.to_owned()))
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Serialize for Birthdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
