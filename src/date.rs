use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Format used by the PrivatBank archive, both in the query string and in responses.
const FORMAT: &str = "%d.%m.%Y";

/// A calendar date rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl DateKey {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn date(self) -> Date {
        self.0
    }

    /// `count` keys going back one day at a time, starting with `today` itself.
    pub fn days_back(today: Date, count: u8) -> impl Iterator<Item = Result<DateKey>> {
        (0..i64::from(count)).map(move |i| {
            today
                .checked_sub(i.days())
                .map(DateKey)
                .map_err(Error::from)
        })
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0.strftime(FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(Date::strptime(FORMAT, s)?))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
