//! [`Error`] type.

use crate::{Currency, DateKey};

/// Errors from the PrivatBank API, the HTTP client, or rate arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with something other than `200 OK`.
    #[error("error fetching data: {0}")]
    Status(u16),
    /// Transport failure, or a body that is not the expected JSON.
    #[error("http error: {0}")]
    Http(#[from] ureq::Error),
    /// The archive for a date has no usable entry for a currency.
    #[error("no {currency} rate in the response for {date}")]
    MissingCurrency { currency: Currency, date: DateKey },
    /// Calendar arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(#[from] jiff::Error),
    /// Day count outside of `1..=10`.
    #[error("day count must be between 1 and 10, got {0}")]
    DaysOutOfRange(i64),
    /// Conversion with a zero rate.
    #[error("cannot convert with a zero rate")]
    ZeroRate,
    /// Conversion result does not fit in a decimal.
    #[error("conversion overflowed")]
    Overflow,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
