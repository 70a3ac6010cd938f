use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::privatbank::ExchangeRates;
use crate::DateKey;

/// Currencies collected for every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    Usd,
}

impl Currency {
    /// ISO 4217 code, as used in the `currency` field of the API.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// National Bank sale and purchase rates of one currency, in UAH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyRates {
    pub sale: Decimal,
    pub purchase: Decimal,
}

impl CurrencyRates {
    /// Rates of the first `currency` entry in `payload`.
    fn extract(payload: &ExchangeRates, currency: Currency, date: DateKey) -> Result<Self> {
        payload
            .find(currency)
            .and_then(|entry| {
                Some(Self {
                    sale: entry.sale_rate_nb?,
                    purchase: entry.purchase_rate_nb?,
                })
            })
            .ok_or(Error::MissingCurrency { currency, date })
    }
}

/// EUR and USD rates for a single date.
///
/// Serializes as `{"DD.MM.YYYY": {"EUR": {..}, "USD": {..}}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    pub date: DateKey,
    pub eur: CurrencyRates,
    pub usd: CurrencyRates,
}

impl RateRecord {
    pub fn from_payload(date: DateKey, payload: &ExchangeRates) -> Result<Self> {
        Ok(Self {
            date,
            eur: CurrencyRates::extract(payload, Currency::Eur, date)?,
            usd: CurrencyRates::extract(payload, Currency::Usd, date)?,
        })
    }
}

impl Serialize for RateRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct ByCurrency<'a> {
            #[serde(rename = "EUR")]
            eur: &'a CurrencyRates,
            #[serde(rename = "USD")]
            usd: &'a CurrencyRates,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.date,
            &ByCurrency {
                eur: &self.eur,
                usd: &self.usd,
            },
        )?;
        map.end()
    }
}
