//! Client for the PrivatBank exchange rate archive.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use crate::error::{Error, Result};
use crate::{Currency, DateKey};

pub const API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce the archived rates for a single date.
pub trait RateSource {
    fn exchange_rates(&self, date: DateKey) -> Result<ExchangeRates>;
}

/// The PrivatBank archive endpoint.
pub struct PrivatBank {
    agent: Agent,
    base_url: String,
}

impl PrivatBank {
    /// Use a custom agent and endpoint.
    ///
    /// The agent may or may not treat HTTP error codes as errors; both are reported as
    /// [`Error::Status`].
    pub fn new(agent: Agent, base_url: impl Into<String>) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

impl Default for PrivatBank {
    fn default() -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();
        Self::new(Agent::new_with_config(config), API_URL)
    }
}

impl RateSource for PrivatBank {
    fn exchange_rates(&self, date: DateKey) -> Result<ExchangeRates> {
        let url = format!("{}?json&date={date}", self.base_url);
        debug!(%url, "requesting exchange rates");

        let mut resp = match self.agent.get(url.as_str()).call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code)) => return Err(Error::Status(code)),
            Err(e) => return Err(e.into()),
        };

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::Status(status));
        }

        let rates = resp.body_mut().read_json::<ExchangeRates>()?;
        debug!(%date, entries = rates.exchange_rate.len(), "received exchange rates");
        Ok(rates)
    }
}

/// Archive response for one date, as sent by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRates {
    pub date: Option<String>,
    pub bank: Option<String>,
    pub base_currency: Option<u32>,
    pub base_currency_lit: Option<String>,
    pub exchange_rate: Vec<ExchangeRateEntry>,
}

impl ExchangeRates {
    /// First entry for `currency`. Later duplicates are ignored.
    pub fn find(&self, currency: Currency) -> Option<&ExchangeRateEntry> {
        self.exchange_rate
            .iter()
            .find(|entry| entry.currency.as_deref() == Some(currency.code()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateEntry {
    pub base_currency: Option<String>,
    pub currency: Option<String>,
    /// National Bank of Ukraine rate
    #[serde(rename = "saleRateNB")]
    pub sale_rate_nb: Option<Decimal>,
    /// National Bank of Ukraine rate
    #[serde(rename = "purchaseRateNB")]
    pub purchase_rate_nb: Option<Decimal>,
    /// PrivatBank's own rate, only published for some currencies
    pub sale_rate: Option<Decimal>,
    /// PrivatBank's own rate, only published for some currencies
    pub purchase_rate: Option<Decimal>,
}
