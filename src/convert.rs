//! Conversion of UAH amounts with a rate taken from a [`CurrencyRates`](crate::CurrencyRates).

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// `amount / rate`
pub fn convert_to_usd(rate: Decimal, amount: Decimal) -> Result<Decimal> {
    if rate.is_zero() {
        return Err(Error::ZeroRate);
    }
    amount.checked_div(rate).ok_or(Error::Overflow)
}

/// `amount * rate`
pub fn convert_to_eur(rate: Decimal, amount: Decimal) -> Result<Decimal> {
    amount.checked_mul(rate).ok_or(Error::Overflow)
}
