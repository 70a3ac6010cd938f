use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use jiff::civil::Date;
use tracing::{debug, info, warn};

pub mod convert;
mod date;
mod error;
pub mod privatbank;
mod record;

pub use date::DateKey;
pub use error::{Error, Result};
pub use privatbank::{PrivatBank, RateSource};
pub use record::{Currency, CurrencyRates, RateRecord};

/// Get the USD and EUR exchange rates from PrivatBank for the last few days.
///
/// Rates are the National Bank of Ukraine sale and purchase rates published in the PrivatBank
/// archive, newest date first.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Number of days to fetch, counting back from today (1 to 10)
    #[arg(value_name = "DAYS", allow_negative_numbers = true, value_parser = parse_days)]
    pub days: i64,

    /// Log each request to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

/// Any optionally signed run of digits. Values beyond `i64` saturate, so they end up in the
/// range check rather than being rejected as non-integers.
fn parse_days(arg: &str) -> std::result::Result<i64, String> {
    let digits = arg.strip_prefix(['+', '-']).unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("`{arg}` is not an integer"));
    }

    Ok(arg.parse().unwrap_or(if arg.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// What went wrong while parsing the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// The day count is not an integer.
    NotAnInteger,
    /// Missing or extra arguments.
    Usage,
    /// `--help` or `--version` was requested.
    Informational,
}

impl ParseFailure {
    pub fn classify(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseFailure::Informational,
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => ParseFailure::NotAnInteger,
            _ => ParseFailure::Usage,
        }
    }

    /// What to print for this failure, or `None` when clap renders it itself.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            ParseFailure::NotAnInteger => Some(Outcome::failure("Days must be an integer.")),
            ParseFailure::Usage => Some(Outcome::failure(format!(
                "Usage: {} <days>",
                env!("CARGO_PKG_NAME")
            ))),
            ParseFailure::Informational => None,
        }
    }
}

pub const DAYS_OUT_OF_RANGE: &str = "Кількість днів повинна бути від 1 до 10.";

/// Text for stdout and the process exit status of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub status: u8,
}

impl Outcome {
    fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            status: 0,
        }
    }

    fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            status: 1,
        }
    }

    /// Print the output and hand back the exit code.
    pub fn report(self) -> ExitCode {
        println!("{}", self.output);
        ExitCode::from(self.status)
    }
}

/// Number of days to fetch, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount(u8);

impl DayCount {
    pub const MAX: u8 = 10;

    pub fn new(days: i64) -> Result<Self> {
        match u8::try_from(days) {
            Ok(count) if (1..=Self::MAX).contains(&count) => Ok(Self(count)),
            _ => Err(Error::DaysOutOfRange(days)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A run that stopped early, with the records collected before it stopped.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct PartialFailure {
    pub completed: Vec<RateRecord>,
    #[source]
    pub error: Error,
}

/// Fetch one [`RateRecord`] per day, from `today` backwards.
///
/// Requests are made one at a time and the result is in request order. The first failure ends
/// the run.
pub fn collect_rates<S>(
    source: &S,
    today: Date,
    days: DayCount,
) -> Result<Vec<RateRecord>, PartialFailure>
where
    S: RateSource + ?Sized,
{
    let mut records = Vec::with_capacity(days.get().into());

    for date in DateKey::days_back(today, days.get()) {
        let record = date.and_then(|date| {
            debug!(%date, "fetching rates");
            let payload = source.exchange_rates(date)?;
            RateRecord::from_payload(date, &payload)
        });

        match record {
            Ok(record) => {
                info!(date = %record.date, eur = %record.eur.sale, usd = %record.usd.sale, "collected rates");
                records.push(record);
            }
            Err(error) => {
                return Err(PartialFailure {
                    completed: records,
                    error,
                });
            }
        }
    }

    Ok(records)
}

/// Fetch `days` days of rates from `source` and render them as a pretty JSON list.
///
/// A day count outside `1..=10` is not an error: only the range message is printed and nothing
/// is fetched. On a failed fetch only the error is printed, never the records collected before it.
pub fn run<S>(source: &S, today: Date, days: i64) -> Outcome
where
    S: RateSource + ?Sized,
{
    let Ok(days) = DayCount::new(days) else {
        return Outcome::success(DAYS_OUT_OF_RANGE);
    };

    match collect_rates(source, today, days) {
        Ok(records) => match serde_json::to_string_pretty(&records) {
            Ok(dump) => Outcome::success(dump),
            Err(e) => Outcome::failure(format!("Error: {e}")),
        },
        Err(failure) => {
            if !failure.completed.is_empty() {
                warn!(
                    discarded = failure.completed.len(),
                    "discarding rates fetched before the failure"
                );
            }
            Outcome::failure(format!("Error: {failure}"))
        }
    }
}
