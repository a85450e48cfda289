//! Display formatting helpers for dates, durations, and amounts.
//!
//! Numeric helpers normalize missing or non-finite input to a zero form. Date helpers are
//! stricter: an input that does not describe a real calendar moment is reported as
//! [`FormatError::InvalidDate`] instead of being rendered as some other date.

mod date;
mod number;
mod time;

use thiserror::Error;

pub use date::{
    format_clock, format_date, format_date_time, format_date_time_with_seconds, format_year,
    format_year_month, DateSeparator, DateTimeInput,
};
pub use number::{
    format_currency_krw, format_currency_usd, format_fixed, format_latency_ms, format_number_krw,
    format_number_point_en, format_number_point_kr, format_number_usd, group_thousands,
};
pub use time::{
    format_time_auto, format_time_english, format_time_full, format_time_korean,
    format_time_short,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised by the date formatting helpers.
pub enum FormatError {
    /// The input could not be read as a calendar date or date-time.
    #[error("invalid date: `{input}`")]
    InvalidDate {
        /// The rejected input, as received.
        input: String,
    },
    /// A calendar date could not be extended to a date-time.
    #[error("date `{date}` has no representable start of day")]
    InvalidDateTime {
        /// The date that failed to convert.
        date: String,
    },
}
