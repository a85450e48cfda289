use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use super::FormatError;

const DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_PATTERNS: [&str; 3] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Separator placed between year, month, and day.
pub enum DateSeparator {
    /// `2026-10-15`
    #[default]
    Dash,
    /// `2026.10.15`
    Dot,
}

impl DateSeparator {
    fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::Dot => ".",
        }
    }
}

/// Values accepted by the date formatting helpers.
pub trait DateTimeInput {
    /// Resolves the input to a local wall-clock date-time.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDate`] when the input does not name a real moment.
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError>;
}

impl DateTimeInput for NaiveDateTime {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        Ok(*self)
    }
}

impl DateTimeInput for NaiveDate {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        self.and_hms_opt(0, 0, 0)
            .ok_or_else(|| FormatError::InvalidDateTime {
                date: self.to_string(),
            })
    }
}

impl<Tz: TimeZone> DateTimeInput for DateTime<Tz> {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        Ok(self.naive_local())
    }
}

impl DateTimeInput for str {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        parse_date_time(self)
    }
}

impl DateTimeInput for String {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        parse_date_time(self)
    }
}

impl<T: DateTimeInput + ?Sized> DateTimeInput for &T {
    fn to_date_time(&self) -> Result<NaiveDateTime, FormatError> {
        (**self).to_date_time()
    }
}

fn parse_date_time(raw: &str) -> Result<NaiveDateTime, FormatError> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Local).naive_local());
    }
    if let Some(parsed) = DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
    {
        return Ok(parsed);
    }
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(trimmed, pattern).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| FormatError::InvalidDate {
            input: raw.to_string(),
        })
}

struct Parts {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

fn parts(input: impl DateTimeInput) -> Result<Parts, FormatError> {
    let value = input.to_date_time()?;
    Ok(Parts {
        year: value.year(),
        month: value.month(),
        day: value.day(),
        hour: value.hour(),
        minute: value.minute(),
        second: value.second(),
    })
}

/// `YYYY`
pub fn format_year(input: impl DateTimeInput) -> Result<String, FormatError> {
    let parts = parts(input)?;
    Ok(parts.year.to_string())
}

/// `YYYY-MM` or `YYYY.MM`
pub fn format_year_month(
    input: impl DateTimeInput,
    sep: DateSeparator,
) -> Result<String, FormatError> {
    let p = parts(input)?;
    Ok(format!("{}{}{:02}", p.year, sep.as_str(), p.month))
}

/// `YYYY-MM-DD` or `YYYY.MM.DD`
pub fn format_date(input: impl DateTimeInput, sep: DateSeparator) -> Result<String, FormatError> {
    let p = parts(input)?;
    let sep = sep.as_str();
    Ok(format!("{}{sep}{:02}{sep}{:02}", p.year, p.month, p.day))
}

/// `YYYY-MM-DD HH:mm`
pub fn format_date_time(
    input: impl DateTimeInput,
    sep: DateSeparator,
) -> Result<String, FormatError> {
    let p = parts(input)?;
    let sep = sep.as_str();
    Ok(format!(
        "{}{sep}{:02}{sep}{:02} {:02}:{:02}",
        p.year, p.month, p.day, p.hour, p.minute
    ))
}

/// `YYYY-MM-DD HH:mm:ss`
pub fn format_date_time_with_seconds(
    input: impl DateTimeInput,
    sep: DateSeparator,
) -> Result<String, FormatError> {
    let p = parts(input)?;
    let sep = sep.as_str();
    Ok(format!(
        "{}{sep}{:02}{sep}{:02} {:02}:{:02}:{:02}",
        p.year, p.month, p.day, p.hour, p.minute, p.second
    ))
}

/// `HH:mm`
pub fn format_clock(input: impl DateTimeInput) -> Result<String, FormatError> {
    let p = parts(input)?;
    Ok(format!("{:02}:{:02}", p.hour, p.minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 5, 42))
            .expect("valid test moment")
    }

    #[test]
    fn formats_every_shape() {
        assert_eq!(format_year(moment()).as_deref(), Ok("2026"));
        assert_eq!(
            format_year_month(moment(), DateSeparator::Dot).as_deref(),
            Ok("2026.03")
        );
        assert_eq!(
            format_date(moment(), DateSeparator::Dash).as_deref(),
            Ok("2026-03-07")
        );
        assert_eq!(
            format_date_time(moment(), DateSeparator::Dash).as_deref(),
            Ok("2026-03-07 09:05")
        );
        assert_eq!(
            format_date_time_with_seconds(moment(), DateSeparator::Dot).as_deref(),
            Ok("2026.03.07 09:05:42")
        );
        assert_eq!(format_clock(moment()).as_deref(), Ok("09:05"));
    }

    #[test]
    fn parses_common_string_shapes() {
        assert_eq!(
            format_date_time_with_seconds("2026-03-07T09:05:42", DateSeparator::Dash).as_deref(),
            Ok("2026-03-07 09:05:42")
        );
        assert_eq!(
            format_date_time("2026-03-07 09:05:42.250", DateSeparator::Dash).as_deref(),
            Ok("2026-03-07 09:05")
        );
        assert_eq!(
            format_date("2026.03.07", DateSeparator::Dash).as_deref(),
            Ok("2026-03-07")
        );
        assert_eq!(format_clock(String::from(" 2026-03-07 ")).as_deref(), Ok("00:00"));
        assert!(format_date("2026-03-07T09:05:42+09:00", DateSeparator::Dash).is_ok());
    }

    #[test]
    fn invalid_dates_fail_loudly() {
        assert_eq!(
            format_date("2026-02-30", DateSeparator::Dash),
            Err(FormatError::InvalidDate {
                input: "2026-02-30".to_string()
            })
        );
        assert!(matches!(
            format_clock("not a date"),
            Err(FormatError::InvalidDate { .. })
        ));
        assert!(format_year("").is_err());
    }
}
