use chrono::{DateTime, SecondsFormat};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use time::{Date as TimeDate, Time as TimeTime, format_description::FormatItem};

static DATE_FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
static TIME_FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

fn date_format() -> &'static [FormatItem<'static>] {
    DATE_FORMAT
        .get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap())
        .as_slice()
}

fn time_format() -> &'static [FormatItem<'static>] {
    TIME_FORMAT
        .get_or_init(|| time::format_description::parse("[hour]:[minute]:[second]").unwrap())
        .as_slice()
}

///
/// Date
///
/// Calendar date with a canonical `YYYY-MM-DD` textual form.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(TimeDate);

impl Date {
    #[must_use]
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        TimeDate::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Parse the canonical `YYYY-MM-DD` form. Lenient: None on mismatch.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        TimeDate::parse(s, date_format()).ok().map(Self)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    #[must_use]
    pub fn day(self) -> u8 {
        self.0.day()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(date_format()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// Time
///
/// Time of day with a canonical `HH:MM:SS` textual form. Sub-second
/// precision is not part of the wire contract and is truncated.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time(TimeTime);

impl Time {
    #[must_use]
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        TimeTime::from_hms(hour, minute, second).ok().map(Self)
    }

    /// Parse the canonical `HH:MM:SS` form. Lenient: None on mismatch.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        TimeTime::parse(s, time_format()).ok().map(Self)
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.0.second()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(time_format()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for Time {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// Timestamp
/// (in seconds, RFC 3339 textual form)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse an RFC 3339 timestamp. Lenient: None on mismatch.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.timestamp()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            // out of chrono's range; fall back to raw seconds
            None => write!(f, "{}", self.0),
        }
    }
}
