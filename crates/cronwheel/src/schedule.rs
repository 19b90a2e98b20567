//! Parsed five-field cron schedules, named presets, and occurrence queries.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::clock::CronClock;
use crate::error::CronError;
use crate::field::CronField;
use crate::value::ValueParser;

/// The five value parsers in field-position order: minutes, hours,
/// day-of-month, months, day-of-week.
const PARSERS: [&ValueParser; 5] = [
    &ValueParser::MINUTES,
    &ValueParser::HOURS,
    &ValueParser::DAY_OF_MONTH,
    &ValueParser::MONTHS,
    &ValueParser::DAY_OF_WEEK,
];

/// A schedule in cron syntax: minutes, hours, day-of-month, months, and
/// day-of-week. Immutable once parsed; safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule {
    minutes: CronField,
    hours: CronField,
    day_of_month: CronField,
    months: CronField,
    day_of_week: CronField,
}

impl CronSchedule {
    /// Parse a five-field cron expression.
    ///
    /// Fields are separated by spaces; runs of spaces collapse. Failures
    /// short-circuit at the first bad field.
    pub fn parse(text: &str) -> Result<CronSchedule, CronError> {
        if text.is_empty() {
            return Err(CronError::EmptyExpression);
        }
        let tokens: Vec<&str> = text.split(' ').filter(|t| !t.is_empty()).collect();
        if tokens.len() != PARSERS.len() {
            debug!(expression = text, found = tokens.len(), "wrong field count");
            return Err(CronError::WrongFieldCount(tokens.len()));
        }
        Ok(CronSchedule {
            minutes: CronField::parse(tokens[0], PARSERS[0])?,
            hours: CronField::parse(tokens[1], PARSERS[1])?,
            day_of_month: CronField::parse(tokens[2], PARSERS[2])?,
            months: CronField::parse(tokens[3], PARSERS[3])?,
            day_of_week: CronField::parse(tokens[4], PARSERS[4])?,
        })
    }

    /// The minutes field.
    pub fn minutes(&self) -> &CronField {
        &self.minutes
    }

    /// The hours field.
    pub fn hours(&self) -> &CronField {
        &self.hours
    }

    /// The day-of-month field.
    pub fn day_of_month(&self) -> &CronField {
        &self.day_of_month
    }

    /// The months field.
    pub fn months(&self) -> &CronField {
        &self.months
    }

    /// The day-of-week field.
    pub fn day_of_week(&self) -> &CronField {
        &self.day_of_week
    }

    /// The first timestamp strictly after `from` at which this schedule
    /// fires, always at least one minute later.
    ///
    /// Fails with [`CronError::Unsatisfiable`] when no occurrence exists
    /// within the search horizon (e.g. day-of-month 31 restricted to
    /// February).
    pub fn next_occurrence(&self, from: DateTime<Utc>) -> Result<DateTime<Utc>, CronError> {
        let mut clock = CronClock::new(self, from);
        clock.move_to_next_occurrence()?;
        Ok(clock.time())
    }

    /// Like [`next_occurrence`](CronSchedule::next_occurrence), but returns
    /// `from` itself when it already satisfies the schedule.
    pub fn next_occurrence_inclusive(
        &self,
        from: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, CronError> {
        let mut clock = CronClock::new(self, from);
        clock.move_while_not_valid()?;
        Ok(clock.time())
    }

    /// Once a year, at midnight on January 1st (`0 0 1 1 *`).
    pub fn yearly() -> &'static CronSchedule {
        static YEARLY: LazyLock<CronSchedule> = LazyLock::new(|| preset("0 0 1 1 *"));
        &YEARLY
    }

    /// Once a month, at midnight on the first day of the month (`0 0 1 * *`).
    pub fn monthly() -> &'static CronSchedule {
        static MONTHLY: LazyLock<CronSchedule> = LazyLock::new(|| preset("0 0 1 * *"));
        &MONTHLY
    }

    /// Once a week, at midnight on Sunday (`0 0 * * 0`).
    pub fn weekly() -> &'static CronSchedule {
        static WEEKLY: LazyLock<CronSchedule> = LazyLock::new(|| preset("0 0 * * 0"));
        &WEEKLY
    }

    /// Once a day, at midnight (`0 0 * * *`).
    pub fn daily() -> &'static CronSchedule {
        static DAILY: LazyLock<CronSchedule> = LazyLock::new(|| preset("0 0 * * *"));
        &DAILY
    }

    /// Once an hour, at the start of the hour (`0 * * * *`).
    pub fn hourly() -> &'static CronSchedule {
        static HOURLY: LazyLock<CronSchedule> = LazyLock::new(|| preset("0 * * * *"));
        &HOURLY
    }
}

fn preset(text: &'static str) -> CronSchedule {
    CronSchedule::parse(text).expect("preset expressions are valid")
}

impl FromStr for CronSchedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CronSchedule::parse(s)
    }
}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minutes, self.hours, self.day_of_month, self.months, self.day_of_week
        )
    }
}

impl Serialize for CronSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CronSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
