//! A full cron field: one or more ranges plus the derived allowed-value set.

use std::fmt;

use crate::error::CronError;
use crate::range::CronRange;
use crate::value::{CronValue, ValueParser};

/// One of the five fields of a [`CronSchedule`](crate::CronSchedule).
///
/// The wildcard flag and the allowed-value set are derived once at
/// construction. `allowed_values` is always non-empty and strictly ascending
/// with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronField {
    ranges: Vec<CronRange>,
    is_wildcard: bool,
    allowed: Vec<u8>,
}

impl CronField {
    pub(crate) fn new(min: u8, max: u8, ranges: Vec<CronRange>) -> Self {
        let is_wildcard = ranges.is_empty() || ranges.iter().any(CronRange::is_wildcard);
        let allowed = collect_allowed(min, max, &ranges);
        CronField {
            ranges,
            is_wildcard,
            allowed,
        }
    }

    /// Parse one space-delimited field of a cron expression.
    pub(crate) fn parse(text: &str, parser: &ValueParser) -> Result<CronField, CronError> {
        if text == "*" {
            return Ok(CronField::new(
                parser.min(),
                parser.max(),
                vec![CronRange::new(CronValue::ANY, CronValue::ANY, None)],
            ));
        }
        if text.is_empty() {
            return Err(CronError::EmptyField {
                field: parser.field_name(),
            });
        }
        let ranges = text
            .split(',')
            .map(|segment| CronRange::parse(segment, parser))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CronField::new(parser.min(), parser.max(), ranges))
    }

    /// Whether this field matches any value.
    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// Every value this field allows, strictly ascending with no duplicates.
    pub fn allowed_values(&self) -> &[u8] {
        &self.allowed
    }

    /// Whether this field matches the given value.
    pub fn can_be(&self, value: u8) -> bool {
        self.is_wildcard || self.allowed.binary_search(&value).is_ok()
    }

    /// The lowest value this field allows.
    pub fn lowest(&self) -> u8 {
        // `allowed` is non-empty by construction.
        self.allowed[0]
    }

    /// The lowest allowed value at or above `at_least`, if one exists.
    pub fn lowest_at_least(&self, at_least: u8) -> Option<u8> {
        self.allowed.iter().copied().find(|v| *v >= at_least)
    }
}

fn collect_allowed(min: u8, max: u8, ranges: &[CronRange]) -> Vec<u8> {
    if ranges.is_empty() {
        return (min..=max).collect();
    }
    let mut allowed: Vec<u8> = ranges
        .iter()
        .flat_map(|range| range.allowed_values(min, max))
        .collect();
    allowed.sort_unstable();
    allowed.dedup();
    allowed
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard {
            return write!(f, "*");
        }
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}
