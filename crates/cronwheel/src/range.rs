//! One comma-separated segment of a cron field: a start value, optional end
//! value, and optional step.

use std::fmt;

use crate::error::CronError;
use crate::value::{CronValue, ValueParser};

/// A single allowed range inside a [`CronField`](crate::CronField).
///
/// Expansion over a field's `[min, max]` domain supports plain singletons
/// (`5`), bounded ranges (`2-5`), wrapping ranges (`8-1`, meaning the high
/// tail plus the low tail), and step filtering (`6-10/2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronRange {
    start: CronValue,
    end: CronValue,
    step: Option<u8>,
}

impl CronRange {
    /// Panics when `start` and `step` are concrete but `end` is not; the
    /// parser always synthesizes the end in that case, so hitting this is a
    /// bug in the caller rather than bad user input.
    pub(crate) fn new(start: CronValue, end: CronValue, step: Option<u8>) -> Self {
        assert!(
            !(start.has_value() && step.is_some() && !end.has_value()),
            "range end cannot be empty when start and step are set"
        );
        CronRange { start, end, step }
    }

    /// Whether this range allows every value of its field.
    pub fn is_wildcard(&self) -> bool {
        !self.start.has_value() && self.step.is_none()
    }

    /// Parse one comma-separated segment of a field.
    ///
    /// A trailing `/step` is split off first, then the remainder splits on the
    /// first `-`. A bare `start/step` runs from `start` to the field's maximum.
    pub(crate) fn parse(segment: &str, parser: &ValueParser) -> Result<CronRange, CronError> {
        let (rest, step) = split_step(segment, parser)?;
        let (start_text, end_text) = match rest.split_once('-') {
            Some((start, end)) => (start, Some(end)),
            None => (rest, None),
        };

        let mut end = CronValue::ANY;
        if let Some(end_text) = end_text {
            if end_text.is_empty() {
                return Err(CronError::EmptyRangeEnd {
                    field: parser.field_name(),
                });
            }
            end = parser.parse(end_text)?;
        }

        if start_text.is_empty() {
            return Err(CronError::EmptyRangeStart {
                field: parser.field_name(),
            });
        }
        let start = parser.parse(start_text)?;

        if start.has_value() && step.is_some() && !end.has_value() {
            end = CronValue::new(parser.max());
        }

        Ok(CronRange::new(start, end, step))
    }

    /// Expand this range to the concrete values it allows within `[min, max]`.
    ///
    /// The result preserves domain order (high tail before low tail for
    /// wrapping ranges); the step filter keeps every step-th element of that
    /// sequence counting from its first element.
    pub(crate) fn allowed_values(&self, min: u8, max: u8) -> Vec<u8> {
        if let (Some(single), None, None) = (self.start.value(), self.end.value(), self.step) {
            return vec![single];
        }

        let domain = min..=max;
        let filtered: Vec<u8> = match (self.start.value(), self.end.value()) {
            (None, _) => domain.collect(),
            (Some(start), None) => domain.filter(|v| *v == start).collect(),
            (Some(start), Some(end)) if start <= end => {
                domain.filter(|v| *v >= start && *v <= end).collect()
            }
            // Wrapping range: everything at or above start, then everything
            // at or below end.
            (Some(start), Some(end)) => domain
                .clone()
                .filter(|v| *v >= start)
                .chain(domain.filter(|v| *v <= end))
                .collect(),
        };

        match self.step {
            Some(step) => filtered.into_iter().step_by(step as usize).collect(),
            None => filtered,
        }
    }
}

fn split_step<'a>(
    segment: &'a str,
    parser: &ValueParser,
) -> Result<(&'a str, Option<u8>), CronError> {
    let Some((rest, step_text)) = segment.split_once('/') else {
        return Ok((segment, None));
    };
    let step = step_text
        .parse::<u8>()
        .ok()
        .filter(|step| (1..=parser.max_step()).contains(step))
        .ok_or_else(|| CronError::InvalidStep {
            field: parser.field_name(),
            value: step_text.to_string(),
        })?;
    Ok((rest, Some(step)))
}

impl fmt::Display for CronRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return write!(f, "*");
        }
        write!(f, "{}", self.start)?;
        if self.end.has_value() {
            write!(f, "-{}", self.end)?;
        }
        if let Some(step) = self.step {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}
