//! Single resolved field values and the per-field-kind token parser.

use std::fmt;

use crate::error::CronError;

/// One resolved datum inside a cron range: either the wildcard or a concrete
/// number, optionally carrying the symbolic name it was written as (`JAN`,
/// `SUN`, ...). Symbolic names canonicalize to the uppercase table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronValue {
    value: Option<u8>,
    name: Option<&'static str>,
}

impl CronValue {
    /// The wildcard value (`*`).
    pub const ANY: CronValue = CronValue {
        value: None,
        name: None,
    };

    /// A plain numeric value.
    pub const fn new(value: u8) -> Self {
        CronValue {
            value: Some(value),
            name: None,
        }
    }

    const fn named(value: u8, name: &'static str) -> Self {
        CronValue {
            value: Some(value),
            name: Some(name),
        }
    }

    /// Whether this value is concrete (not the wildcard).
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The concrete number, or `None` for the wildcard.
    pub fn value(&self) -> Option<u8> {
        self.value
    }
}

impl fmt::Display for CronValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.name) {
            (None, _) => write!(f, "*"),
            (Some(_), Some(name)) => write!(f, "{name}"),
            (Some(value), None) => write!(f, "{value}"),
        }
    }
}

const MONTH_NAMES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_NAMES: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Per-field-kind parsing configuration: human-readable field name, value
/// bounds, tolerated numeric overflow, and the symbolic name table.
///
/// The overflow tolerance lets day-of-week accept `7` as another spelling of
/// Sunday: values up to `max + allowed_overflow` wrap back into range.
#[derive(Debug)]
pub struct ValueParser {
    field_name: &'static str,
    min: u8,
    max: u8,
    allowed_overflow: u8,
    lookup: &'static [&'static str],
}

impl ValueParser {
    /// Parser for the minutes field.
    pub const MINUTES: ValueParser = ValueParser::new("minutes", 0, 59, 0, &[]);

    /// Parser for the hours field.
    pub const HOURS: ValueParser = ValueParser::new("hours", 0, 23, 0, &[]);

    /// Parser for the day-of-month field.
    pub const DAY_OF_MONTH: ValueParser = ValueParser::new("day of month", 1, 31, 0, &[]);

    /// Parser for the months field (`JAN`-`DEC`).
    pub const MONTHS: ValueParser = ValueParser::new("months", 1, 12, 0, MONTH_NAMES);

    /// Parser for the day-of-week field (`SUN`-`SAT`; `7` also means Sunday).
    pub const DAY_OF_WEEK: ValueParser = ValueParser::new("day of week", 0, 6, 1, WEEKDAY_NAMES);

    pub(crate) const fn new(
        field_name: &'static str,
        min: u8,
        max: u8,
        allowed_overflow: u8,
        lookup: &'static [&'static str],
    ) -> Self {
        ValueParser {
            field_name,
            min,
            max,
            allowed_overflow,
            lookup,
        }
    }

    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Largest step value a range of this field kind may carry.
    pub fn max_step(&self) -> u8 {
        self.max + self.allowed_overflow
    }

    /// Convert a single token into a [`CronValue`].
    pub fn parse(&self, token: &str) -> Result<CronValue, CronError> {
        if token == "*" {
            return Ok(CronValue::ANY);
        }
        if let Ok(number) = token.parse::<i64>() {
            return self.parse_number(number);
        }
        if let Some(index) = self.lookup_index(token) {
            return Ok(CronValue::named(
                index + self.min,
                self.lookup[index as usize],
            ));
        }
        Err(CronError::InvalidToken {
            field: self.field_name,
            token: token.to_string(),
        })
    }

    fn parse_number(&self, number: i64) -> Result<CronValue, CronError> {
        let (min, max) = (i64::from(self.min), i64::from(self.max));
        if number >= min && number <= max {
            return Ok(CronValue::new(number as u8));
        }
        if number > max && number - i64::from(self.allowed_overflow) <= max {
            // Tolerated overflow wraps back into range (day-of-week 7 == Sunday).
            return Ok(CronValue::new((number % (max + 1) + min) as u8));
        }
        Err(CronError::OutOfRange {
            field: self.field_name,
            value: number,
            min: self.min,
            max: self.max,
        })
    }

    fn lookup_index(&self, token: &str) -> Option<u8> {
        self.lookup
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|index| index as u8)
    }
}
