use thiserror::Error;

/// Errors produced while parsing a cron expression or computing occurrences.
///
/// Every parse failure carries the name of the cron field it occurred in, so
/// callers can point users at the exact offending part of the expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("expression cannot be empty")]
    EmptyExpression,

    #[error("expression should contain exactly 5 fields, found {0}")]
    WrongFieldCount(usize),

    #[error("{field} field cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} range start cannot be empty")]
    EmptyRangeStart { field: &'static str },

    #[error("{field} range end cannot be empty")]
    EmptyRangeEnd { field: &'static str },

    #[error("{field} step value '{value}' is invalid")]
    InvalidStep { field: &'static str, value: String },

    #[error("{field} value {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },

    #[error("'{token}' is not a valid {field} value")]
    InvalidToken { field: &'static str, token: String },

    #[error("schedule produced no occurrence within {searched_years} years of the starting time")]
    Unsatisfiable { searched_years: i32 },
}
