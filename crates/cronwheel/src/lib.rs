//! Cron schedule parsing and next-occurrence calculation.
//!
//! Parses the classic five-field cron syntax (minute, hour, day-of-month,
//! month, day-of-week, including `JAN`-`DEC`/`SUN`-`SAT` names, ranges,
//! steps, and wrapping ranges) and computes when a schedule next fires.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use cronwheel::CronSchedule;
//!
//! let schedule: CronSchedule = "*/15 9-17 * * MON-FRI".parse()?;
//! let from = Utc.with_ymd_and_hms(2024, 3, 16, 12, 0, 0).unwrap();
//! let next = schedule.next_occurrence(from)?;
//! assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).unwrap());
//! # Ok::<(), cronwheel::CronError>(())
//! ```

pub mod clock;
pub mod error;
pub mod field;
pub mod range;
pub mod schedule;
pub mod value;

pub use clock::CronClock;
pub use error::CronError;
pub use field::CronField;
pub use range::CronRange;
pub use schedule::CronSchedule;
pub use value::{CronValue, ValueParser};
