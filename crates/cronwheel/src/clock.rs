//! The occurrence clock: a cascading transformation engine that advances a
//! timestamp until every field of a schedule holds.
//!
//! Four unit transformations run in a fixed order (minute, hour, day, month;
//! the year is carried implicitly by month arithmetic). When a unit above the
//! minute has to advance, every lower unit is reset to its lowest value and
//! the cascade restarts, so lower fields are re-evaluated against the moved
//! higher unit instead of keeping a now-stale value.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, SubsecRound, Timelike, Utc};
use tracing::{trace, warn};

use crate::error::CronError;
use crate::field::CronField;
use crate::schedule::CronSchedule;

/// How far past the starting year the cascade may search before the schedule
/// is declared unsatisfiable. Eight years covers the longest legitimate gap:
/// February 29th across a skipped century leap year (2096 to 2104).
const MAX_SEARCH_YEARS: i32 = 8;

/// Computes when a [`CronSchedule`] fires.
///
/// The clock owns a mutable timestamp for the duration of a computation; one
/// clock instance serves one occurrence query. Sub-second precision is
/// dropped up front since occurrences are minute-granular.
pub struct CronClock<'a> {
    schedule: &'a CronSchedule,
    time: DateTime<Utc>,
}

impl<'a> CronClock<'a> {
    pub fn new(schedule: &'a CronSchedule, time: DateTime<Utc>) -> Self {
        CronClock {
            schedule,
            time: time.trunc_subsecs(0),
        }
    }

    /// The clock's current time.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether the current time satisfies every field of the schedule,
    /// including the day-of-month/day-of-week OR rule.
    pub fn is_valid(&self) -> bool {
        self.schedule.minutes().can_be(self.time.minute() as u8)
            && self.schedule.hours().can_be(self.time.hour() as u8)
            && self.schedule.months().can_be(self.time.month() as u8)
            && day_is_valid(
                self.schedule.day_of_month(),
                self.schedule.day_of_week(),
                self.time,
            )
    }

    /// Advance to the next valid timestamp, always at least one minute after
    /// the current one.
    pub fn move_to_next_occurrence(&mut self) -> Result<(), CronError> {
        self.time += Duration::minutes(1);
        self.move_while_not_valid()
    }

    /// Advance while the current time is not valid; a valid time is left
    /// untouched.
    pub fn move_while_not_valid(&mut self) -> Result<(), CronError> {
        let transformations = self.transformations();
        let horizon = self.time.year() + MAX_SEARCH_YEARS;

        'cascade: loop {
            for (index, transformation) in transformations.iter().enumerate() {
                let shift = transformation.move_forward_while_not_valid(self.time);
                self.time = shift.time;
                if shift.changed && index > 0 {
                    // A higher unit moved: reset everything below it, highest
                    // first, and re-run the whole cascade.
                    for lower in transformations[..index].iter().rev() {
                        self.time = lower.move_backwards_to_lowest(self.time);
                    }
                    trace!(unit = transformation.name(), time = %self.time, "unit advanced, restarting cascade");
                    if self.time.year() > horizon {
                        warn!(
                            schedule = %self.schedule,
                            horizon,
                            "no occurrence found before search horizon"
                        );
                        return Err(CronError::Unsatisfiable {
                            searched_years: MAX_SEARCH_YEARS,
                        });
                    }
                    continue 'cascade;
                }
            }
            return Ok(());
        }
    }

    fn transformations(&self) -> [UnitTransform<'a>; 4] {
        [
            UnitTransform::Minute(self.schedule.minutes()),
            UnitTransform::Hour(self.schedule.hours()),
            UnitTransform::Day {
                day_of_month: self.schedule.day_of_month(),
                day_of_week: self.schedule.day_of_week(),
            },
            UnitTransform::Month(self.schedule.months()),
        ]
    }
}

/// Result of a forward move: the (possibly unchanged) time and whether the
/// unit had to advance.
#[derive(Debug, Clone, Copy)]
struct Shift {
    time: DateTime<Utc>,
    changed: bool,
}

impl Shift {
    fn unchanged(time: DateTime<Utc>) -> Self {
        Shift {
            time,
            changed: false,
        }
    }

    fn changed(time: DateTime<Utc>) -> Self {
        Shift {
            time,
            changed: true,
        }
    }
}

/// One unit of the cascade, least significant first. The day unit evaluates
/// both day fields with cron's OR rule.
enum UnitTransform<'a> {
    Minute(&'a CronField),
    Hour(&'a CronField),
    Day {
        day_of_month: &'a CronField,
        day_of_week: &'a CronField,
    },
    Month(&'a CronField),
}

impl UnitTransform<'_> {
    fn name(&self) -> &'static str {
        match self {
            UnitTransform::Minute(_) => "minute",
            UnitTransform::Hour(_) => "hour",
            UnitTransform::Day { .. } => "day",
            UnitTransform::Month(_) => "month",
        }
    }

    /// Leave the time untouched if this unit already satisfies its field;
    /// otherwise advance to the lowest allowed value at or above the current
    /// one, wrapping to the lowest allowed value overall when none remains.
    fn move_forward_while_not_valid(&self, time: DateTime<Utc>) -> Shift {
        match self {
            UnitTransform::Minute(field) => {
                let minute = time.minute() as u8;
                if field.can_be(minute) {
                    return Shift::unchanged(time);
                }
                let target = field.lowest_at_least(minute).unwrap_or_else(|| field.lowest());
                // Seconds arithmetic so the move lands exactly on :00 of the
                // target minute.
                let mut seconds = i64::from(target) * 60
                    - (i64::from(time.minute()) * 60 + i64::from(time.second()));
                if seconds < 0 {
                    seconds += 3600;
                }
                Shift::changed(time + Duration::seconds(seconds))
            }
            UnitTransform::Hour(field) => {
                let hour = time.hour() as u8;
                if field.can_be(hour) {
                    return Shift::unchanged(time);
                }
                let target = field.lowest_at_least(hour).unwrap_or_else(|| field.lowest());
                let mut hours = i64::from(target) - i64::from(time.hour());
                if hours < 0 {
                    hours += 24;
                }
                Shift::changed(time + Duration::hours(hours))
            }
            UnitTransform::Day {
                day_of_month,
                day_of_week,
            } => move_day_forward(day_of_month, day_of_week, time),
            UnitTransform::Month(field) => {
                let month = time.month() as u8;
                if field.can_be(month) {
                    return Shift::unchanged(time);
                }
                let target = field.lowest_at_least(month).unwrap_or_else(|| field.lowest());
                let mut months = i32::from(target) - time.month() as i32;
                if months < 0 {
                    months += 12;
                }
                // Month addition clamps the day-of-month to the target
                // month's length; the day unit re-validates after the reset.
                Shift::changed(time + Months::new(months as u32))
            }
        }
    }

    /// Reset this unit to its lowest value without touching higher units.
    fn move_backwards_to_lowest(&self, time: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            UnitTransform::Minute(_) => {
                time - Duration::seconds(i64::from(time.minute()) * 60 + i64::from(time.second()))
            }
            UnitTransform::Hour(_) => time - Duration::hours(i64::from(time.hour())),
            UnitTransform::Day { .. } => time - Duration::days(i64::from(time.day()) - 1),
            UnitTransform::Month(_) => {
                // Day first, so stepping back whole months cannot clamp.
                let time = time - Duration::days(i64::from(time.day()) - 1);
                time - Months::new(time.month() - 1)
            }
        }
    }
}

fn move_day_forward(
    day_of_month: &CronField,
    day_of_week: &CronField,
    time: DateTime<Utc>,
) -> Shift {
    if day_is_valid(day_of_month, day_of_week, time) {
        return Shift::unchanged(time);
    }
    if day_of_week.is_wildcard() {
        if let Some(target) = day_of_month_target(day_of_month, time) {
            return Shift::changed(time + Duration::days(i64::from(target) - i64::from(time.day())));
        }
    }
    // Walk forward a day at a time. This rolls past short months naturally
    // and, when both day fields constrain, lets the nearer one win.
    let mut time = time;
    loop {
        time += Duration::days(1);
        if day_is_valid(day_of_month, day_of_week, time) {
            return Shift::changed(time);
        }
    }
}

/// The lowest allowed day-of-month at or above the current day, provided the
/// current month is long enough to reach it.
fn day_of_month_target(field: &CronField, time: DateTime<Utc>) -> Option<u8> {
    let target = field.lowest_at_least(time.day() as u8)?;
    (u32::from(target) <= days_in_month(time.year(), time.month())).then_some(target)
}

/// Decision table over the two wildcard flags: a wildcard field drops out of
/// the OR, leaving only the concrete constraints. Both wildcard means every
/// day is valid (the day-of-month arm is then always true).
fn day_is_valid(
    day_of_month: &CronField,
    day_of_week: &CronField,
    time: DateTime<Utc>,
) -> bool {
    let day = time.day() as u8;
    let weekday = time.weekday().num_days_from_sunday() as u8;
    match (day_of_month.is_wildcard(), day_of_week.is_wildcard()) {
        (_, true) => day_of_month.can_be(day),
        (true, false) => day_of_week.can_be(weekday),
        (false, false) => day_of_month.can_be(day) || day_of_week.can_be(weekday),
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(first_of_next)) => (first_of_next - first).num_days() as u32,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueParser;
    use chrono::TimeZone;

    fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .unwrap()
    }

    fn field(text: &str, parser: &ValueParser) -> CronField {
        CronField::parse(text, parser).unwrap()
    }

    fn minutes_field(text: &str) -> CronField {
        field(text, &ValueParser::MINUTES)
    }

    // ── minute unit ─────────────────────────────────────────────────

    #[test]
    fn minute_move_backwards_zeroes_minute_and_seconds() {
        let f = minutes_field("*");
        let unit = UnitTransform::Minute(&f);
        let result = unit.move_backwards_to_lowest(utc(2024, 1, 1, 15, 15, 23));
        assert_eq!(result, utc(2024, 1, 1, 15, 0, 0));
    }

    #[test]
    fn minute_forward_valid_is_unchanged() {
        let f = minutes_field("30");
        let unit = UnitTransform::Minute(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 0, 30, 0));
        assert!(!shift.changed);
        assert_eq!(shift.time, utc(2024, 1, 1, 0, 30, 0));
    }

    #[test]
    fn minute_forward_moves_to_higher_target() {
        let f = minutes_field("40");
        let unit = UnitTransform::Minute(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 0, 30, 0));
        assert!(shift.changed);
        assert_eq!(shift.time, utc(2024, 1, 1, 0, 40, 0));
    }

    #[test]
    fn minute_forward_wraps_into_next_hour() {
        let f = minutes_field("30");
        let unit = UnitTransform::Minute(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 0, 40, 0));
        assert!(shift.changed);
        assert_eq!(shift.time, utc(2024, 1, 1, 1, 30, 0));
    }

    #[test]
    fn minute_forward_lands_on_zero_seconds() {
        let f = minutes_field("40");
        let unit = UnitTransform::Minute(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 0, 30, 23));
        assert_eq!(shift.time, utc(2024, 1, 1, 0, 40, 0));
    }

    // ── hour unit ───────────────────────────────────────────────────

    #[test]
    fn hour_move_backwards_keeps_minutes_for_later_reset() {
        let f = field("*", &ValueParser::HOURS);
        let unit = UnitTransform::Hour(&f);
        let result = unit.move_backwards_to_lowest(utc(2024, 1, 1, 15, 15, 23));
        assert_eq!(result, utc(2024, 1, 1, 0, 15, 23));
    }

    #[test]
    fn hour_forward_moves_to_higher_target() {
        let f = field("10", &ValueParser::HOURS);
        let unit = UnitTransform::Hour(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 8, 15, 0));
        assert!(shift.changed);
        assert_eq!(shift.time, utc(2024, 1, 1, 10, 15, 0));
    }

    #[test]
    fn hour_forward_wraps_into_next_day() {
        let f = field("10", &ValueParser::HOURS);
        let unit = UnitTransform::Hour(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 1, 1, 12, 15, 0));
        assert!(shift.changed);
        assert_eq!(shift.time, utc(2024, 1, 2, 10, 15, 0));
    }

    // ── month unit ──────────────────────────────────────────────────

    #[test]
    fn month_move_backwards_sets_january_first() {
        let f = field("*", &ValueParser::MONTHS);
        let unit = UnitTransform::Month(&f);
        let result = unit.move_backwards_to_lowest(utc(2024, 3, 14, 18, 15, 23));
        assert_eq!(result.month(), 1);
        assert_eq!(result.day(), 1);
        assert_eq!(result.year(), 2024);
    }

    #[test]
    fn month_forward_valid_is_unchanged() {
        let f = field("3", &ValueParser::MONTHS);
        let unit = UnitTransform::Month(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 3, 14, 18, 15, 23));
        assert!(!shift.changed);
    }

    #[test]
    fn month_forward_moves_to_higher_target() {
        let f = field("5", &ValueParser::MONTHS);
        let unit = UnitTransform::Month(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.month(), 5);
        assert_eq!(shift.time.year(), 2024);
    }

    #[test]
    fn month_forward_clamps_day_instead_of_skipping() {
        let f = field("2", &ValueParser::MONTHS);
        let unit = UnitTransform::Month(&f);
        let shift = unit.move_forward_while_not_valid(utc(2023, 1, 31, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.month(), 2);
        assert!(shift.time.day() <= 28);
        assert_eq!(shift.time.year(), 2023);
    }

    #[test]
    fn month_forward_lower_target_adds_year() {
        let f = field("1", &ValueParser::MONTHS);
        let unit = UnitTransform::Month(&f);
        let shift = unit.move_forward_while_not_valid(utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.month(), 1);
        assert_eq!(shift.time.year(), 2025);
    }

    // ── day unit ────────────────────────────────────────────────────

    fn day_unit(day_of_month: &str, day_of_week: &str) -> (CronField, CronField) {
        (
            field(day_of_month, &ValueParser::DAY_OF_MONTH),
            field(day_of_week, &ValueParser::DAY_OF_WEEK),
        )
    }

    #[test]
    fn day_move_backwards_sets_first_of_month() {
        let (dom, dow) = day_unit("*", "*");
        let unit = UnitTransform::Day {
            day_of_month: &dom,
            day_of_week: &dow,
        };
        let result = unit.move_backwards_to_lowest(utc(2024, 3, 14, 18, 15, 23));
        assert_eq!(result.day(), 1);
        assert_eq!(result.month(), 3);
    }

    #[test]
    fn day_forward_matching_day_of_month_is_unchanged() {
        let (dom, dow) = day_unit("14", "2");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(!shift.changed);
    }

    #[test]
    fn day_forward_matching_weekday_is_unchanged() {
        // 2024-03-14 is a Thursday (weekday 4).
        let (dom, dow) = day_unit("12", "4");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(!shift.changed);
    }

    #[test]
    fn day_forward_jumps_to_day_of_month_target() {
        let (dom, dow) = day_unit("22", "*");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 22);
        assert_eq!(shift.time.month(), 3);
    }

    #[test]
    fn day_forward_walks_to_weekday_target() {
        // Next Sunday after Thursday the 14th is the 17th.
        let (dom, dow) = day_unit("*", "0");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 17);
        assert_eq!(shift.time.month(), 3);
    }

    #[test]
    fn day_forward_day_of_month_beats_later_weekday() {
        // Day 16 arrives before the next Sunday (the 17th).
        let (dom, dow) = day_unit("16", "0");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 16);
    }

    #[test]
    fn day_forward_weekday_beats_later_day_of_month() {
        // Friday the 15th arrives before day 20.
        let (dom, dow) = day_unit("20", "5");
        let shift = move_day_forward(&dom, &dow, utc(2024, 3, 14, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 15);
        assert_eq!(shift.time.month(), 3);
    }

    #[test]
    fn day_forward_lower_target_rolls_into_next_month() {
        let (dom, dow) = day_unit("20", "*");
        let shift = move_day_forward(&dom, &dow, utc(2024, 1, 30, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 20);
        assert_eq!(shift.time.month(), 2);
    }

    #[test]
    fn day_forward_skips_months_too_short_for_target() {
        let (dom, dow) = day_unit("30", "*");
        let shift = move_day_forward(&dom, &dow, utc(2024, 1, 31, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 30);
        // February has no 30th, so it is skipped entirely.
        assert_eq!(shift.time.month(), 3);
    }

    #[test]
    fn day_forward_skips_february_in_non_leap_years() {
        let (dom, dow) = day_unit("29", "*");
        let shift = move_day_forward(&dom, &dow, utc(2023, 2, 1, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 29);
        assert_eq!(shift.time.month(), 3);
    }

    #[test]
    fn day_forward_finds_leap_day_in_leap_years() {
        let (dom, dow) = day_unit("29", "*");
        let shift = move_day_forward(&dom, &dow, utc(2024, 2, 1, 18, 15, 23));
        assert!(shift.changed);
        assert_eq!(shift.time.day(), 29);
        assert_eq!(shift.time.month(), 2);
    }

    #[test]
    fn day_validity_or_rule_decision_table() {
        let thursday_14th = utc(2024, 3, 14, 0, 0, 0);
        // Both wildcard: every day valid.
        let (dom, dow) = day_unit("*", "*");
        assert!(day_is_valid(&dom, &dow, thursday_14th));
        // Only day-of-month constrains.
        let (dom, dow) = day_unit("14", "*");
        assert!(day_is_valid(&dom, &dow, thursday_14th));
        let (dom, dow) = day_unit("15", "*");
        assert!(!day_is_valid(&dom, &dow, thursday_14th));
        // Only day-of-week constrains.
        let (dom, dow) = day_unit("*", "4");
        assert!(day_is_valid(&dom, &dow, thursday_14th));
        let (dom, dow) = day_unit("*", "5");
        assert!(!day_is_valid(&dom, &dow, thursday_14th));
        // Both constrain: either may match.
        let (dom, dow) = day_unit("14", "5");
        assert!(day_is_valid(&dom, &dow, thursday_14th));
        let (dom, dow) = day_unit("15", "4");
        assert!(day_is_valid(&dom, &dow, thursday_14th));
        let (dom, dow) = day_unit("15", "5");
        assert!(!day_is_valid(&dom, &dow, thursday_14th));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    // ── cascade ─────────────────────────────────────────────────────

    fn schedule(text: &str) -> CronSchedule {
        CronSchedule::parse(text).unwrap()
    }

    #[test]
    fn cascade_lower_minute_finds_next_hour() {
        let s = schedule("1 * * * *");
        let mut clock = CronClock::new(&s, utc(2024, 5, 17, 9, 2, 0));
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), utc(2024, 5, 17, 10, 1, 0));
    }

    #[test]
    fn cascade_new_hour_resets_minutes() {
        let s = schedule("* 10 * * *");
        let mut clock = CronClock::new(&s, utc(2024, 5, 17, 9, 50, 0));
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), utc(2024, 5, 17, 10, 0, 0));
    }

    #[test]
    fn cascade_lower_hour_finds_next_day() {
        let s = schedule("* 10 * * *");
        let mut clock = CronClock::new(&s, utc(2024, 5, 17, 12, 50, 0));
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), utc(2024, 5, 18, 10, 0, 0));
    }

    #[test]
    fn cascade_month_change_resets_minute_to_lowest() {
        // Once June arrives, the minute restarts from 3, not 55.
        let s = schedule("3,55 * * 6 *");
        let mut clock = CronClock::new(&s, utc(2024, 5, 17, 9, 50, 0));
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), utc(2024, 6, 1, 0, 3, 0));
    }

    #[test]
    fn cascade_is_always_at_least_one_minute_later() {
        let s = schedule("* * * * *");
        let from = utc(2024, 5, 17, 9, 50, 0);
        let mut clock = CronClock::new(&s, from);
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), from + Duration::minutes(1));
    }

    #[test]
    fn move_while_not_valid_keeps_valid_time() {
        let s = schedule("50 9 * * *");
        let from = utc(2024, 5, 17, 9, 50, 0);
        let mut clock = CronClock::new(&s, from);
        clock.move_while_not_valid().unwrap();
        assert_eq!(clock.time(), from);
    }

    #[test]
    fn is_valid_checks_all_fields() {
        let s = schedule("50 9 17 5 *");
        assert!(CronClock::new(&s, utc(2024, 5, 17, 9, 50, 0)).is_valid());
        assert!(!CronClock::new(&s, utc(2024, 5, 17, 9, 51, 0)).is_valid());
        assert!(!CronClock::new(&s, utc(2024, 6, 17, 9, 50, 0)).is_valid());
    }

    #[test]
    fn unsatisfiable_schedule_fails_instead_of_spinning() {
        // Day-of-month 31 restricted to February can never fire.
        let s = schedule("0 0 31 2 *");
        let mut clock = CronClock::new(&s, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(
            clock.move_to_next_occurrence(),
            Err(CronError::Unsatisfiable {
                searched_years: MAX_SEARCH_YEARS
            })
        );
    }

    #[test]
    fn leap_day_schedule_waits_up_to_four_years() {
        let s = schedule("0 0 29 2 *");
        let mut clock = CronClock::new(&s, utc(2024, 3, 1, 0, 0, 0));
        clock.move_to_next_occurrence().unwrap();
        assert_eq!(clock.time(), utc(2028, 2, 29, 0, 0, 0));
    }

    #[test]
    fn clock_truncates_subsecond_precision() {
        let s = schedule("* * * * *");
        let from = utc(2024, 5, 17, 9, 50, 0) + Duration::milliseconds(250);
        let clock = CronClock::new(&s, from);
        assert_eq!(clock.time(), utc(2024, 5, 17, 9, 50, 0));
    }
}
