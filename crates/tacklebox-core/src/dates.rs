//! Calendar helpers over wall-clock timestamps.
//!
//! Timestamps are [`NaiveDateTime`] values: a local date and time with no
//! attached offset. Arithmetic that can leave chrono's representable range
//! returns `None`.
//!
//! ## Calendar overflow
//!
//! Month and year arithmetic keep the day-of-month and let it overflow into
//! the following month, instead of clamping to the last valid day:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tacklebox_core::dates::add_months;
//!
//! let jan_31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let next = add_months(jan_31, 1).unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2023, 3, 3).unwrap().and_hms_opt(9, 30, 0).unwrap());
//! ```

use crate::config::DateConfig;
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday,
};
use tracing::{debug, trace};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Layouts carrying a time of day, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, parsed as midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%a, %d %B %Y",
    "%A, %B %d, %Y",
];

/// Ordinal day within the year, 1 for January 1st.
pub fn get_day_of_year(date: NaiveDateTime) -> u32 {
    date.ordinal()
}

/// Week number counted in whole weeks since midnight on December 31st of the
/// previous year, plus one.
///
/// This is not an ISO week: weeks always start on the weekday of Dec 31st,
/// so January 7th at midnight is already week 2.
pub fn get_week_of_year(date: NaiveDateTime) -> u32 {
    let since_year_start = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31)
        .map_or(0, |eve| (date - eve.and_time(NaiveTime::MIN)).num_milliseconds());
    let weeks = since_year_start.div_euclid(MS_PER_WEEK) + 1;
    u32::try_from(weeks).unwrap_or(1)
}

/// Parse a date string, returning `None` when no supported layout matches.
///
/// Never fails loudly. Accepted inputs:
///
/// - RFC 3339 and RFC 2822 timestamps, converted to UTC wall-clock time
/// - ISO dates with an optional `T` or space separated time and fraction
/// - `MM/DD/YYYY`, `YYYY/MM/DD`
/// - Month names: `May 25, 2024`, `25 May 2024`, `Saturday, May 25, 2024`
///
/// ```rust
/// use tacklebox_core::dates::parse_date;
///
/// assert!(parse_date("2024-05-25T10:00:00Z").is_some());
/// assert!(parse_date("May 25, 2024").is_some());
/// assert!(parse_date("not a date").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    parse_date_with(input, &DateConfig::default())
}

/// [`parse_date`] that first tries the layouts in [`DateConfig::extra_formats`].
pub fn parse_date_with(input: &str, config: &DateConfig) -> Option<NaiveDateTime> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(parsed) = config
        .extra_formats
        .iter()
        .find_map(|fmt| parse_layout(text, fmt))
    {
        trace!(input = text, "parsed date with custom layout");
        return Some(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.naive_utc());
    }

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        });

    if parsed.is_none() {
        debug!(
            input = text,
            custom_layouts = config.extra_formats.len(),
            "date string matched no known layout"
        );
    }
    parsed
}

fn parse_layout(text: &str, fmt: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, fmt).ok().or_else(|| {
        NaiveDate::parse_from_str(text, fmt)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    })
}

/// Long US-English rendering, e.g. `January 5, 2024 at 3:04:05 PM UTC`.
pub fn format_date(date: NaiveDateTime) -> String {
    format_date_with(date, &DateConfig::default())
}

/// [`format_date`] using the zone label and clock style from `config`.
pub fn format_date_with(date: NaiveDateTime, config: &DateConfig) -> String {
    let layout = if config.hour12 {
        "%B %-d, %Y at %-I:%M:%S %p"
    } else {
        "%B %-d, %Y at %H:%M:%S"
    };
    format!("{} {}", date.format(layout), config.time_zone_label)
}

/// Whole days from `start` to `end`, rounded to the nearest day.
///
/// Rounding absorbs sub-day offsets such as a one-hour daylight-saving shift
/// baked into either timestamp. Negative when `end` precedes `start`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn get_calendar_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let days = (end - start).num_milliseconds() as f64 / MS_PER_DAY as f64;
    (days + 0.5).floor() as i64
}

/// Count Monday-to-Friday days from `start` to `end`, both inclusive.
///
/// Walks one calendar day at a time starting at `start` (time of day
/// included) while the cursor is not after `end`. Returns 0 when `end`
/// precedes `start`.
pub fn get_working_days(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_weekday(current) {
            count += 1;
        }
        match add_days(current, 1) {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Add `days` calendar days, keeping the time of day.
pub fn add_days(date: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Subtract `days` calendar days, keeping the time of day.
pub fn subtract_days(date: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    add_days(date, days.checked_neg()?)
}

/// Add `months` months (negative moves back), letting an out-of-range day overflow forward.
pub fn add_months(date: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let month_index = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(month_index.div_euclid(12)).ok()?;
    let month0 = u32::try_from(month_index.rem_euclid(12)).ok()?;
    with_overflowing_day(date, year, month0 + 1)
}

/// Subtract `months` months, see [`add_months`].
pub fn subtract_months(date: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    add_months(date, months.checked_neg()?)
}

/// Add `years` years; February 29th rolls over to March 1st in common years.
pub fn add_years(date: NaiveDateTime, years: i32) -> Option<NaiveDateTime> {
    with_overflowing_day(date, date.year().checked_add(years)?, date.month())
}

/// Subtract `years` years, see [`add_years`].
pub fn subtract_years(date: NaiveDateTime, years: i32) -> Option<NaiveDateTime> {
    add_years(date, years.checked_neg()?)
}

/// Rebuild `date` in `year`/`month`, adding its day-of-month as an offset
/// from the 1st so that day 31 of a 30-day month lands on the next month's 1st.
fn with_overflowing_day(date: NaiveDateTime, year: i32, month: u32) -> Option<NaiveDateTime> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day = first.checked_add_days(Days::new(u64::from(date.day0())))?;
    Some(day.and_time(date.time()))
}

/// English name of the weekday, `"Sunday"` through `"Saturday"`.
pub fn get_day_of_week(date: NaiveDateTime) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// `true` on Saturdays and Sundays.
pub fn is_weekend(date: NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `true` Monday through Friday.
pub fn is_weekday(date: NaiveDateTime) -> bool {
    !is_weekend(date)
}

/// Gregorian leap year rule.
pub const fn is_leap_year(year: i32) -> bool {
    if year % 4 != 0 {
        return false;
    }
    if year % 100 != 0 {
        return true;
    }
    year % 400 == 0
}
