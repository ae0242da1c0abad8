//! Pure calendar lookups: leap years, day-of-year, and "today".
//!
//! The renderer only needs two integers for a given date: the 1-indexed day
//! of the year and the year's length. Both are plain Gregorian arithmetic,
//! so there is no date dependency here; [`today`] reads the system clock
//! once and converts the Unix day number to a civil date.

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// Cumulative days before the first of each month, common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// 1-indexed day of the year for a civil date. `month` and `day` are
/// 1-indexed and assumed valid.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let mut doy = DAYS_BEFORE_MONTH[(month - 1) as usize] + day;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Civil date from a day count relative to 1970-01-01.
///
/// Days-from-civil inversion over 400-year eras (146097 days each).
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let mut year = (yoe + era * 400) as i32;
    if month <= 2 {
        year += 1;
    }
    (year, month, day)
}

/// Current UTC date as `(year, day_of_year, days_in_year)`.
pub fn today() -> (i32, u32, u32) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (year, month, day) = civil_from_days((secs / SECS_PER_DAY) as i64);
    (year, day_of_year(year, month, day), days_in_year(year))
}
