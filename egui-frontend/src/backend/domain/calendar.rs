//! Calendar and date logic for SlotBook.
//!
//! Pure functions for the Sunday-first week grid, the month grid of the
//! calendar picker, date shifting, and parsing of the `YYYY-MM-DD` / `HH:MM`
//! strings entered in forms. The UI only handles presentation; every date
//! computation lives here.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveTime};
use shared::CalendarCell;

/// Weekday labels, Sunday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift a date by `days` (negative moves backwards)
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Shift a date by `months`, clamping the day to the length of the target month
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// The seven dates of the Sunday-to-Saturday week containing `date`
pub fn week_dates_for(date: NaiveDate) -> [NaiveDate; 7] {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let sunday = add_days(date, -offset);

    let mut dates = [sunday; 7];
    for (i, slot) in dates.iter_mut().enumerate() {
        *slot = add_days(sunday, i as i64);
    }
    dates
}

/// Sunday-aligned grid for the month containing `date`: one blank per weekday
/// before the 1st, then every day of the month
pub fn month_grid_for(date: NaiveDate) -> Vec<CalendarCell> {
    let year = date.year();
    let month = date.month();
    let leading_blanks = first_day_of_month(year, month);
    let days = days_in_month(year, month);

    log::debug!(
        "🗓️ Month grid for {}/{}: {} blanks, {} days",
        month,
        year,
        leading_blanks,
        days
    );

    let mut cells = Vec::with_capacity((leading_blanks + days) as usize);
    cells.extend((0..leading_blanks).map(|_| CalendarCell::Blank));
    cells.extend(
        (1..=days)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .map(CalendarCell::Day),
    );
    cells
}

/// First date of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Weekday of the 1st of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// "June 2024"
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// "Jun 9, 2024"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jun 9, 2024 - Jun 15, 2024"
pub fn format_week_range(week: &[NaiveDate; 7]) -> String {
    format!("{} - {}", format_date_short(week[0]), format_date_short(week[6]))
}

/// Parse a YYYY-MM-DD date string
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    if trimmed.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Check that a string is a zero-padded 24h time of day (HH:MM)
///
/// Only this exact shape keeps lexicographic comparison equal to
/// chronological comparison.
pub fn is_valid_time_of_day(time_str: &str) -> bool {
    time_str.len() == 5
        && time_str.bytes().all(|b| b.is_ascii_digit() || b == b':')
        && NaiveTime::parse_from_str(time_str, "%H:%M").is_ok()
}
