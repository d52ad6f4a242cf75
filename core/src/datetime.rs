// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};

/// NOTE: Used in shared links, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// The current date in the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date the way it is stored in shared state.
pub fn format_date(date: NaiveDate) -> String {
    date.format(STABLE_FORMAT_DATEONLY).to_string()
}

/// Parses an ISO calendar date. A full ISO date-time is accepted and its date part kept.
///
/// Only years 1 to 9999 are accepted so the formatted value always parses back.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY)
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))?;

    (1..=9999).contains(&date.year()).then_some(date)
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Adds a signed number of days, saturating at the ends of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let n = Days::new(days.unsigned_abs());
    let shifted = match days >= 0 {
        true => date.checked_add_days(n),
        false => date.checked_sub_days(n),
    };
    shifted.unwrap_or(match days >= 0 {
        true => NaiveDate::MAX,
        false => NaiveDate::MIN,
    })
}

/// Adds whole months, clamping the day to the end of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// The first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Every date from `start` to `end`, both inclusive.
pub fn each_day(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// The ISO 8601 week number of `date`.
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
