// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Normalization of untrusted input into a valid [`Roster`].
//!
//! Every value that comes from outside, such as a decoded link, passes through
//! [`sanitize`]. The function is total: malformed, missing or out-of-range fields are
//! replaced by defaults or clamped, never rejected. It is also idempotent, so sanitizing an
//! already sanitized roster returns it unchanged.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;

use crate::datetime::{parse_date, today};
use crate::person::{
    AnchorState, MAX_WEEKS, MIN_WEEKS, Person, default_color, normalize_color, truncate_name,
};
use crate::roster::{
    DEFAULT_MONTHS, MAX_MONTHS, MAX_PEOPLE, MIN_MONTHS, Roster, default_people, generate_id,
};

const KEY_MONTHS: &str = "months";
const KEY_MIN_OFF: &str = "minOff";
const KEY_PEOPLE: &str = "people";

const KEY_ID: &str = "id";
const KEY_NAME: &str = "name";
const KEY_COLOR: &str = "color";
const KEY_WEEKS_ON: &str = "weeksOn";
const KEY_WEEKS_OFF: &str = "weeksOff";
const KEY_ANCHOR_DATE: &str = "anchorDate";
const KEY_ANCHOR_STATE: &str = "anchorState";

/// Legacy fields, expressed in raw days instead of weeks.
const KEY_LEGACY_WORK_DAYS: &str = "workDays";
const KEY_LEGACY_OFF_DAYS: &str = "offDays";

/// Sanitizes an arbitrary value into a valid roster, using the local date as "today".
pub fn sanitize(raw: &Value) -> Roster {
    sanitize_with(raw, today())
}

/// Sanitizes an arbitrary value into a valid roster.
///
/// `today` replaces missing or invalid anchor dates and anchors the built-in roster.
pub fn sanitize_with(raw: &Value, today: NaiveDate) -> Roster {
    let months = clamp_int(
        raw.get(KEY_MONTHS),
        MIN_MONTHS as i64,
        MAX_MONTHS as i64,
        DEFAULT_MONTHS as i64,
    ) as u32;

    // first pass, the final bound depends on the number of people
    let min_off = match raw.get(KEY_MIN_OFF) {
        None | Some(Value::Null) => None,
        Some(v) => Some(clamp_int(Some(v), 1, MAX_PEOPLE as i64, 1) as u32),
    };

    let entries: &[Value] = match raw.get(KEY_PEOPLE) {
        Some(Value::Array(items)) => &items[..items.len().min(MAX_PEOPLE)],
        _ => &[],
    };

    let mut seen = HashSet::new();
    let mut people: Vec<Person> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| sanitize_person(entry, index, today, &mut seen))
        .filter(|p| p.weeks_on >= MIN_WEEKS && p.weeks_off >= MIN_WEEKS)
        .collect();

    if people.is_empty() {
        tracing::debug!("no valid people, using the default roster");
        people = default_people(today);
    }

    let min_off = min_off.map(|n| n.clamp(1, people.len() as u32));
    Roster {
        months,
        min_off,
        people,
    }
}

fn sanitize_person(
    entry: &Value,
    index: usize,
    today: NaiveDate,
    seen: &mut HashSet<String>,
) -> Person {
    let id = match entry.get(KEY_ID) {
        Some(Value::String(id)) if !seen.contains(id) => id.clone(),
        _ => generate_id(),
    };
    seen.insert(id.clone());

    let name = match entry.get(KEY_NAME) {
        Some(Value::String(name)) => truncate_name(name),
        _ => String::new(),
    };

    let color = entry
        .get(KEY_COLOR)
        .and_then(Value::as_str)
        .and_then(normalize_color)
        .unwrap_or_else(|| default_color(index).to_string());

    let anchor_date = entry
        .get(KEY_ANCHOR_DATE)
        .and_then(Value::as_str)
        .and_then(parse_date)
        .unwrap_or(today);

    let anchor_state = match entry.get(KEY_ANCHOR_STATE).and_then(Value::as_str) {
        Some(s) => s.parse().unwrap_or(AnchorState::Off),
        None => AnchorState::Off,
    };

    Person {
        id,
        name,
        color,
        weeks_on: normalize_weeks(entry, KEY_WEEKS_ON, KEY_LEGACY_WORK_DAYS),
        weeks_off: normalize_weeks(entry, KEY_WEEKS_OFF, KEY_LEGACY_OFF_DAYS),
        anchor_date,
        anchor_state,
    }
}

/// Resolves a week count, migrating the legacy day count when the current field is absent.
fn normalize_weeks(entry: &Value, weeks_key: &str, legacy_days_key: &str) -> u32 {
    let (min, max, fallback) = (MIN_WEEKS as i64, MAX_WEEKS as i64, MIN_WEEKS as i64);

    let weeks = entry.get(weeks_key);
    if weeks.and_then(as_number).is_some() {
        return clamp_int(weeks, min, max, fallback) as u32;
    }

    match entry.get(legacy_days_key).and_then(as_number) {
        Some(days) if days >= 1.0 => ((days / 7.0).round() as i64).clamp(min, max) as u32,
        _ => fallback as u32,
    }
}

/// Parses an integer the way form inputs do: numbers are truncated, strings are read up to
/// the first non-digit. Out-of-range values are clamped, anything else yields `fallback`.
fn clamp_int(value: Option<&Value>, min: i64, max: i64, fallback: i64) -> i64 {
    match value.and_then(parse_int) {
        Some(n) => n.clamp(min, max),
        None => fallback,
    }
}

fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let n = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -n } else { n })
}

/// A finite number, given either as a JSON number or as numeric text.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|f| f.is_finite())
}
