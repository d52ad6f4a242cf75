// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::datetime::{add_months, each_day, end_of_month};
use crate::person::{Person, normalize_color};
use crate::roster::Roster;
use crate::schedule::is_off;

/// Color used for people whose color cannot be rendered.
pub const FALLBACK_COLOR: &str = "#999999";

/// Where the computed timeline begins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStart {
    /// Always start today.
    #[default]
    Today,

    /// Start at the earliest anchor date if it is before today, so configured history is
    /// still visible.
    EarliestAnchor,
}

/// The first day of the timeline for `roster` under the given policy.
pub fn timeline_start(roster: &Roster, today: NaiveDate, policy: TimelineStart) -> NaiveDate {
    match policy {
        TimelineStart::Today => today,
        TimelineStart::EarliestAnchor => roster
            .people
            .iter()
            .map(|p| p.anchor_date)
            .fold(today, NaiveDate::min),
    }
}

/// A person as shown on a timeline day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TimelineMember {
    /// Id of the person.
    pub id: String,

    /// Display name, never blank.
    pub name: String,

    /// Presentation color as `#rrggbb`.
    pub color: String,
}

impl From<&Person> for TimelineMember {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id.clone(),
            name: p.display_name().to_string(),
            color: normalize_color(&p.color).unwrap_or_else(|| FALLBACK_COLOR.to_string()),
        }
    }
}

/// The group aggregate for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDay {
    /// The calendar day.
    pub date: NaiveDate,

    /// Number of people working.
    pub on_count: usize,

    /// Number of people off.
    pub off_count: usize,

    /// People working, in roster order.
    pub working: Vec<TimelineMember>,

    /// People off, in roster order.
    pub off: Vec<TimelineMember>,
}

impl TimelineDay {
    /// Whether nobody is working on this day.
    pub fn all_free(&self) -> bool {
        self.on_count == 0
    }

    /// Whether at least `min_off` people are off on this day.
    pub fn meets_min_off(&self, min_off: u32) -> bool {
        self.off_count >= min_off as usize
    }
}

/// The last day of the timeline: the end of the month `months - 1` months after `start`.
pub fn timeline_end(start: NaiveDate, months: u32) -> NaiveDate {
    end_of_month(add_months(start, months.max(1) - 1))
}

/// Computes one [`TimelineDay`] per calendar day from `start` to the end of the horizon.
pub fn compute_timeline(roster: &Roster, start: NaiveDate) -> Vec<TimelineDay> {
    let end = timeline_end(start, roster.months);
    tracing::debug!(%start, %end, people = roster.people.len(), "computing timeline");

    each_day(start, end)
        .map(|date| {
            let (off, working): (Vec<&Person>, Vec<&Person>) =
                roster.people.iter().partition(|p| is_off(p, date));

            TimelineDay {
                date,
                on_count: working.len(),
                off_count: off.len(),
                working: working.into_iter().map(TimelineMember::from).collect(),
                off: off.into_iter().map(TimelineMember::from).collect(),
            }
        })
        .collect()
}
