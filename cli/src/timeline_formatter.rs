// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use rotacal_core::TimelineDay;
use rotacal_core::datetime::{format_date, iso_week};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyle};
use crate::util::{OutputFormat, View};

#[derive(Debug)]
pub struct TimelineFormatter {
    columns: Vec<TimelineColumn>,
    format: OutputFormat,
}

impl TimelineFormatter {
    pub fn new(view: View, min_off: Option<u32>) -> Self {
        Self {
            columns: vec![
                TimelineColumn::Date,
                TimelineColumn::Week,
                TimelineColumn::Count { view, min_off },
                TimelineColumn::Members { view },
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, days: &'a [TimelineDay]) -> Display<'a> {
        Display {
            days,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    days: &'a [TimelineDay],
    formatter: &'a TimelineFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.days).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyle::Basic, &self.formatter.columns, self.days)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineColumn {
    Date,
    Week,
    Count { view: View, min_off: Option<u32> },
    Members { view: View },
}

impl TableColumn<TimelineDay> for TimelineColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TimelineColumn::Date => "date",
            TimelineColumn::Week => "week",
            TimelineColumn::Count { .. } => "count",
            TimelineColumn::Members { .. } => "members",
        }
        .into()
    }

    fn format<'a>(&self, day: &'a TimelineDay) -> Cow<'a, str> {
        match *self {
            TimelineColumn::Date => {
                format!("{} {}", format_date(day.date), day.date.format("%a")).into()
            }
            TimelineColumn::Week => format!("W{:02}", iso_week(day.date)).into(),
            TimelineColumn::Count {
                view: View::Working,
                ..
            } if day.all_free() => "all free".into(),
            TimelineColumn::Count {
                view: View::Working,
                ..
            } => format!("{} on", day.on_count).into(),
            TimelineColumn::Count { view: View::Off, min_off } => {
                let mark = match min_off.is_some_and(|n| day.meets_min_off(n)) {
                    true => "*",
                    false => "",
                };
                format!("{} off{mark}", day.off_count).into()
            }
            TimelineColumn::Members { view } => {
                let members = match view {
                    View::Working => &day.working,
                    View::Off => &day.off,
                };
                members
                    .iter()
                    .map(|m| m.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
                    .into()
            }
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TimelineColumn::Count { .. } => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, day: &TimelineDay) -> Option<Color> {
        match *self {
            TimelineColumn::Count {
                view: View::Working,
                ..
            } if day.all_free() => Some(Color::Green),
            TimelineColumn::Count {
                view: View::Off,
                min_off: Some(n),
            } if day.meets_min_off(n) => Some(Color::Green),
            _ => None,
        }
    }
}
