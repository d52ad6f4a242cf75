// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grids of the timeline, one row per ISO week.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use rotacal_core::TimelineDay;
use rotacal_core::datetime::{add_days, each_day, end_of_month, iso_week, start_of_month};

use crate::util::View;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LABEL_WIDTH: usize = 8;
const CELL_WIDTH: usize = LABEL_WIDTH + 3;

#[derive(Debug)]
pub struct CalendarFormatter {
    today: NaiveDate,
    view: View,
    min_off: Option<u32>,
}

impl CalendarFormatter {
    pub fn new(today: NaiveDate, view: View) -> Self {
        Self {
            today,
            view,
            min_off: None,
        }
    }

    pub fn with_min_off(mut self, min_off: Option<u32>) -> Self {
        self.min_off = min_off;
        self
    }

    pub fn format<'a>(&'a self, days: &'a [TimelineDay]) -> Display<'a> {
        Display {
            days,
            formatter: self,
        }
    }

    fn cell(&self, date: NaiveDate, day: Option<&TimelineDay>) -> String {
        let number = format!("{:>2}", date.day());
        let number = match date == self.today {
            true => number.bold().underline().to_string(),
            false => number,
        };

        let Some(day) = day else {
            // before the timeline starts
            return format!("{} {:<LABEL_WIDTH$}", number.dimmed(), "");
        };

        let (label, highlight) = match self.view {
            View::Working if day.all_free() => ("all free".to_string(), true),
            View::Working => (format!("{} on", day.on_count), false),
            View::Off => {
                let highlight = self.min_off.is_some_and(|n| day.meets_min_off(n));
                let mark = if highlight { "*" } else { "" };
                (format!("{} off{mark}", day.off_count), highlight)
            }
        };

        let label = format!("{label:<LABEL_WIDTH$}");
        match highlight {
            true => format!("{number} {}", label.green().bold()),
            false => format!("{number} {label}"),
        }
    }

    fn write_month(
        &self,
        f: &mut fmt::Formatter<'_>,
        month: NaiveDate,
        days: &HashMap<NaiveDate, &TimelineDay>,
    ) -> fmt::Result {
        writeln!(f, "{}", month.format("%B %Y").to_string().bold())?;

        write!(f, "{}", "Wk".dimmed())?;
        for name in WEEKDAYS {
            write!(f, " {name:<CELL_WIDTH$}")?;
        }
        writeln!(f)?;

        let first = start_of_month(month);
        let last = end_of_month(month);
        let offset = first.weekday().num_days_from_monday() as i64;
        let mut monday = add_days(first, -offset);
        // a month spans at most six weeks
        for _ in 0..6 {
            if monday > last {
                break;
            }

            write!(f, "{}", format!("{:>2}", iso_week(monday)).dimmed())?;
            for date in each_day(monday, add_days(monday, 6)) {
                let cell = match date.month() == month.month() && date.year() == month.year() {
                    true => self.cell(date, days.get(&date).copied()),
                    false => " ".repeat(CELL_WIDTH),
                };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
            monday = add_days(monday, 7);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    days: &'a [TimelineDay],
    formatter: &'a CalendarFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lookup: HashMap<NaiveDate, &TimelineDay> =
            self.days.iter().map(|d| (d.date, d)).collect();

        let mut months: Vec<NaiveDate> = self.days.iter().map(|d| start_of_month(d.date)).collect();
        months.dedup();

        for (i, month) in months.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.formatter.write_month(f, month, &lookup)?;
        }

        if let (View::Off, Some(n)) = (self.formatter.view, self.formatter.min_off) {
            writeln!(f)?;
            writeln!(f, "{} at least {n} off", "*".green().bold())?;
        }
        Ok(())
    }
}
