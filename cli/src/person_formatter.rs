// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::NaiveDate;
use colored::Color;
use rotacal_core::datetime::format_date;
use rotacal_core::{AnchorState, Person, next_switch, status_on};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyle};
use crate::util::{OutputFormat, hex_color};

/// A person together with their status on a given day.
#[derive(Debug)]
pub struct PersonRow<'a> {
    pub person: &'a Person,
    pub status: AnchorState,
    pub next_switch: NaiveDate,
}

impl<'a> PersonRow<'a> {
    pub fn new(person: &'a Person, date: NaiveDate) -> Self {
        Self {
            person,
            status: status_on(person, date),
            next_switch: next_switch(person, date),
        }
    }
}

#[derive(Debug)]
pub struct PersonFormatter {
    columns: Vec<PersonColumn>,
    format: OutputFormat,
}

impl PersonFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                PersonColumn::Id,
                PersonColumn::Name,
                PersonColumn::Cycle,
                PersonColumn::Anchor,
                PersonColumn::Status,
                PersonColumn::NextSwitch,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [PersonRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [PersonRow<'a>],
    formatter: &'a PersonFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.formatter.format {
            OutputFormat::Json => TableStyle::Json,
            OutputFormat::Table => TableStyle::Basic,
        };
        write!(
            f,
            "{}",
            Table::new(style, &self.formatter.columns, self.rows)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonColumn {
    Id,
    Name,
    Cycle,
    Anchor,
    Status,
    NextSwitch,
}

impl<'p> TableColumn<PersonRow<'p>> for PersonColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PersonColumn::Id => "id",
            PersonColumn::Name => "name",
            PersonColumn::Cycle => "cycle",
            PersonColumn::Anchor => "anchor",
            PersonColumn::Status => "status",
            PersonColumn::NextSwitch => "next_switch",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a PersonRow<'p>) -> Cow<'a, str> {
        let p = row.person;
        match self {
            PersonColumn::Id => p.id.as_str().into(),
            PersonColumn::Name => p.display_name().into(),
            PersonColumn::Cycle => format!("{}w on / {}w off", p.weeks_on, p.weeks_off).into(),
            PersonColumn::Anchor => {
                format!("{} {}", format_date(p.anchor_date), p.anchor_state).into()
            }
            PersonColumn::Status => row.status.to_string().into(),
            PersonColumn::NextSwitch => format_date(row.next_switch).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, row: &PersonRow<'p>) -> Option<Color> {
        match self {
            PersonColumn::Name => hex_color(&row.person.color),
            PersonColumn::Status => match row.status {
                AnchorState::Work => Some(Color::Yellow),
                AnchorState::Off => Some(Color::Green),
            },
            _ => None,
        }
    }
}
