// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// How a table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Aligned, colored columns separated by spaces.
    Basic,

    /// A JSON array of objects keyed by column name.
    Json,
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub struct Table<'a, T, C: TableColumn<T>> {
    style: TableStyle,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(style: TableStyle, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }

    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = get_column_max_width(&table, self.columns.len());
        let last = self.columns.len().saturating_sub(1);
        for (cells, row) in table.iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let width = widths[j];
                let padded = match col.padding_direction() {
                    // last column does not need padding if it's left-aligned
                    PaddingDirection::Left if j == last => cell.to_string(),
                    PaddingDirection::Left => pad(cell, width, false),
                    PaddingDirection::Right => pad(cell, width, true),
                };

                match col.color(row) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }

                if j < last {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = self
            .data
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| (col.name().into_owned(), col.format(row).into_owned().into()))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            TableStyle::Basic => self.fmt_basic(f),
            TableStyle::Json => self.fmt_json(f),
        }
    }
}

/// Pads by display width, so wide characters line up.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match right_align {
        true => format!("{fill}{cell}"),
        false => format!("{cell}{fill}"),
    }
}

fn get_column_max_width(table: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
