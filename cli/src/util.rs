// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use colored::Color;
use rotacal_core::datetime::parse_date;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Which side of the rotation a view focuses on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Who is working, and the days when everyone is free.
    #[default]
    Working,

    /// Who is off, and the days meeting the minimum-off threshold.
    Off,
}

/// Parses a `YYYY-MM-DD` date given on the command line.
pub fn parse_anchor_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("Invalid date: {s}. Expected format: YYYY-MM-DD"))
}

/// Terminal color for a `#rrggbb` value.
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
