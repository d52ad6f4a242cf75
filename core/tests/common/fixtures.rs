// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use chrono::NaiveDate;
use rotacal_core::{AnchorState, Config, Person, Roster, TimelineStart, default_color};

/// Shorthand for a calendar date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Creates a configuration whose state lives at `state_path`.
#[must_use]
pub fn test_config(state_path: &Path) -> Config {
    Config {
        state_path: Some(state_path.to_path_buf()),
        timeline_start: TimelineStart::Today,
    }
}

/// Creates a roster from people, with the default horizon and no threshold.
#[must_use]
pub fn roster(people: Vec<Person>) -> Roster {
    Roster {
        months: 6,
        min_off: None,
        people,
    }
}

/// Builder for test people.
///
/// # Example
///
/// ```ignore
/// let person = PersonBuilder::new("ann").weeks(2, 1).anchor(date(2024, 1, 1), AnchorState::Work).build();
/// ```
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    id: String,
    name: String,
    color: String,
    weeks_on: u32,
    weeks_off: u32,
    anchor_date: NaiveDate,
    anchor_state: AnchorState,
}

impl PersonBuilder {
    /// Creates a builder for a 1/1 person anchored off on 2024-01-01.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            color: default_color(0).to_string(),
            weeks_on: 1,
            weeks_off: 1,
            anchor_date: date(2024, 1, 1),
            anchor_state: AnchorState::Off,
        }
    }

    /// Sets the display name.
    #[allow(dead_code)]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the color.
    #[allow(dead_code)]
    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Sets the work and off block lengths, in weeks.
    #[allow(dead_code)]
    pub fn weeks(mut self, weeks_on: u32, weeks_off: u32) -> Self {
        self.weeks_on = weeks_on;
        self.weeks_off = weeks_off;
        self
    }

    /// Sets the anchor.
    #[allow(dead_code)]
    pub fn anchor(mut self, anchor_date: NaiveDate, anchor_state: AnchorState) -> Self {
        self.anchor_date = anchor_date;
        self.anchor_state = anchor_state;
        self
    }

    /// Builds the person.
    pub fn build(self) -> Person {
        Person {
            id: self.id,
            name: self.name,
            color: self.color,
            weeks_on: self.weeks_on,
            weeks_off: self.weeks_off,
            anchor_date: self.anchor_date,
            anchor_state: self.anchor_state,
        }
    }
}
