// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::person::{AnchorState, Person, PersonPatch, default_color};
use crate::sanitize::sanitize_with;

/// Maximum number of people in a roster.
pub const MAX_PEOPLE: usize = 30;

/// Bounds and default of the timeline horizon, in months.
pub const MIN_MONTHS: u32 = 1;
pub const MAX_MONTHS: u32 = 24;
pub const DEFAULT_MONTHS: u32 = 6;

/// The whole shareable configuration: horizon, threshold and people.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// Number of months shown in the timeline.
    pub months: u32,

    /// Minimum number of people simultaneously off, used when highlighting days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_off: Option<u32>,

    /// People in display order.
    pub people: Vec<Person>,
}

/// Errors raised by roster edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The roster already holds [`MAX_PEOPLE`] people.
    #[error("Maximum number of people reached")]
    TooManyPeople,

    /// No person has the given id.
    #[error("No person with id: {0}")]
    PersonNotFound(String),
}

impl Roster {
    /// The built-in roster used when nothing valid is available.
    pub fn default_with(today: NaiveDate) -> Self {
        Self {
            months: DEFAULT_MONTHS,
            min_off: None,
            people: default_people(today),
        }
    }

    /// Normalizes this roster through the same gate as untrusted input.
    pub fn sanitized_with(&self, today: NaiveDate) -> Self {
        let value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        sanitize_with(&value, today)
    }

    /// Finds a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Appends a new person with default settings.
    pub fn add_person(&mut self, today: NaiveDate) -> Result<&mut Person, RosterError> {
        if self.people.len() >= MAX_PEOPLE {
            return Err(RosterError::TooManyPeople);
        }

        let index = self.people.len();
        let letter = char::from(b'A' + (index % 26) as u8);
        self.people.push(new_person(
            generate_id(),
            format!("Friend {letter}"),
            default_color(index),
            (1, 1),
            today,
        ));

        tracing::debug!(count = self.people.len(), "person added");
        Ok(&mut self.people[index])
    }

    /// Removes a person by id. Removing the last person leaves a fresh default person.
    pub fn remove_person(&mut self, id: &str, today: NaiveDate) -> Option<Person> {
        let index = self.people.iter().position(|p| p.id == id)?;
        let removed = self.people.remove(index);

        if self.people.is_empty() {
            tracing::debug!("last person removed, inserting a default one");
            self.people.push(new_person(
                generate_id(),
                "Friend A".to_string(),
                default_color(0),
                (1, 1),
                today,
            ));
        }

        if let Some(min_off) = self.min_off {
            self.min_off = Some(min_off.min(self.people.len() as u32));
        }

        Some(removed)
    }

    /// Applies a patch to the person with the given id.
    pub fn update_person(
        &mut self,
        id: &str,
        patch: &PersonPatch,
    ) -> Result<&mut Person, RosterError> {
        let person = self
            .people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RosterError::PersonNotFound(id.to_string()))?;

        Ok(patch.apply_to(person))
    }

    /// Sets the horizon, clamped to the valid range.
    pub fn set_months(&mut self, months: i64) {
        self.months = months.clamp(MIN_MONTHS as i64, MAX_MONTHS as i64) as u32;
    }

    /// Sets or clears the minimum-off threshold, clamped to the number of people.
    pub fn set_min_off(&mut self, min_off: Option<i64>) {
        let max = self.people.len().max(1) as i64;
        self.min_off = min_off.map(|n| n.clamp(1, max) as u32);
    }

    /// Replaces everything with the built-in roster.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::default_with(today);
    }
}

/// Generates a fresh person id.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// The two example people of the built-in roster.
///
/// Their ids are generated once per process, so the default roster is stable within a run.
pub(crate) fn default_people(today: NaiveDate) -> Vec<Person> {
    static IDS: OnceLock<[String; 2]> = OnceLock::new();
    let [a, b] = IDS.get_or_init(|| [generate_id(), generate_id()]);

    vec![
        new_person(a.clone(), "Friend A".to_string(), default_color(0), (1, 1), today),
        new_person(b.clone(), "Friend B".to_string(), default_color(1), (2, 2), today),
    ]
}

fn new_person(
    id: String,
    name: String,
    color: &str,
    (weeks_on, weeks_off): (u32, u32),
    today: NaiveDate,
) -> Person {
    Person {
        id,
        name,
        color: color.to_string(),
        weeks_on,
        weeks_off,
        anchor_date: today,
        anchor_state: AnchorState::Off,
    }
}
