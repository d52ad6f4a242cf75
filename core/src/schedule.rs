// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::datetime::{add_days, days_between};
use crate::person::{AnchorState, Person, clamp_weeks};

/// The repeating on/off period of one person, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    work_days: i64,
    off_days: i64,
    anchor_state: AnchorState,
}

impl Cycle {
    /// The cycle of a person. Week counts outside the valid range are clamped.
    pub fn of(person: &Person) -> Self {
        Self {
            work_days: clamp_weeks(person.weeks_on.into()) as i64 * 7,
            off_days: clamp_weeks(person.weeks_off.into()) as i64 * 7,
            anchor_state: person.anchor_state,
        }
    }

    /// Number of working days per cycle.
    pub fn work_days(&self) -> i64 {
        self.work_days
    }

    /// Number of days off per cycle.
    pub fn off_days(&self) -> i64 {
        self.off_days
    }

    /// Total length of the cycle in days.
    pub fn len(&self) -> i64 {
        self.work_days + self.off_days
    }

    /// Position of `date` in the cycle started at `anchor`, always in `[0, len)`.
    pub fn index_of(&self, anchor: NaiveDate, date: NaiveDate) -> i64 {
        days_between(anchor, date).rem_euclid(self.len())
    }

    /// Whether the day at `index` of the cycle is off.
    ///
    /// The block matching the anchor state always comes first.
    pub fn is_off_at(&self, index: i64) -> bool {
        match self.anchor_state {
            AnchorState::Off => index < self.off_days,
            AnchorState::Work => index >= self.work_days,
        }
    }

    fn first_block(&self) -> i64 {
        match self.anchor_state {
            AnchorState::Off => self.off_days,
            AnchorState::Work => self.work_days,
        }
    }
}

/// Whether `person` is off on `date`.
pub fn is_off(person: &Person, date: NaiveDate) -> bool {
    let cycle = Cycle::of(person);
    cycle.is_off_at(cycle.index_of(person.anchor_date, date))
}

/// The status of `person` on `date`.
pub fn status_on(person: &Person, date: NaiveDate) -> AnchorState {
    match is_off(person, date) {
        true => AnchorState::Off,
        false => AnchorState::Work,
    }
}

/// The first date after `date` on which the status of `person` changes.
pub fn next_switch(person: &Person, date: NaiveDate) -> NaiveDate {
    let cycle = Cycle::of(person);
    let index = cycle.index_of(person.anchor_date, date);
    let remaining = match index < cycle.first_block() {
        true => cycle.first_block() - index,
        false => cycle.len() - index,
    };
    add_days(date, remaining)
}
