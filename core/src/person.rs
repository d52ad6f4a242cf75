// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr, sync::OnceLock};

use chrono::NaiveDate;
use regex::Regex;

/// Maximum number of characters kept in a person's name.
pub const MAX_NAME_CHARS: usize = 40;

/// Bounds for the length of the on and off blocks, in whole weeks.
pub const MIN_WEEKS: u32 = 1;
pub const MAX_WEEKS: u32 = 26;

/// Placeholder shown for people without a name.
pub const UNNAMED: &str = "(unnamed)";

/// Default colors, assigned by position in the roster.
pub const PERSON_COLORS: [&str; 10] = [
    "#d14a36", "#157f8a", "#6b8e23", "#7c4dff", "#ef6c00", "#2e7d32", "#00897b", "#ad1457",
    "#455a64", "#6d4c41",
];

/// One participant of the rotation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Stable identifier, unique within a roster.
    pub id: String,

    /// Display label, at most [`MAX_NAME_CHARS`] characters.
    pub name: String,

    /// Presentation color as `#rrggbb`.
    pub color: String,

    /// Length of the work block in weeks.
    pub weeks_on: u32,

    /// Length of the off block in weeks.
    pub weeks_off: u32,

    /// Reference date of the cycle phase.
    pub anchor_date: NaiveDate,

    /// Status of the person on [`Person::anchor_date`].
    pub anchor_state: AnchorState,
}

impl Person {
    /// The name to show, falling back to a placeholder when blank.
    pub fn display_name(&self) -> &str {
        match self.name.trim().is_empty() {
            true => UNNAMED,
            false => &self.name,
        }
    }
}

/// Whether a person is working or off, used both for the anchor and for daily status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AnchorState {
    /// On duty.
    Work,

    /// Off duty.
    #[default]
    Off,
}

const STATE_WORK: &str = "work";
const STATE_OFF: &str = "off";

impl AsRef<str> for AnchorState {
    fn as_ref(&self) -> &str {
        match self {
            AnchorState::Work => STATE_WORK,
            AnchorState::Off => STATE_OFF,
        }
    }
}

impl Display for AnchorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for AnchorState {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATE_WORK => Ok(AnchorState::Work),
            STATE_OFF => Ok(AnchorState::Off),
            _ => Err(()),
        }
    }
}

/// Patch for a person, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct PersonPatch {
    /// New name, trimmed and truncated when applied.
    pub name: Option<String>,

    /// New color, ignored unless it is a valid `#rrggbb` value.
    pub color: Option<String>,

    /// New length of the work block, clamped to the valid range.
    pub weeks_on: Option<i64>,

    /// New length of the off block, clamped to the valid range.
    pub weeks_off: Option<i64>,

    /// New anchor date.
    pub anchor_date: Option<NaiveDate>,

    /// New anchor state.
    pub anchor_state: Option<AnchorState>,
}

impl PersonPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.color.is_none()
            && self.weeks_on.is_none()
            && self.weeks_off.is_none()
            && self.anchor_date.is_none()
            && self.anchor_state.is_none()
    }

    /// Applies the patch to a person, modifying it in place.
    pub fn apply_to<'a>(&self, p: &'a mut Person) -> &'a mut Person {
        if let Some(name) = &self.name {
            p.name = truncate_name(name.trim());
        }

        if let Some(color) = &self.color {
            match normalize_color(color) {
                Some(color) => p.color = color,
                None => tracing::warn!(color, "ignoring invalid color"),
            }
        }

        if let Some(weeks) = self.weeks_on {
            p.weeks_on = clamp_weeks(weeks);
        }

        if let Some(weeks) = self.weeks_off {
            p.weeks_off = clamp_weeks(weeks);
        }

        if let Some(date) = self.anchor_date {
            p.anchor_date = date;
        }

        if let Some(state) = self.anchor_state {
            p.anchor_state = state;
        }

        p
    }
}

/// The palette color for the person at `index`.
pub fn default_color(index: usize) -> &'static str {
    PERSON_COLORS[index % PERSON_COLORS.len()]
}

/// Lower-cased `#rrggbb` color, or `None` if the input is not one.
pub fn normalize_color(value: &str) -> Option<String> {
    const RE: &str = r"^#[0-9a-fA-F]{6}$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    re.is_match(value).then(|| value.to_ascii_lowercase())
}

pub(crate) fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}

pub(crate) fn clamp_weeks(weeks: i64) -> u32 {
    weeks.clamp(MIN_WEEKS as i64, MAX_WEEKS as i64) as u32
}
