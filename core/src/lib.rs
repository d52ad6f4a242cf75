// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Rotation calendar core: who is on and who is off a recurring work/rest cycle, and the
//! compact text form that lets the whole roster travel in a link.

mod codec;
mod config;
pub mod datetime;
mod person;
mod rota;
mod roster;
mod sanitize;
mod schedule;
mod timeline;

pub use crate::codec::{
    DecodeError, STATE_VERSION_PREFIX, decode, decode_with, encode, encode_with, fragment_of,
    share_url, share_url_with, try_decode, try_decode_with,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::person::{
    AnchorState, MAX_NAME_CHARS, MAX_WEEKS, MIN_WEEKS, PERSON_COLORS, Person, PersonPatch,
    UNNAMED, default_color, normalize_color,
};
pub use crate::rota::Rota;
pub use crate::roster::{
    DEFAULT_MONTHS, MAX_MONTHS, MAX_PEOPLE, MIN_MONTHS, Roster, RosterError,
};
pub use crate::sanitize::{sanitize, sanitize_with};
pub use crate::schedule::{Cycle, is_off, next_switch, status_on};
pub use crate::timeline::{
    FALLBACK_COLOR, TimelineDay, TimelineMember, TimelineStart, compute_timeline, timeline_end,
    timeline_start,
};
