// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod calendar_formatter;
mod cli;
mod cmd_calendar;
mod cmd_generate_completion;
mod cmd_person;
mod cmd_state;
mod cmd_timeline;
mod config;
mod person_formatter;
mod table;
mod timeline_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
