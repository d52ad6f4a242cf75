// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use rotacal_core::Rota;

use crate::arg::CommonArgs;
use crate::calendar_formatter::CalendarFormatter;
use crate::config::Config;
use crate::util::View;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdCalendar {
    pub view: Option<View>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show month calendars of who is on and who is off")
            .arg(CommonArgs::view())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: CommonArgs::get_view(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering calendar...");
        let roster = rota.roster();
        let days = rota.timeline();
        let formatter = CalendarFormatter::new(rota.today(), self.view.unwrap_or(config.view))
            .with_min_off(roster.min_off);
        print!("{}", formatter.format(&days));
        Ok(())
    }
}
