// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use rotacal_core::Rota;

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::timeline_formatter::TimelineFormatter;
use crate::util::{OutputFormat, View};

#[derive(Debug, Clone, Copy)]
pub struct CmdTimeline {
    pub output_format: OutputFormat,
    pub view: Option<View>,
}

impl CmdTimeline {
    pub const NAME: &str = "timeline";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List every day of the horizon with who is on or off")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::view())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            view: CommonArgs::get_view(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing timeline...");
        let days = rota.timeline();
        let view = self.view.unwrap_or(config.view);
        let formatter = TimelineFormatter::new(view, rota.roster().min_off)
            .with_output_format(self.output_format);

        match self.output_format {
            OutputFormat::Json => println!("{}", formatter.format(&days)),
            OutputFormat::Table => print!("{}", formatter.format(&days)),
        }
        Ok(())
    }
}
