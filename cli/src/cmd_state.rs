// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Commands working on the roster as a whole and on its shareable form.

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use rotacal_core::{MAX_MONTHS, MIN_MONTHS, Rota};
use url::Url;

use crate::config::Config;

#[derive(Debug, Clone, Copy)]
pub struct CmdMonths {
    pub months: i64,
}

impl CmdMonths {
    pub const NAME: &str = "months";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about(format!(
                "Set how many months the calendar shows, {MIN_MONTHS} to {MAX_MONTHS}"
            ))
            .arg(
                arg!(months: <MONTHS> "Number of months")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<i64>("months") {
            Some(months) => Self { months: *months },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting months...");
        rota.edit(|roster, _| {
            roster.set_months(self.months);
            Ok(())
        })
        .await?;

        println!("{} {}", "Months:".bold(), rota.roster().months);
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdMinOff {
    pub min_off: Option<i64>,
}

impl CmdMinOff {
    pub const NAME: &str = "min-off";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set the minimum number of people off at once, or clear it when omitted")
            .arg(
                arg!(min_off: [N] "Minimum number of people off")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            min_off: matches.get_one::<i64>("min_off").copied(),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "setting minimum off...");
        rota.edit(|roster, _| {
            roster.set_min_off(self.min_off);
            Ok(())
        })
        .await?;

        match rota.roster().min_off {
            Some(n) => println!("{} {n}", "Minimum off:".bold()),
            None => println!("{} none", "Minimum off:".bold()),
        }
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdReset;

impl CmdReset {
    pub const NAME: &str = "reset";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Replace the roster with the built-in example")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdReset
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resetting roster...");
        rota.edit(|roster, today| {
            roster.reset(today);
            Ok(())
        })
        .await?;

        println!("Roster reset");
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdShare;

impl CmdShare {
    pub const NAME: &str = "share";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a link carrying the roster, or the bare fragment without a base URL")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdShare
    }

    pub async fn run(self, rota: &mut Rota, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "sharing roster...");
        println!("{}", Self::link(rota, config)?);
        Ok(())
    }

    fn link(rota: &Rota, config: &Config) -> Result<String, Box<dyn Error>> {
        match &config.base_url {
            Some(base) => {
                let base = Url::parse(base).map_err(|e| format!("Invalid base URL {base}: {e}"))?;
                Ok(rota.share_url(&base).to_string())
            }
            None => Ok(format!("#{}", rota.state())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdLoad {
    pub input: String,
}

impl CmdLoad {
    pub const NAME: &str = "load";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("import")
            .about("Replace the roster with the one carried by a link or fragment")
            .arg(arg!(input: <FRAGMENT_OR_URL> "A share link, or its fragment"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("input") {
            Some(input) => Self {
                input: input.clone(),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "loading roster...");
        match rota.load(&self.input).await? {
            None => println!("Loaded state from URL hash"),
            Some(e) => println!(
                "{} could not read the state ({e}), loaded the default roster",
                "Warning:".yellow()
            ),
        }
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdExport;

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Print the roster as a JSON document")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdExport
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting roster...");
        println!("{}", serde_json::to_string_pretty(rota.roster())?);
        Ok(())
    }
}

/// Prints the encoded roster after an edit.
pub fn print_state(rota: &Rota) {
    let label = match rota.is_persistent() {
        true => "Saved:",
        false => "State:",
    };
    println!("{} {}", label.bold(), rota.state());
}
