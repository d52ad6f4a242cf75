// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use rotacal_core::{APP_NAME, Rota};
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::CmdCalendar;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_person::{CmdPeople, CmdPersonAdd, CmdPersonEdit, CmdPersonRemove};
use crate::cmd_state::{CmdExport, CmdLoad, CmdMinOff, CmdMonths, CmdReset, CmdShare};
use crate::cmd_timeline::CmdTimeline;
use crate::config::{Config, parse_config};

/// Run the rotacal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Encoded state to work on instead of the state file
    pub state: Option<String>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("See when everyone in a group is on or off their work/rest rotation.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/rotacal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/rotacal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-s --state <STATE> "Work on this share link or fragment instead of the saved state")
                    .long_help(
                        "\
Work on this share link or fragment instead of the saved state. Edits are not saved, \
the new state is printed instead.",
                    ),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdTimeline::command())
            .subcommand(CmdPeople::command())
            .subcommand(
                Command::new("person")
                    .alias("p")
                    .about("Manage the people of the roster")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdPersonAdd::command())
                    .subcommand(CmdPersonEdit::command())
                    .subcommand(CmdPersonRemove::command()),
            )
            .subcommand(CmdMonths::command())
            .subcommand(CmdMinOff::command())
            .subcommand(CmdReset::command())
            .subcommand(CmdShare::command())
            .subcommand(CmdLoad::command())
            .subcommand(CmdExport::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdTimeline::NAME, matches)) => Timeline(CmdTimeline::from(matches)),
            Some((CmdPeople::NAME, matches)) => People(CmdPeople::from(matches)),
            Some(("person", matches)) => match matches.subcommand() {
                Some((CmdPersonAdd::NAME, matches)) => PersonAdd(CmdPersonAdd::from(matches)),
                Some((CmdPersonEdit::NAME, matches)) => PersonEdit(CmdPersonEdit::from(matches)),
                Some((CmdPersonRemove::NAME, matches)) => {
                    PersonRemove(CmdPersonRemove::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdMonths::NAME, matches)) => Months(CmdMonths::from(matches)),
            Some((CmdMinOff::NAME, matches)) => MinOff(CmdMinOff::from(matches)),
            Some((CmdReset::NAME, matches)) => Reset(CmdReset::from(matches)),
            Some((CmdShare::NAME, matches)) => Share(CmdShare::from(matches)),
            Some((CmdLoad::NAME, matches)) => Load(CmdLoad::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Calendar(CmdCalendar::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let state = matches.get_one("state").cloned();
        Ok(Cli {
            config,
            state,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.state).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show month calendars
    Calendar(CmdCalendar),

    /// List the days of the horizon
    Timeline(CmdTimeline),

    /// List the people
    People(CmdPeople),

    /// Add a person
    PersonAdd(CmdPersonAdd),

    /// Edit a person
    PersonEdit(CmdPersonEdit),

    /// Remove a person
    PersonRemove(CmdPersonRemove),

    /// Set the horizon
    Months(CmdMonths),

    /// Set or clear the minimum-off threshold
    MinOff(CmdMinOff),

    /// Restore the built-in roster
    Reset(CmdReset),

    /// Print a share link
    Share(CmdShare),

    /// Load a shared roster
    Load(CmdLoad),

    /// Print the roster as JSON
    Export(CmdExport),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, state: Option<String>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Calendar(a)     => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Timeline(a)     => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            People(a)       => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            PersonAdd(a)    => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            PersonEdit(a)   => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            PersonRemove(a) => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Months(a)       => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            MinOff(a)       => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Reset(a)        => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Share(a)        => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Load(a)         => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            Export(a)       => Self::run_with(config, state, |x, c| a.run(x, c).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        state: Option<String>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Rota, &'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        let mut rota = match state {
            Some(state) => Rota::ephemeral(core_config, &state),
            None => Rota::new(core_config).await?,
        };

        f(&mut rota, &config).await
    }
}
