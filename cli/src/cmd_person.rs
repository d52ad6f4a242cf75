// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use rotacal_core::{Person, PersonPatch, Rota, RosterError};

use crate::arg::{CommonArgs, PersonArgs};
use crate::cmd_state::print_state;
use crate::config::Config;
use crate::person_formatter::{PersonFormatter, PersonRow};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdPeople {
    pub output_format: OutputFormat,
}

impl CmdPeople {
    pub const NAME: &str = "people";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the people of the roster with their status today")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing people...");
        let people: Vec<&Person> = rota.roster().people.iter().collect();
        print_people(rota, &people, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPersonAdd {
    pub patch: PersonPatch,
    pub output_format: OutputFormat,
}

impl CmdPersonAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a person, with defaults for every field not given")
            .args(PersonArgs::fields())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            patch: PersonArgs::get_patch(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding person...");
        let id = rota
            .edit(|roster, today| {
                let id = roster.add_person(today)?.id.clone();
                roster.update_person(&id, &self.patch)?;
                Ok(id)
            })
            .await?;

        print_person(rota, &id, self.output_format)?;
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPersonEdit {
    pub id: String,
    pub patch: PersonPatch,
    pub output_format: OutputFormat,
}

impl CmdPersonEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit a person")
            .arg(PersonArgs::id())
            .args(PersonArgs::fields())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PersonArgs::get_id(matches),
            patch: PersonArgs::get_patch(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing person...");
        if self.patch.is_empty() {
            return Err("Nothing to change, pass at least one field to edit".into());
        }

        rota.edit(|roster, _| roster.update_person(&self.id, &self.patch).map(|_| ()))
            .await?;

        print_person(rota, &self.id, self.output_format)?;
        print_state(rota);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdPersonRemove {
    pub id: String,
}

impl CmdPersonRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a person, the roster always keeps at least one")
            .arg(PersonArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: PersonArgs::get_id(matches),
        }
    }

    pub async fn run(self, rota: &mut Rota, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing person...");
        let removed = rota
            .edit(|roster, today| {
                roster
                    .remove_person(&self.id, today)
                    .ok_or_else(|| RosterError::PersonNotFound(self.id.clone()))
            })
            .await?;

        println!("{} {}", "Removed:".bold(), removed.display_name());
        print_state(rota);
        Ok(())
    }
}

fn print_people(rota: &Rota, people: &[&Person], output_format: OutputFormat) {
    let rows: Vec<PersonRow<'_>> = people
        .iter()
        .map(|p| PersonRow::new(p, rota.today()))
        .collect();

    let formatter = PersonFormatter::new().with_output_format(output_format);
    match output_format {
        OutputFormat::Json => println!("{}", formatter.format(&rows)),
        OutputFormat::Table => print!("{}", formatter.format(&rows)),
    }
}

fn print_person(rota: &Rota, id: &str, output_format: OutputFormat) -> Result<(), Box<dyn Error>> {
    // edits sanitize the roster, which keeps ids unless they collide
    let person = rota
        .roster()
        .person(id)
        .ok_or_else(|| RosterError::PersonNotFound(id.to_string()))?;
    print_people(rota, &[person], output_format);
    Ok(())
}
