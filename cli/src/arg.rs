// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};
use rotacal_core::{AnchorState, PersonPatch};

use crate::util::{OutputFormat, View, parse_anchor_date};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn view() -> Arg {
        arg!(--view <VIEW> "Show who is working or who is off, defaults to the configured view")
            .value_parser(value_parser!(View))
    }

    pub fn get_view(matches: &ArgMatches) -> Option<View> {
        matches.get_one("view").copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PersonArgs;

impl PersonArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the person, as listed by `rotacal people`")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone()
    }

    pub fn name() -> Arg {
        arg!(-n --name <NAME> "Name of the person")
    }

    pub fn weeks_on() -> Arg {
        arg!(--"weeks-on" <WEEKS> "Length of the work block in weeks, 1 to 26")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    pub fn weeks_off() -> Arg {
        arg!(--"weeks-off" <WEEKS> "Length of the off block in weeks, 1 to 26")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    pub fn anchor_date() -> Arg {
        arg!(--"anchor-date" <DATE> "A date whose status is known, in YYYY-MM-DD")
            .value_parser(parse_anchor_date)
    }

    pub fn anchor_state() -> Arg {
        arg!(--"anchor-state" <STATE> "Status of the person on the anchor date")
            .value_parser(value_parser!(AnchorState))
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR> "Color of the person, as #rrggbb")
    }

    /// All the fields of a person, as optional flags.
    pub fn fields() -> [Arg; 6] {
        [
            Self::name(),
            Self::weeks_on(),
            Self::weeks_off(),
            Self::anchor_date(),
            Self::anchor_state(),
            Self::color(),
        ]
    }

    pub fn get_patch(matches: &ArgMatches) -> PersonPatch {
        PersonPatch {
            name: matches.get_one::<String>("name").cloned(),
            color: matches.get_one::<String>("color").cloned(),
            weeks_on: matches.get_one::<i64>("weeks-on").copied(),
            weeks_off: matches.get_one::<i64>("weeks-off").copied(),
            anchor_date: matches.get_one::<NaiveDate>("anchor-date").copied(),
            anchor_state: matches.get_one::<AnchorState>("anchor-state").copied(),
        }
    }
}
