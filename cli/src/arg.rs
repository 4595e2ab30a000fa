// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use evcal_core::parse_date;
use jiff::civil::Date;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

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
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    /// A JSON file of stored events, `-` for stdin.
    pub fn events() -> Arg {
        arg!(events: <EVENTS> "Path to a JSON array of events, or - for stdin")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_events(matches: &ArgMatches) -> PathBuf {
        match matches.get_one::<PathBuf>("events") {
            Some(path) => path.clone(),
            None => unreachable!("events is required"),
        }
    }

    /// An optional `YYYY-MM-DD` date, today when omitted.
    pub fn date() -> Arg {
        arg!(date: [DATE] "The date to show, YYYY-MM-DD, defaults to today")
            .value_parser(|s: &str| parse_date(s).map_err(|e| e.to_string()))
    }

    pub fn get_date(matches: &ArgMatches) -> Option<Date> {
        matches.get_one("date").copied()
    }
}
