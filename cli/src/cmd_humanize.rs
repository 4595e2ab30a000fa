// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use evcal_core::format_minute_time;

#[derive(Debug, Clone, Copy)]
pub struct CmdHumanize {
    pub minutes: i64,
}

impl CmdHumanize {
    pub const NAME: &str = "humanize";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Render a number of minutes as day, hour and minute text")
            .arg(
                arg!(minutes: <MINUTES> "The number of minutes")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<i64>("minutes") {
            Some(minutes) => Self { minutes: *minutes },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting minutes...");
        println!("{}", format_minute_time(self.minutes));
        Ok(())
    }
}
