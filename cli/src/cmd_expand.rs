// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evcal_core::{Config, EventForm, Rules, expand_group, time_error_message, validate_form};

use crate::arg::CommonArgs;
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, read_json};

#[derive(Debug, Clone)]
pub struct CmdExpand {
    pub form: PathBuf,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdExpand {
    pub const NAME: &str = "expand";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Expand a repeating event form into its occurrences")
            .arg(
                arg!(form: <FORM> "Path to an event form in JSON, or - for stdin")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<PathBuf>("form") {
            Some(form) => Self {
                form: form.clone(),
                output_format: CommonArgs::get_output_format(matches),
                verbose: CommonArgs::get_verbose(matches),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "expanding event form...");
        let form: EventForm = read_json(&self.form).await?;

        if let Err(e) = validate_form(&form) {
            let times = time_error_message(&form.start_time, &form.end_time);
            for message in [times.start_time_error, times.end_time_error].into_iter().flatten() {
                println!("{} {}", "Warning:".yellow(), message);
            }
            return Err(e.into());
        }

        let group = expand_group(&form, &Rules::from(config))?;
        if let Some(id) = &group.id {
            tracing::info!(%id, count = group.events.len(), "expanded recurrence group");
        }

        let formatter = EventFormatter::new()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        println!("{}", formatter.format(&group.events));
        Ok(())
    }
}
