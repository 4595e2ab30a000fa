// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evcal_core::{Event, EventForm, find_overlapping};
use serde::Deserialize;

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, read_json};

/// An event about to be saved: a new form, or an edit of a stored event.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Candidate {
    Event(Event),
    Form(EventForm),
}

#[derive(Debug, Clone)]
pub struct CmdOverlap {
    pub candidate: PathBuf,
    pub events: PathBuf,
    pub output_format: OutputFormat,
}

impl CmdOverlap {
    pub const NAME: &str = "overlap";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the events a new or edited event overlaps")
            .arg(
                arg!(candidate: <CANDIDATE> "Path to the event or form to check, in JSON")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(EventArgs::events())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<PathBuf>("candidate") {
            Some(candidate) => Self {
                candidate: candidate.clone(),
                events: EventArgs::get_events(matches),
                output_format: CommonArgs::get_output_format(matches),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking overlaps...");
        let candidate: Candidate = read_json(&self.candidate).await?;
        let events: Vec<Event> = read_json(&self.events).await?;

        let found = match &candidate {
            Candidate::Event(event) => find_overlapping(event, &events),
            Candidate::Form(form) => find_overlapping(form, &events),
        };

        if self.output_format == OutputFormat::Table {
            if found.is_empty() {
                println!("{}", "겹치는 일정이 없습니다.".green());
                return Ok(());
            }
            println!("{}", "일정 겹침 경고".yellow().bold());
            println!("다음 일정과 겹칩니다:");
        }

        let formatter = EventFormatter::new()
            .with_id()
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&found));
        Ok(())
    }
}
