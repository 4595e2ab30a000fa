// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashSet, error::Error, path::PathBuf, time::Duration};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use evcal_core::{Event, Notification, notifications};
use jiff::civil::DateTime;
use tokio::time::{MissedTickBehavior, interval};

use crate::arg::{CommonArgs, EventArgs};
use crate::util::{OutputFormat, now, parse_datetime, read_json};

#[derive(Debug, Clone)]
pub struct CmdDue {
    pub events: PathBuf,
    pub now: Option<DateTime>,
    pub notified: Vec<String>,
    pub watch: Option<u64>,
    pub output_format: OutputFormat,
}

impl CmdDue {
    pub const NAME: &str = "due";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show reminders for events starting soon")
            .arg(EventArgs::events())
            .arg(
                arg!(--now <DATETIME> "Evaluate at this time, YYYY-MM-DD HH:MM, instead of now")
                    .value_parser(|s: &str| parse_datetime(s).map_err(|e| e.to_string())),
            )
            .arg(
                arg!(--notified <ID> ... "Ids of events already notified")
                    .value_parser(value_parser!(String)),
            )
            .arg(
                arg!(-w --watch <SECS> "Keep checking every SECS seconds until interrupted")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            events: EventArgs::get_events(matches),
            now: matches.get_one("now").copied(),
            notified: matches
                .get_many::<String>("notified")
                .map(|ids| ids.cloned().collect())
                .unwrap_or_default(),
            watch: matches.get_one("watch").copied(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking due events...");
        let events: Vec<Event> = read_json(&self.events).await?;
        let mut notified: HashSet<String> = self.notified.iter().cloned().collect();

        let Some(secs) = self.watch else {
            let due = notifications(&events, self.now.unwrap_or_else(now), &notified);
            return print_notifications(&due, self.output_format);
        };

        // each tick finishes before the next one starts, late ticks are dropped
        let mut ticker = interval(Duration::from_secs(secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let due = notifications(&events, now(), &notified);
                    print_notifications(&due, self.output_format)?;
                    notified.extend(due.into_iter().map(|n| n.id));
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!(notified = notified.len(), "stop watching");
                    return Ok(());
                }
            }
        }
    }
}

fn print_notifications(
    due: &[Notification],
    output_format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(due)?),
        OutputFormat::Table => {
            for notification in due {
                println!("{} {}", "🔔".bold(), notification.message);
            }
        }
    }
    Ok(())
}
