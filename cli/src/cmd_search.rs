// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, arg, value_parser};
use evcal_core::{Event, View, filter_events, parse_date, sort_events_by_date};
use jiff::civil::Date;

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, read_json, today};

#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub events: PathBuf,
    pub term: String,
    pub date: Option<Date>,
    pub view: View,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Search the events of a week or month")
            .arg(EventArgs::events())
            .arg(arg!(term: [TERM] "Text to look for in title, description or location"))
            .arg(
                arg!(-d --date <DATE> "A date within the week or month, defaults to today")
                    .value_parser(|s: &str| parse_date(s).map_err(|e| e.to_string())),
            )
            .arg(
                arg!(--view <VIEW> "Search within the week or the month")
                    .value_parser(value_parser!(View))
                    .default_value("month"),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            events: EventArgs::get_events(matches),
            term: matches.get_one::<String>("term").cloned().unwrap_or_default(),
            date: matches.get_one("date").copied(),
            view: matches.get_one("view").copied().unwrap_or(View::Month),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching events...");
        let events: Vec<Event> = read_json(&self.events).await?;
        let date = self.date.unwrap_or_else(today);

        let mut found: Vec<Event> = filter_events(&events, &self.term, date, self.view)
            .into_iter()
            .cloned()
            .collect();
        sort_events_by_date(&mut found);

        if found.is_empty() && self.output_format == OutputFormat::Table {
            println!("검색 결과가 없습니다.");
            return Ok(());
        }

        let formatter = EventFormatter::new()
            .with_id()
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        println!("{}", formatter.format(&found));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_search() {
        let cmd = Command::new("test").subcommand(CmdSearch::command());
        let matches = cmd
            .try_get_matches_from([
                "test",
                "search",
                "events.json",
                "회의",
                "--date",
                "2025-10-15",
                "--view",
                "week",
            ])
            .unwrap();
        let parsed = CmdSearch::from(matches.subcommand_matches("search").unwrap());
        assert_eq!(parsed.term, "회의");
        assert_eq!(parsed.date, Some(date(2025, 10, 15)));
        assert_eq!(parsed.view, View::Week);
    }

    #[test]
    fn test_parse_search_defaults() {
        let cmd = Command::new("test").subcommand(CmdSearch::command());
        let matches = cmd
            .try_get_matches_from(["test", "search", "events.json"])
            .unwrap();
        let parsed = CmdSearch::from(matches.subcommand_matches("search").unwrap());
        assert_eq!(parsed.term, "");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.view, View::Month);
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }
}
