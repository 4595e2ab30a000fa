// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evcal_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::{CmdMonth, CmdWeek};
use crate::cmd_due::CmdDue;
use crate::cmd_expand::CmdExpand;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_humanize::CmdHumanize;
use crate::cmd_overlap::CmdOverlap;
use crate::cmd_search::CmdSearch;
use crate::config::parse_config;

/// Run the evcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
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

/// Logs go to stderr, filtered by `RUST_LOG` and defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

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
            .about("Expand repeating events, detect overlaps and compute reminders.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evcal/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/evcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdExpand::command())
            .subcommand(CmdOverlap::command())
            .subcommand(CmdDue::command())
            .subcommand(CmdSearch::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdWeek::command())
            .subcommand(CmdHumanize::command())
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
            Some((CmdExpand::NAME, matches)) => Expand(CmdExpand::from(matches)),
            Some((CmdOverlap::NAME, matches)) => Overlap(CmdOverlap::from(matches)),
            Some((CmdDue::NAME, matches)) => Due(CmdDue::from(matches)),
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdHumanize::NAME, matches)) => Humanize(CmdHumanize::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Expand a repeating event form into its occurrences
    Expand(CmdExpand),

    /// Check a candidate event against stored events
    Overlap(CmdOverlap),

    /// List reminders that are due
    Due(CmdDue),

    /// Search events within a week or month
    Search(CmdSearch),

    /// Show a month calendar
    Month(CmdMonth),

    /// Show a week calendar
    Week(CmdWeek),

    /// Render a minute count as text
    Humanize(CmdHumanize),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command, loading the configuration only for commands that need it
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Expand(a) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                a.run(&config).await
            }
            Overlap(a)            => a.run().await,
            Due(a)                => a.run().await,
            Search(a)             => a.run().await,
            Month(a)              => a.run().await,
            Week(a)               => a.run().await,
            Humanize(a)           => a.run(),
            GenerateCompletion(a) => a.run(),
        }
    }
}
