// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};
use evcal_core::APP_NAME;

use crate::Cli;

/// Writes a completion script for `evcal` to stdout or a file.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --output <FILE> "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self {
                shell: *shell,
                output: matches.get_one::<PathBuf>("output").cloned(),
            },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(path) => {
                let mut file = fs::File::create(path)?;
                self.shell.write(&mut file);
                tracing::info!(path = %path.display(), "completion script written");
            }
            None => self.shell.write(&mut io::stdout()),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Renders the completion script of the whole command tree into `buf`.
    pub fn write(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self {
            Shell::Bash => render(ClapShell::Bash, buf),
            Shell::Elvish => render(ClapShell::Elvish, buf),
            Shell::Fish => render(ClapShell::Fish, buf),
            Shell::PowerShell => render(ClapShell::PowerShell, buf),
            Shell::Zsh => render(ClapShell::Zsh, buf),
            Shell::Nushell => render(clap_complete_nushell::Nushell, buf),
        }
    }
}

fn render(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    generate(generator, &mut cmd, APP_NAME, buf);
}
