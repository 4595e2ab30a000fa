// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_calendar;
mod cmd_due;
mod cmd_expand;
mod cmd_generate_completion;
mod cmd_humanize;
mod cmd_overlap;
mod cmd_search;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
