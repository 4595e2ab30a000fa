// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use evcal_core::{STABLE_FORMAT_TIME, parse_date, parse_time};
use jiff::civil::{Date, DateTime};
use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Path standing for standard input.
pub const STDIN_PATH: &str = "-";

/// Reads a JSON document from a file, or from stdin for `-`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?
    };

    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()).into())
}

/// Parses `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM` as a naive local date-time.
pub fn parse_datetime(dt: &str) -> Result<DateTime, Box<dyn Error>> {
    let (date, time) = dt
        .split_once([' ', 'T'])
        .ok_or("Invalid date-time format. Expected format: YYYY-MM-DD HH:MM")?;
    Ok(parse_date(date)?.to_datetime(parse_time(time)?))
}

/// The current local date-time, truncated to the minute.
pub fn now() -> DateTime {
    let now = jiff::Zoned::now().datetime();
    now.date().at(now.hour(), now.minute(), 0, 0)
}

/// The current local date.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// Formats the time range of a day, e.g. `09:00~10:00`.
pub fn format_time_range(start: &str, end: &str) -> String {
    match (parse_time(start), parse_time(end)) {
        (Ok(start), Ok(end)) => format!(
            "{}~{}",
            start.strftime(STABLE_FORMAT_TIME),
            end.strftime(STABLE_FORMAT_TIME)
        ),
        _ => format!("{start}~{end}"),
    }
}
