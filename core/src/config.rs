// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{self, Date};

/// The name of the evcal application.
pub const APP_NAME: &str = "evcal";

/// The last date an endless repeat rule may produce when no horizon is configured.
pub const DEFAULT_HORIZON: Date = civil::date(2025, 6, 30);

/// Configuration for the scheduling core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Upper bound, inclusive, for occurrences of endless repeat rules.
    #[serde(default = "default_horizon")]
    pub horizon: Date,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }
}

const fn default_horizon() -> Date {
    DEFAULT_HORIZON
}
