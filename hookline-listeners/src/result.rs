// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Outcome codes returned by pre-phase listeners.

use crate::error::ListenerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a single listener callback.
///
/// Variants are totally ordered: `Continue < Changed < Handled < Stop`.
/// A pre pass keeps the highest result seen and stops once it reaches
/// [`PluginResult::Handled`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum PluginResult {
    /// Continue execution without any changes.
    #[default]
    Continue = 0,
    /// State or behavior has been modified.
    Changed = 1,
    /// Event has been handled, no further listeners run.
    Handled = 2,
    /// Stop processing, no further steps are executed.
    Stop = 3,
}

impl PluginResult {
    /// All results in ascending order.
    pub const ALL: [PluginResult; 4] = [
        PluginResult::Continue,
        PluginResult::Changed,
        PluginResult::Handled,
        PluginResult::Stop,
    ];

    /// Raw integer code of this result.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Whether this result ends a pre pass.
    pub fn is_terminal(self) -> bool {
        self >= PluginResult::Handled
    }

    /// Combine two results, keeping the stronger one.
    #[inline]
    pub fn merge(self, other: PluginResult) -> PluginResult {
        self.max(other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PluginResult::Continue => "continue",
            PluginResult::Changed => "changed",
            PluginResult::Handled => "handled",
            PluginResult::Stop => "stop",
        }
    }
}

impl TryFrom<i32> for PluginResult {
    type Error = ListenerError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PluginResult::Continue),
            1 => Ok(PluginResult::Changed),
            2 => Ok(PluginResult::Handled),
            3 => Ok(PluginResult::Stop),
            other => Err(ListenerError::InvalidPluginResult(other)),
        }
    }
}

impl From<PluginResult> for i32 {
    fn from(result: PluginResult) -> Self {
        result.code()
    }
}

impl fmt::Display for PluginResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginResult {
    type Err = ListenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(PluginResult::Continue),
            "changed" => Ok(PluginResult::Changed),
            "handled" => Ok(PluginResult::Handled),
            "stop" => Ok(PluginResult::Stop),
            _ => Err(ListenerError::UnknownPluginResult(s.to_string())),
        }
    }
}
