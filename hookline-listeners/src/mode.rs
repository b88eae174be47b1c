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

//! Hook modes selecting the invocation phase of a listener.

use crate::error::ListenerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase a listener runs in. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum HookMode {
    /// Runs before the event; may short-circuit with a [`crate::PluginResult`].
    Pre = 0,
    /// Runs after the event for side effects only.
    Post = 1,
}

impl HookMode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HookMode::Pre => "pre",
            HookMode::Post => "post",
        }
    }
}

impl TryFrom<i32> for HookMode {
    type Error = ListenerError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HookMode::Pre),
            1 => Ok(HookMode::Post),
            other => Err(ListenerError::InvalidHookMode(other)),
        }
    }
}

impl From<HookMode> for i32 {
    fn from(mode: HookMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for HookMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookMode {
    type Err = ListenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" => Ok(HookMode::Pre),
            "post" => Ok(HookMode::Post),
            _ => Err(ListenerError::UnknownHookMode(s.to_string())),
        }
    }
}
