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

//! Listener manager configuration.

use crate::error::{ListenerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::ListenerManager`].
///
/// # Example TOML Configuration
///
/// ```toml
/// name = "message_hooks"
/// initial_capacity = 16
/// trace_invocations = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
    /// Label attached to every log event of the manager.
    #[serde(default = "default_name")]
    pub name: String,

    /// Number of listeners to pre-allocate room for.
    #[serde(default)]
    pub initial_capacity: usize,

    /// Emit a `trace` event for every listener invocation.
    #[serde(default)]
    pub trace_invocations: bool,
}

fn default_name() -> String {
    "listeners".to_string()
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            initial_capacity: 0,
            trace_invocations: false,
        }
    }
}

impl ListenerConfig {
    /// Create a default configuration with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_trace_invocations(mut self, enabled: bool) -> Self {
        self.trace_invocations = enabled;
        self
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ListenerError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ListenerError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ListenerError::InvalidConfig(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
