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

//! Listener error types

use thiserror::Error;

/// Result type for listener operations
pub type Result<T> = std::result::Result<T, ListenerError>;

/// Errors raised at the conversion and configuration edges of the crate.
///
/// Registration, removal and invocation never fail; these variants only come
/// from parsing raw codes, names and config documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("Invalid plugin result code: {0}")]
    InvalidPluginResult(i32),

    #[error("Unknown plugin result: {0}")]
    UnknownPluginResult(String),

    #[error("Invalid hook mode code: {0}")]
    InvalidHookMode(i32),

    #[error("Unknown hook mode: {0}")]
    UnknownHookMode(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
