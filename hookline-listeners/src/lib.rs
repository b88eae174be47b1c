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

//! Hookline Listeners
//!
//! A generic, thread-safe registry of ordered callback listeners for plugin
//! and hook systems. Hosts register opaque callbacks tagged with a
//! [`HookMode`] and later run them in two passes around an event:
//!
//! - **Pre**: listeners return a [`PluginResult`]. The highest result wins and
//!   the pass stops as soon as it reaches `Handled` or `Stop`.
//! - **Post**: listeners run for side effects only, every one of them, in
//!   registration order.
//!
//! # Architecture
//!
//! ```text
//! ListenerManager<T>
//! └── RwLock
//!     ├── entries: ListenerId -> (T, HookMode)
//!     ├── order:   [ListenerId]   (registration order)
//!     └── next_id: monotonically increasing, never reused
//! ```
//!
//! The manager never spawns work and never calls a listener on its own; the
//! caller passes an adapter closure to [`ListenerManager::invoke_pre`] or
//! [`ListenerManager::invoke_post`] that knows how to run `T`.
//!
//! # Example
//!
//! ```rust
//! use hookline_listeners::{HookMode, ListenerConfig, ListenerManager, PluginResult};
//! use std::sync::Arc;
//!
//! type Listener = Arc<dyn Fn(&mut String) -> PluginResult + Send + Sync>;
//!
//! let manager: ListenerManager<Listener> =
//!     ListenerManager::with_config(ListenerConfig::named("message_hooks"));
//!
//! manager.add(
//!     Arc::new(|body: &mut String| {
//!         body.make_ascii_uppercase();
//!         PluginResult::Changed
//!     }),
//!     HookMode::Pre,
//! );
//!
//! let mut body = String::from("hello");
//! let result = manager.invoke_pre(|listener| listener(&mut body));
//! assert_eq!(result, PluginResult::Changed);
//! assert_eq!(body, "HELLO");
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod mode;
pub mod result;

// Re-exports
pub use config::ListenerConfig;
pub use error::{ListenerError, Result};
pub use manager::{ListenerId, ListenerManager, SharedListenerManager};
pub use mode::HookMode;
pub use result::PluginResult;
