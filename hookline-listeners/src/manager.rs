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

//! Ordered listener manager with pre and post invocation phases.

use crate::config::ListenerConfig;
use crate::mode::HookMode;
use crate::result::PluginResult;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Unique identifier of a registered listener.
///
/// Identifiers start at 0, increase by one per registration and are never
/// handed out twice by the same manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ListenerId(i64);

impl ListenerId {
    /// Wrap a raw identifier, e.g. one previously returned by [`ListenerId::get`].
    pub const fn new(raw: i64) -> Self {
        ListenerId(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manager shared between threads.
pub type SharedListenerManager<T> = Arc<ListenerManager<T>>;

struct ListenerEntry<T> {
    callback: T,
    mode: HookMode,
}

struct Listeners<T> {
    entries: HashMap<ListenerId, ListenerEntry<T>>,
    /// Registration order; holds exactly the keys of `entries`.
    order: Vec<ListenerId>,
    next_id: i64,
}

impl<T> Listeners<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Entries in registration order.
    fn iter(&self) -> impl Iterator<Item = (ListenerId, &ListenerEntry<T>)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.entries.get(id).map(|entry| (*id, entry)))
    }
}

/// Thread-safe registry of listeners run in registration order.
///
/// Each listener is an opaque callback of type `T` tagged with a
/// [`HookMode`]. [`invoke_pre`](Self::invoke_pre) runs the `Pre` listeners and
/// aggregates their [`PluginResult`]s, stopping once the aggregate reaches
/// [`PluginResult::Handled`]. [`invoke_post`](Self::invoke_post) runs every
/// `Post` listener and ignores outcomes.
///
/// # Concurrency Model
///
/// All state sits behind one reader/writer lock. Registration, removal and
/// [`clear`](Self::clear) take the write lock. Invocation passes and the read
/// accessors take the read lock for their whole duration, so passes run
/// concurrently with each other and block writers until they finish.
///
/// # Re-entrancy
///
/// A callback must not call [`add`](Self::add), [`remove`](Self::remove) or
/// [`clear`](Self::clear) on the manager that is invoking it: the outer pass
/// still holds the read lock and the call deadlocks. Nested passes from a
/// callback can also deadlock once a writer is queued. Neither case is
/// detected at runtime.
///
/// # Example
///
/// ```rust
/// use hookline_listeners::{HookMode, ListenerManager, PluginResult};
///
/// let manager: ListenerManager<fn(&str) -> PluginResult> = ListenerManager::new();
/// manager.add(|_| PluginResult::Changed, HookMode::Pre);
/// let id = manager.add(|_| PluginResult::Continue, HookMode::Post);
///
/// let result = manager.invoke_pre(|callback| callback("submit_sm"));
/// assert_eq!(result, PluginResult::Changed);
///
/// manager.invoke_post(|callback| {
///     callback("submit_sm");
/// });
/// manager.remove(id);
/// assert_eq!(manager.len(), 1);
/// ```
pub struct ListenerManager<T> {
    config: ListenerConfig,
    inner: RwLock<Listeners<T>>,
}

impl<T> Default for ListenerManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListenerManager<T> {
    /// Create an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ListenerConfig::default())
    }

    /// Create an empty manager with the given configuration.
    pub fn with_config(config: ListenerConfig) -> Self {
        let inner = Listeners::with_capacity(config.initial_capacity);
        Self {
            config,
            inner: RwLock::new(inner),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    /// Register a listener and return its identifier.
    pub fn add(&self, callback: T, mode: HookMode) -> ListenerId {
        let mut inner = self.inner.write();

        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.entries.insert(id, ListenerEntry { callback, mode });
        inner.order.push(id);

        tracing::debug!(
            manager = %self.config.name,
            id = %id,
            mode = %mode,
            listeners = inner.order.len(),
            "registered listener"
        );

        id
    }

    /// Unregister a listener.
    ///
    /// Returns the removed callback, or `None` when `id` is not registered;
    /// an unknown id leaves the manager untouched.
    pub fn remove(&self, id: ListenerId) -> Option<T> {
        let mut inner = self.inner.write();

        let Some(entry) = inner.entries.remove(&id) else {
            tracing::debug!(manager = %self.config.name, id = %id, "listener not registered");
            return None;
        };
        let position = inner.order.iter().position(|existing| *existing == id);
        if let Some(pos) = position {
            inner.order.remove(pos);
        }

        tracing::debug!(
            manager = %self.config.name,
            id = %id,
            mode = %entry.mode,
            listeners = inner.order.len(),
            "removed listener"
        );

        Some(entry.callback)
    }

    /// Remove every listener and return how many were removed.
    ///
    /// The id counter keeps running, so earlier ids stay retired.
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.write();
        let removed = inner.order.len();
        inner.entries.clear();
        inner.order.clear();

        tracing::debug!(manager = %self.config.name, removed, "cleared listeners");
        removed
    }

    /// Run the `Pre` listeners in registration order.
    ///
    /// `invoke` adapts a callback to a [`PluginResult`]. The returned value is
    /// the highest result seen, starting from [`PluginResult::Continue`]. Once
    /// it reaches [`PluginResult::Handled`] or [`PluginResult::Stop`] the
    /// remaining listeners are skipped.
    ///
    /// Holds the read lock for the whole pass; see the type-level notes on
    /// re-entrancy.
    pub fn invoke_pre<F>(&self, mut invoke: F) -> PluginResult
    where
        F: FnMut(&T) -> PluginResult,
    {
        let inner = self.inner.read();

        let mut final_result = PluginResult::Continue;
        let mut visited = 0usize;
        for (id, entry) in inner.iter() {
            if entry.mode != HookMode::Pre {
                continue;
            }

            let result = invoke(&entry.callback);
            visited += 1;
            if self.config.trace_invocations {
                tracing::trace!(
                    manager = %self.config.name,
                    id = %id,
                    result = %result,
                    "pre listener invoked"
                );
            }

            final_result = final_result.merge(result);
            if final_result.is_terminal() {
                tracing::trace!(
                    manager = %self.config.name,
                    id = %id,
                    result = %final_result,
                    visited,
                    "pre pass short-circuited"
                );
                break;
            }
        }

        final_result
    }

    /// Run every `Post` listener in registration order.
    ///
    /// Outcomes are not collected and there is no early exit. Holds the read
    /// lock for the whole pass; see the type-level notes on re-entrancy.
    pub fn invoke_post<F>(&self, mut invoke: F)
    where
        F: FnMut(&T),
    {
        let inner = self.inner.read();

        for (id, entry) in inner.iter() {
            if entry.mode != HookMode::Post {
                continue;
            }

            invoke(&entry.callback);
            if self.config.trace_invocations {
                tracing::trace!(manager = %self.config.name, id = %id, "post listener invoked");
            }
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of listeners registered with `mode`.
    pub fn count(&self, mode: HookMode) -> usize {
        self.inner
            .read()
            .entries
            .values()
            .filter(|entry| entry.mode == mode)
            .count()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.inner.read().entries.contains_key(&id)
    }

    /// Hook mode of a registered listener.
    pub fn mode_of(&self, id: ListenerId) -> Option<HookMode> {
        self.inner.read().entries.get(&id).map(|entry| entry.mode)
    }

    /// Snapshot of the registered ids in registration order.
    pub fn ids(&self) -> Vec<ListenerId> {
        self.inner.read().order.clone()
    }
}

impl<T> fmt::Debug for ListenerManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ListenerManager")
            .field("name", &self.config.name)
            .field("listeners", &inner.order.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}
