//! Mutable per-site interaction flags.
//!
//! Entries are created lazily on the first toggle for a key and live for the
//! lifetime of the store. Each toggle is a read-modify-write under one lock,
//! so concurrent toggles on the same key never interleave.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use heritage_core::{InteractionState, SiteKey};
use tokio::sync::broadcast;

/// Buffered attention events per subscriber before the oldest are dropped.
const ATTENTION_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Favorite,
    Dislike,
    Expand,
}

/// Transient "something changed here" signal used to drive a visual pulse.
///
/// Published after every toggle. It names the key and the flag touched but
/// carries no state; read the store for current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attention {
    pub key: SiteKey,
    pub toggle: Toggle,
}

pub struct InteractionStore {
    states: Mutex<HashMap<SiteKey, InteractionState>>,
    attention: broadcast::Sender<Attention>,
}

impl Default for InteractionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionStore {
    #[must_use]
    pub fn new() -> Self {
        let (attention, _) = broadcast::channel(ATTENTION_CAPACITY);
        Self {
            states: Mutex::new(HashMap::new()),
            attention,
        }
    }

    /// Current flags for `key`; all `false` for a key never toggled.
    ///
    /// Does not create an entry.
    #[must_use]
    pub fn get(&self, key: &SiteKey) -> InteractionState {
        self.lock().get(key).copied().unwrap_or_default()
    }

    /// Flips `favorite` for `key` and returns the new value.
    pub fn toggle_favorite(&self, key: &SiteKey) -> bool {
        self.toggle(key, Toggle::Favorite)
    }

    /// Flips `disliked` for `key` and returns the new value.
    ///
    /// Independent of `favorite`; both may be set at once.
    pub fn toggle_dislike(&self, key: &SiteKey) -> bool {
        self.toggle(key, Toggle::Dislike)
    }

    /// Flips `expanded` for `key` and returns the new value.
    pub fn toggle_expanded(&self, key: &SiteKey) -> bool {
        self.toggle(key, Toggle::Expand)
    }

    /// Subscribes to attention events published after each toggle.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Attention> {
        self.attention.subscribe()
    }

    /// Number of keys that have been toggled at least once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn toggle(&self, key: &SiteKey, toggle: Toggle) -> bool {
        let value = {
            let mut states = self.lock();
            let state = states.entry(key.clone()).or_default();
            let flag = match toggle {
                Toggle::Favorite => &mut state.favorite,
                Toggle::Dislike => &mut state.disliked,
                Toggle::Expand => &mut state.expanded,
            };
            *flag = !*flag;
            *flag
        };

        tracing::debug!(%key, ?toggle, value, "toggled interaction flag");

        // Err only means nobody is subscribed.
        let _ = self.attention.send(Attention {
            key: key.clone(),
            toggle,
        });

        value
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SiteKey, InteractionState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
