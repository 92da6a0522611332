//! Where the active level is published for subsystems that configure themselves later.
//!
//! The controller writes through [EnvStore] so the process environment can be
//! swapped for an in-memory map in tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::level::InternalLevel;

/// Variable holding the last configured internal level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Host-runtime flag that silences runtime diagnostic warnings.
pub const NO_WARNINGS_VAR: &str = "NODE_NO_WARNINGS";

/// Key/value store the controller publishes into.
pub trait EnvStore: Send + Sync {
    fn set(&self, key: &str, value: &str);
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory store; nothing leaks into the process environment.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvStore for MemoryEnv {
    fn set(&self, key: &str, value: &str) {
        self.vars.lock().insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.lock().get(key).cloned()
    }
}

/// Read the published level from `store`, if any.
pub fn published_level_in(store: &dyn EnvStore) -> Option<InternalLevel> {
    store.get(LOG_LEVEL_VAR).map(InternalLevel::from)
}

/// Read `LOG_LEVEL` from the process environment. For components initialized
/// independently of the controller.
pub fn level_from_env() -> Option<InternalLevel> {
    published_level_in(&ProcessEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_env_round_trips() {
        let env = MemoryEnv::new();
        assert!(env.get(LOG_LEVEL_VAR).is_none());
        env.set(LOG_LEVEL_VAR, "debug");
        assert_eq!(published_level_in(&env), Some(InternalLevel::Debug));
    }

    #[test]
    fn unknown_published_label_is_kept() {
        let env = MemoryEnv::new();
        env.set(LOG_LEVEL_VAR, "chatty");
        assert_eq!(
            published_level_in(&env),
            Some(InternalLevel::Other("chatty".into()))
        );
    }
}
