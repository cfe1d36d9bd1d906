// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-process `ConfigStore`.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::config::{ConfigError, ConfigStore};

/// Keeps blobs in a map; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::ConfigService;

    #[test]
    fn missing_and_empty_blobs_load_as_none() {
        let store = MemoryConfigStore::new();
        store.save_raw("blank", b"").unwrap();
        let service = ConfigService::new(store);
        assert_eq!(service.load::<u32>("absent").unwrap(), None);
        assert_eq!(service.load::<u32>("blank").unwrap(), None);
    }

    #[test]
    fn save_then_load() {
        let service = ConfigService::new(MemoryConfigStore::new());
        service.save("n", &7_u32).unwrap();
        assert_eq!(service.load::<u32>("n").unwrap(), Some(7));
        assert_eq!(service.store().len(), 1);
    }
}
