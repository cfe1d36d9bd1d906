// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port for saved settings and the JSON service on top of it.
//!
//! Stores move opaque blobs; only [`ConfigService`] knows they are JSON.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Blob storage keyed by a logical name such as `convert`.
pub trait ConfigStore {
    /// Bytes saved under `key`; [`ConfigError::NotFound`] if nothing was.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replace whatever is saved under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing saved under the key.
    #[error("no saved value")]
    NotFound,
    /// Reading or writing the backing medium failed.
    #[error("config i/o: {0}")]
    Io(#[from] std::io::Error),
    /// Saved bytes are not valid JSON for the requested type.
    #[error("config json: {0}")]
    Serde(#[from] serde_json::Error),
    /// No usable config directory on this platform.
    #[error("could not resolve config dir")]
    NoConfigDir,
}

/// Serializes config values as JSON and delegates storage to a `ConfigStore`.
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Load and deserialize the value for `key`. Missing or empty ⇒ `Ok(None)`.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load `key`, falling back to `T::default()` when missing.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Save `value` under `key` as pretty JSON.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}
