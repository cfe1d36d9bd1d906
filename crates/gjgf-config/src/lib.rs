// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configuration services for gJGF tools.
//! The service is storage-agnostic; stores are thin adapters.

pub mod config;
pub mod fs;
pub mod memory;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use fs::FsConfigStore;
pub use memory::MemoryConfigStore;
pub use prefs::{ConvertPrefs, CONVERT_PREFS_KEY};
