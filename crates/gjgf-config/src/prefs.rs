// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted defaults for the `gjgf` CLI.

use gjgf_convert::NormalizeOptions;
use serde::{Deserialize, Serialize};

/// Config key under which [`ConvertPrefs`] is stored.
pub const CONVERT_PREFS_KEY: &str = "convert";

/// Saved conversion preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertPrefs {
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Normalizer options.
    pub normalize: NormalizeOptions,
}
