// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Normalizer options.

use serde::{Deserialize, Serialize};

/// Knobs for [`crate::normalize_graph_data_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Treat text naming an existing non-empty file as a path to JSON.
    /// When false, text is only ever parsed as JSON.
    pub resolve_file_paths: bool,
    /// Reject named files larger than this many bytes.
    pub max_file_bytes: Option<u64>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            resolve_file_paths: true,
            max_file_bytes: None,
        }
    }
}
