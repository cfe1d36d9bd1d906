// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph normalization into gJGF.
//!
//! Data flows one way:
//!
//! ```text
//! normalize_graph_data / multiple_to_gjgf
//!     -> detect (SourceKind, one recognizer per kind)
//!     -> adapters (GraphSource per family)
//!     -> gjgf_model::GjgfBuilder
//! ```
//!
//! Nothing here mutates a native graph or keeps state between calls.

mod convert;
mod error;
mod input;
mod normalize;
mod options;
mod source;

pub mod adapters;
pub mod detect;

pub use adapters::{
    attribute_graph_to_gjgf, dict_graph_to_gjgf, edge_key, property_graph_to_gjgf,
    pyntacle_to_gjgf, snap_to_gjgf, traversal_to_gjgf, SideChannel,
};
pub use convert::{any_to_gjgf, convert_recognized, multiple_to_gjgf};
pub use detect::{detect_source, SourceKind};
pub use error::{ConvertError, ErrorKind};
pub use input::GraphInput;
pub use normalize::{normalize_graph_data, normalize_graph_data_with};
pub use options::NormalizeOptions;
pub use source::{extract, GraphSource};
