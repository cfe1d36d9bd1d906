// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Native graph object models read by the gJGF converters.
//!
//! Five structurally unrelated families, each reproducing the access model of
//! the library it stands in for:
//!
//! - [`PropertyGraph`]: dense indices and typed property maps (unset = zero).
//! - [`AttributeGraph`]: vertex/edge sequences with graph-wide attribute names.
//! - [`TraversalGraph`]: callback visitors only, no attributes.
//! - [`DictGraph`]: arbitrary node keys with attribute dicts.
//! - [`SnapGraph`]: subtype-encoded directedness, capability-gated attributes.
//!
//! Models are plain owned data. Converters only read them.

mod error;

pub mod attribute_dict;
pub mod attribute_store;
pub mod binding;
pub mod property_map;
pub mod traversal;

pub use attribute_dict::{AttrDict, DictGraph};
pub use attribute_store::AttributeGraph;
pub use binding::{SnapGraph, SnapType};
pub use error::NativeError;
pub use property_map::{PropertyGraph, ValueType, Vertex};
pub use traversal::TraversalGraph;

/// A native graph object of one of the supported families.
#[derive(Debug, Clone)]
pub enum NativeGraph {
    /// Property-map graph.
    PropertyMap(PropertyGraph),
    /// Attribute-store graph.
    AttributeStore(AttributeGraph),
    /// Callback-traversal graph.
    Traversal(TraversalGraph),
    /// Attribute-dict graph.
    AttributeDict(DictGraph),
    /// Native-binding graph.
    Binding(SnapGraph),
}

impl NativeGraph {
    /// Fully-qualified runtime type path of the wrapped object.
    pub fn type_path(&self) -> &'static str {
        match self {
            Self::PropertyMap(_) => property_map::TYPE_PATH,
            Self::AttributeStore(_) => attribute_store::TYPE_PATH,
            Self::Traversal(_) => traversal::TYPE_PATH,
            Self::AttributeDict(g) => g.type_path(),
            Self::Binding(g) => g.type_path(),
        }
    }
}

impl From<PropertyGraph> for NativeGraph {
    fn from(graph: PropertyGraph) -> Self {
        Self::PropertyMap(graph)
    }
}

impl From<AttributeGraph> for NativeGraph {
    fn from(graph: AttributeGraph) -> Self {
        Self::AttributeStore(graph)
    }
}

impl From<TraversalGraph> for NativeGraph {
    fn from(graph: TraversalGraph) -> Self {
        Self::Traversal(graph)
    }
}

impl From<DictGraph> for NativeGraph {
    fn from(graph: DictGraph) -> Self {
        Self::AttributeDict(graph)
    }
}

impl From<SnapGraph> for NativeGraph {
    fn from(graph: SnapGraph) -> Self {
        Self::Binding(graph)
    }
}
