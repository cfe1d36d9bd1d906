// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical graph representation (gJGF) shared by converters and renderers.
//!
//! Pure data: a directed flag, optional label/type/metadata, a node map and an
//! ordered edge list. Records are built fresh per conversion and never shared.
//!
//! # Reserved keys
//!
//! A flat attribute map coming from a native graph is split by
//! [`partition`] into promoted top-level fields and the remaining
//! `metadata`. The reserved keys per level are [`GRAPH_RESERVED`],
//! [`NODE_RESERVED`] and [`EDGE_RESERVED`]. Every converter goes through
//! [`GjgfBuilder`], which is the only caller of that rule.

mod builder;
mod partition;
mod record;
mod value;

pub use builder::{edge_record, node_record, GjgfBuilder};
pub use partition::{partition, Partitioned, EDGE_RESERVED, GRAPH_RESERVED, NODE_RESERVED};
pub use record::{
    Attributes, EdgeRecord, Gjgf, GjgfCollection, GraphBody, GraphRecord, Metadata, NodeId,
    NodeRecord,
};
pub use value::{is_scalar, is_unset_sentinel, promote_string, stringify_id, truthy};
