// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The one read-only surface every adapter implements.
//!
//! A [`GraphSource`] exposes directedness, graph metadata, and materialized
//! node/edge handles with their ids and flat attribute maps. [`extract`]
//! turns any source into a [`GraphRecord`] through [`GjgfBuilder`], so the
//! reserved-key policy lives in exactly one place.

use gjgf_model::{Attributes, GjgfBuilder, GraphRecord, NodeId};
use tracing::trace;

use crate::SourceKind;

/// Read-only view over one native graph.
pub trait GraphSource {
    /// Node handle yielded by [`GraphSource::nodes`].
    type Node;
    /// Edge handle yielded by [`GraphSource::edges`].
    type Edge;

    /// Family of the underlying object.
    fn kind(&self) -> SourceKind;

    /// Whether the graph is directed.
    fn is_directed(&self) -> bool;

    /// Flat graph-level attributes, reserved keys included.
    fn graph_metadata(&self) -> Attributes;

    /// Every node, in encounter order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Every edge, in encounter order.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Stringified native identifier of `node`.
    fn node_id(&self, node: &Self::Node) -> NodeId;

    /// Stringified native endpoint identifiers of `edge`.
    fn edge_endpoints(&self, edge: &Self::Edge) -> (NodeId, NodeId);

    /// Flat attributes of `node` after the adapter's own filtering.
    fn node_metadata(&self, node: &Self::Node) -> Attributes;

    /// Flat attributes of `edge` after the adapter's own filtering.
    fn edge_metadata(&self, edge: &Self::Edge) -> Attributes;
}

/// Build the canonical record of `source`.
pub fn extract<S: GraphSource + ?Sized>(source: &S) -> GraphRecord {
    let mut builder = GjgfBuilder::new(source.is_directed());
    builder.graph_attributes(&source.graph_metadata());
    for node in source.nodes() {
        builder.node(source.node_id(&node), &source.node_metadata(&node));
    }
    for edge in source.edges() {
        let (from, to) = source.edge_endpoints(&edge);
        builder.edge(from, to, &source.edge_metadata(&edge));
    }
    let record = builder.build();
    trace!(
        kind = %source.kind(),
        nodes = record.node_count(),
        edges = record.edge_count(),
        "extracted graph"
    );
    record
}
