// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute-store graphs. Only `null` (attribute declared but never set on
//! this vertex/edge) is dropped; zero values are real values here.

use gjgf_model::{Attributes, Gjgf, NodeId};
use gjgf_native::attribute_store::{EdgeView, VertexView};
use gjgf_native::AttributeGraph;

use crate::source::{extract, GraphSource};
use crate::SourceKind;

/// [`GraphSource`] over an [`AttributeGraph`].
#[derive(Debug, Clone, Copy)]
pub struct AttributeStoreSource<'a>(pub &'a AttributeGraph);

fn without_nulls(attrs: Attributes) -> Attributes {
    attrs.into_iter().filter(|(_, value)| !value.is_null()).collect()
}

impl<'a> GraphSource for AttributeStoreSource<'a> {
    type Node = VertexView<'a>;
    type Edge = EdgeView<'a>;

    fn kind(&self) -> SourceKind {
        SourceKind::AttributeStore
    }

    fn is_directed(&self) -> bool {
        self.0.is_directed()
    }

    fn graph_metadata(&self) -> Attributes {
        self.0
            .attributes()
            .filter_map(|name| {
                self.0
                    .graph_attr(name)
                    .map(|value| (name.to_owned(), value.clone()))
            })
            .collect()
    }

    fn nodes(&self) -> Vec<VertexView<'a>> {
        self.0.vs().collect()
    }

    fn edges(&self) -> Vec<EdgeView<'a>> {
        self.0.es().collect()
    }

    fn node_id(&self, node: &VertexView<'a>) -> NodeId {
        node.index().to_string()
    }

    fn edge_endpoints(&self, edge: &EdgeView<'a>) -> (NodeId, NodeId) {
        (edge.source().to_string(), edge.target().to_string())
    }

    fn node_metadata(&self, node: &VertexView<'a>) -> Attributes {
        without_nulls(node.attributes())
    }

    fn edge_metadata(&self, edge: &EdgeView<'a>) -> Attributes {
        without_nulls(edge.attributes())
    }
}

/// Convert an attribute-store graph.
pub fn attribute_graph_to_gjgf(graph: &AttributeGraph) -> Gjgf {
    extract(&AttributeStoreSource(graph)).into_gjgf()
}

/// Convert a Pyntacle graph. Pyntacle graphs are attribute-store graphs, so
/// this is [`attribute_graph_to_gjgf`] under the name callers look for.
pub fn pyntacle_to_gjgf(graph: &AttributeGraph) -> Gjgf {
    attribute_graph_to_gjgf(graph)
}
