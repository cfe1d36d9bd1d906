// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Native-binding graphs.
//!
//! Directedness is encoded in the concrete subtype. Attribute enumeration
//! exists only on the attributed subtype; every other subtype yields empty
//! node and edge metadata. Graph-level metadata is never available.

use gjgf_model::{Attributes, Gjgf, NodeId};
use gjgf_native::binding::{SnapAttributes, SnapEdge, SnapNode};
use gjgf_native::SnapGraph;
use serde_json::Value;

use crate::source::{extract, GraphSource};
use crate::SourceKind;

const DIRECTED_TYPES: [&str; 3] = ["snap.PNGraph", "snap.PDirNet", "snap.PNEANet"];

/// [`GraphSource`] over a [`SnapGraph`].
#[derive(Debug, Clone, Copy)]
pub struct SnapSource<'a>(pub &'a SnapGraph);

// Later kinds overwrite earlier ones on a name clash: int, then float, then string.
fn collect_typed(
    ints: impl IntoIterator<Item = (String, i64)>,
    floats: impl IntoIterator<Item = (String, f64)>,
    strings: impl IntoIterator<Item = (String, String)>,
) -> Attributes {
    let mut attrs = Attributes::new();
    attrs.extend(ints.into_iter().map(|(k, v)| (k, Value::from(v))));
    attrs.extend(floats.into_iter().map(|(k, v)| (k, Value::from(v))));
    attrs.extend(strings.into_iter().map(|(k, v)| (k, Value::from(v))));
    attrs
}

fn node_attributes(attrs: SnapAttributes<'_>, node: i64) -> Attributes {
    collect_typed(
        attrs.int_attr_names_n(node).into_iter().filter_map(|name| {
            attrs
                .get_int_attr_dat_n(node, name)
                .map(|v| (name.to_owned(), v))
        }),
        attrs.flt_attr_names_n(node).into_iter().filter_map(|name| {
            attrs
                .get_flt_attr_dat_n(node, name)
                .map(|v| (name.to_owned(), v))
        }),
        attrs.str_attr_names_n(node).into_iter().filter_map(|name| {
            attrs
                .get_str_attr_dat_n(node, name)
                .map(|v| (name.to_owned(), v))
        }),
    )
}

fn edge_attributes(attrs: SnapAttributes<'_>, edge: i64) -> Attributes {
    collect_typed(
        attrs.int_attr_names_e(edge).into_iter().filter_map(|name| {
            attrs
                .get_int_attr_dat_e(edge, name)
                .map(|v| (name.to_owned(), v))
        }),
        attrs.flt_attr_names_e(edge).into_iter().filter_map(|name| {
            attrs
                .get_flt_attr_dat_e(edge, name)
                .map(|v| (name.to_owned(), v))
        }),
        attrs.str_attr_names_e(edge).into_iter().filter_map(|name| {
            attrs
                .get_str_attr_dat_e(edge, name)
                .map(|v| (name.to_owned(), v))
        }),
    )
}

impl GraphSource for SnapSource<'_> {
    type Node = SnapNode;
    type Edge = SnapEdge;

    fn kind(&self) -> SourceKind {
        SourceKind::NativeBinding
    }

    fn is_directed(&self) -> bool {
        let type_path = self.0.type_path();
        DIRECTED_TYPES.iter().any(|name| type_path.contains(name))
    }

    fn graph_metadata(&self) -> Attributes {
        Attributes::new()
    }

    fn nodes(&self) -> Vec<SnapNode> {
        self.0.nodes().collect()
    }

    fn edges(&self) -> Vec<SnapEdge> {
        self.0.edges().collect()
    }

    fn node_id(&self, node: &SnapNode) -> NodeId {
        node.get_id().to_string()
    }

    fn edge_endpoints(&self, edge: &SnapEdge) -> (NodeId, NodeId) {
        (
            edge.get_src_nid().to_string(),
            edge.get_dst_nid().to_string(),
        )
    }

    fn node_metadata(&self, node: &SnapNode) -> Attributes {
        self.0
            .attributes()
            .map(|attrs| node_attributes(attrs, node.get_id()))
            .unwrap_or_default()
    }

    fn edge_metadata(&self, edge: &SnapEdge) -> Attributes {
        self.0
            .attributes()
            .map(|attrs| edge_attributes(attrs, edge.get_id()))
            .unwrap_or_default()
    }
}

/// Convert a native-binding graph.
pub fn snap_to_gjgf(graph: &SnapGraph) -> Gjgf {
    extract(&SnapSource(graph)).into_gjgf()
}
