// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Source detection: which adapter (if any) applies to a value.
//!
//! One recognizer per [`SourceKind`], walked in [`SourceKind::PRIORITY`]
//! order; the first hit wins. The order is part of the contract because the
//! legacy type-name signatures can overlap.

use std::fmt;

use gjgf_native::{AttributeGraph, DictGraph, NativeGraph, PropertyGraph, SnapGraph, TraversalGraph};

use crate::GraphInput;

/// Supported native graph families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Property-map graphs (typed property maps, unset reads as zero).
    PropertyMap,
    /// Attribute-store graphs (vertex/edge sequences).
    AttributeStore,
    /// Callback-traversal graphs with side-channel metadata.
    CallbackTraversal,
    /// Attribute-dict graphs.
    AttributeDict,
    /// Subtype-encoded native-binding graphs.
    NativeBinding,
}

type Recognizer = for<'a> fn(&'a GraphInput) -> Option<Recognized<'a>>;

impl SourceKind {
    /// Detection order.
    pub const PRIORITY: [Self; 5] = [
        Self::PropertyMap,
        Self::AttributeStore,
        Self::CallbackTraversal,
        Self::AttributeDict,
        Self::NativeBinding,
    ];

    /// Lower-case type-name signature of the family.
    pub fn signature(self) -> &'static str {
        match self {
            Self::PropertyMap => "graph_tool.graph",
            Self::AttributeStore => "igraph.graph",
            Self::CallbackTraversal => "networkit",
            Self::AttributeDict => "networkx.classes",
            Self::NativeBinding => "snap",
        }
    }

    /// Match a foreign runtime type name (case-insensitive substring) against
    /// the signatures in priority order.
    ///
    /// Detection inside this crate matches on [`GraphInput`] variants and
    /// never calls this. It exists for external bindings that only see a
    /// foreign object's type name and need to pick an adapter for it.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        let lowered = type_name.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|kind| lowered.contains(kind.signature()))
    }

    fn recognizer(self) -> Recognizer {
        match self {
            Self::PropertyMap => recognize_property_map,
            Self::AttributeStore => recognize_attribute_store,
            Self::CallbackTraversal => recognize_callback_traversal,
            Self::AttributeDict => recognize_attribute_dict,
            Self::NativeBinding => recognize_native_binding,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PropertyMap => "property-map",
            Self::AttributeStore => "attribute-store",
            Self::CallbackTraversal => "callback-traversal",
            Self::AttributeDict => "attribute-dict",
            Self::NativeBinding => "native-binding",
        };
        f.write_str(name)
    }
}

/// A value matched to its family, borrowing the native object.
#[derive(Debug, Clone, Copy)]
pub enum Recognized<'a> {
    /// Property-map graph.
    PropertyMap(&'a PropertyGraph),
    /// Attribute-store graph.
    AttributeStore(&'a AttributeGraph),
    /// Traversal graph plus the side-channel items that followed it.
    CallbackTraversal {
        /// The graph.
        graph: &'a TraversalGraph,
        /// `[graph_metadata?, node_metadata?, edge_metadata?]`.
        side_channel: &'a [GraphInput],
    },
    /// Attribute-dict graph.
    AttributeDict(&'a DictGraph),
    /// Native-binding graph.
    NativeBinding(&'a SnapGraph),
}

impl Recognized<'_> {
    /// Family of the recognized value.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::PropertyMap(_) => SourceKind::PropertyMap,
            Self::AttributeStore(_) => SourceKind::AttributeStore,
            Self::CallbackTraversal { .. } => SourceKind::CallbackTraversal,
            Self::AttributeDict(_) => SourceKind::AttributeDict,
            Self::NativeBinding(_) => SourceKind::NativeBinding,
        }
    }
}

fn recognize_property_map(input: &GraphInput) -> Option<Recognized<'_>> {
    match input {
        GraphInput::Native(NativeGraph::PropertyMap(graph)) => Some(Recognized::PropertyMap(graph)),
        _ => None,
    }
}

fn recognize_attribute_store(input: &GraphInput) -> Option<Recognized<'_>> {
    match input {
        GraphInput::Native(NativeGraph::AttributeStore(graph)) => {
            Some(Recognized::AttributeStore(graph))
        }
        _ => None,
    }
}

// A sequence counts only when its first item is a traversal graph: that is
// the side-channel bundle convention of this family.
fn recognize_callback_traversal(input: &GraphInput) -> Option<Recognized<'_>> {
    match input {
        GraphInput::Native(NativeGraph::Traversal(graph)) => Some(Recognized::CallbackTraversal {
            graph,
            side_channel: &[],
        }),
        GraphInput::Sequence(items) => match items.split_first() {
            Some((GraphInput::Native(NativeGraph::Traversal(graph)), rest)) => {
                Some(Recognized::CallbackTraversal {
                    graph,
                    side_channel: rest,
                })
            }
            _ => None,
        },
        _ => None,
    }
}

fn recognize_attribute_dict(input: &GraphInput) -> Option<Recognized<'_>> {
    match input {
        GraphInput::Native(NativeGraph::AttributeDict(graph)) => {
            Some(Recognized::AttributeDict(graph))
        }
        _ => None,
    }
}

fn recognize_native_binding(input: &GraphInput) -> Option<Recognized<'_>> {
    match input {
        GraphInput::Native(NativeGraph::Binding(graph)) => Some(Recognized::NativeBinding(graph)),
        _ => None,
    }
}

/// Run the recognizers in priority order.
pub fn recognize(input: &GraphInput) -> Option<Recognized<'_>> {
    SourceKind::PRIORITY
        .into_iter()
        .find_map(|kind| (kind.recognizer())(input))
}

/// Family of `input`, or `None` when no adapter applies.
pub fn detect_source(input: &GraphInput) -> Option<SourceKind> {
    recognize(input).map(|recognized| recognized.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gjgf_native::{SnapType, TraversalGraph};
    use serde_json::json;

    #[test]
    fn type_names_follow_priority_order() {
        assert_eq!(
            SourceKind::from_type_name("<class 'graph_tool.Graph'>"),
            Some(SourceKind::PropertyMap)
        );
        assert_eq!(
            SourceKind::from_type_name("<class 'igraph.Graph'>"),
            Some(SourceKind::AttributeStore)
        );
        assert_eq!(
            SourceKind::from_type_name("networkx.classes.digraph.DiGraph"),
            Some(SourceKind::AttributeDict)
        );
        assert_eq!(
            SourceKind::from_type_name("snap.PNEANet"),
            Some(SourceKind::NativeBinding)
        );
        // Overlapping signatures resolve to the earlier kind.
        assert_eq!(
            SourceKind::from_type_name("networkit.snap.Graph"),
            Some(SourceKind::CallbackTraversal)
        );
        assert_eq!(SourceKind::from_type_name("builtins.dict"), None);
    }

    #[test]
    fn model_type_paths_match_their_own_signature() {
        let natives: Vec<NativeGraph> = vec![
            gjgf_native::PropertyGraph::new(true).into(),
            gjgf_native::AttributeGraph::new(true).into(),
            TraversalGraph::new(0, true).into(),
            gjgf_native::DictGraph::new().into(),
            gjgf_native::DictGraph::new_directed().into(),
            gjgf_native::SnapGraph::new(SnapType::NEANet).into(),
        ];
        for native in natives {
            let by_name = SourceKind::from_type_name(native.type_path());
            let by_value = detect_source(&GraphInput::Native(native));
            assert_eq!(by_name, by_value);
            assert!(by_value.is_some());
        }
    }

    #[test]
    fn bundle_is_recognized_only_with_a_traversal_graph_first() {
        let bundle = GraphInput::traversal_bundle(TraversalGraph::new(1, false), [json!({})]);
        assert_eq!(detect_source(&bundle), Some(SourceKind::CallbackTraversal));

        let other = GraphInput::Sequence(vec![gjgf_native::DictGraph::new().into()]);
        assert_eq!(detect_source(&other), None);
        assert_eq!(detect_source(&GraphInput::Sequence(Vec::new())), None);
    }

    #[test]
    fn text_and_json_are_not_native() {
        assert_eq!(detect_source(&GraphInput::from("snap")), None);
        assert_eq!(detect_source(&GraphInput::from(json!({"graph": {}}))), None);
    }
}
