// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Values of unknown shape handed to the classifier.

use std::fmt;

use gjgf_native::{AttributeGraph, DictGraph, NativeGraph, PropertyGraph, SnapGraph, TraversalGraph};
use serde_json::Value;

/// A graph in one of the accepted representations.
pub enum GraphInput {
    /// JSON text or a path to a JSON file.
    Text(String),
    /// Already-parsed JSON (a JSON string behaves like [`GraphInput::Text`],
    /// a JSON array like [`GraphInput::Sequence`]).
    Json(Value),
    /// A native graph object.
    Native(NativeGraph),
    /// An ordered sequence of inputs.
    Sequence(Vec<GraphInput>),
    /// A lazy stream whose length cannot be determined up front.
    Unsized(Box<dyn Iterator<Item = GraphInput> + Send>),
}

impl GraphInput {
    /// Wrap a lazy stream.
    pub fn unsized_stream<I>(iter: I) -> Self
    where
        I: Iterator<Item = GraphInput> + Send + 'static,
    {
        Self::Unsized(Box::new(iter))
    }

    /// Traversal graph bundled with its side-channel metadata:
    /// `[graph, graph_metadata?, node_metadata?, edge_metadata?]`.
    pub fn traversal_bundle<M>(graph: TraversalGraph, metadata: M) -> Self
    where
        M: IntoIterator<Item = Value>,
    {
        let mut items = vec![Self::Native(graph.into())];
        items.extend(metadata.into_iter().map(Self::Json));
        Self::Sequence(items)
    }

    /// The text, if this input is text (or a JSON string).
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Json(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Debug for GraphInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Native(graph) => f.debug_tuple("Native").field(&graph.type_path()).finish(),
            Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Self::Unsized(_) => f.write_str("Unsized(..)"),
        }
    }
}

impl From<&str> for GraphInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for GraphInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for GraphInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<NativeGraph> for GraphInput {
    fn from(graph: NativeGraph) -> Self {
        Self::Native(graph)
    }
}

impl From<Vec<GraphInput>> for GraphInput {
    fn from(items: Vec<GraphInput>) -> Self {
        Self::Sequence(items)
    }
}

impl FromIterator<GraphInput> for GraphInput {
    fn from_iter<T: IntoIterator<Item = GraphInput>>(iter: T) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

macro_rules! native_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for GraphInput {
                fn from(graph: $ty) -> Self {
                    Self::Native(graph.into())
                }
            }
        )*
    };
}

native_input!(PropertyGraph, AttributeGraph, TraversalGraph, DictGraph, SnapGraph);
