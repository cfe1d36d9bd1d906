// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute-store graph: vertex/edge sequences with graph-wide attribute names.
//!
//! Declaring an attribute on one vertex declares it for all of them; a vertex
//! that never received a value reports `null` for it.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::NativeError;

/// Runtime type path reported by this model.
pub const TYPE_PATH: &str = "igraph.Graph";

/// Graph whose attributes live in per-name columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeGraph {
    directed: bool,
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    graph_attrs: BTreeMap<String, Value>,
    vertex_attrs: BTreeMap<String, Vec<Value>>,
    edge_attrs: BTreeMap<String, Vec<Value>>,
}

fn write_column(column: &mut Vec<Value>, index: usize, value: Value) {
    if column.len() <= index {
        column.resize(index + 1, Value::Null);
    }
    column[index] = value;
}

fn read_columns(columns: &BTreeMap<String, Vec<Value>>, index: usize) -> BTreeMap<String, Value> {
    columns
        .iter()
        .map(|(name, column)| {
            let value = column.get(index).cloned().unwrap_or(Value::Null);
            (name.clone(), value)
        })
        .collect()
}

impl AttributeGraph {
    /// Empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Directedness flag.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add one vertex, returning its index.
    pub fn add_vertex(&mut self) -> usize {
        self.vertex_count += 1;
        self.vertex_count - 1
    }

    /// Add `n` vertices.
    pub fn add_vertices(&mut self, n: usize) {
        self.vertex_count += n;
    }

    /// Add an edge, returning its index.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize, NativeError> {
        for v in [source, target] {
            if v >= self.vertex_count {
                return Err(NativeError::UnknownNode(v.to_string()));
            }
        }
        self.edges.push((source, target));
        Ok(self.edges.len() - 1)
    }

    /// Number of vertices.
    pub fn vcount(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn ecount(&self) -> usize {
        self.edges.len()
    }

    /// Set a graph attribute.
    pub fn set_graph_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.graph_attrs.insert(name.into(), value.into());
    }

    /// Graph attribute names.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.graph_attrs.keys().map(String::as_str)
    }

    /// One graph attribute.
    pub fn graph_attr(&self, name: &str) -> Option<&Value> {
        self.graph_attrs.get(name)
    }

    /// Set a vertex attribute (declares the name for every vertex).
    pub fn set_vertex_attr(
        &mut self,
        name: impl Into<String>,
        vertex: usize,
        value: impl Into<Value>,
    ) -> Result<(), NativeError> {
        if vertex >= self.vertex_count {
            return Err(NativeError::UnknownNode(vertex.to_string()));
        }
        let column = self.vertex_attrs.entry(name.into()).or_default();
        write_column(column, vertex, value.into());
        Ok(())
    }

    /// Set an edge attribute (declares the name for every edge).
    pub fn set_edge_attr(
        &mut self,
        name: impl Into<String>,
        edge: usize,
        value: impl Into<Value>,
    ) -> Result<(), NativeError> {
        if edge >= self.edges.len() {
            return Err(NativeError::UnknownEdge(edge.to_string()));
        }
        let column = self.edge_attrs.entry(name.into()).or_default();
        write_column(column, edge, value.into());
        Ok(())
    }

    /// Vertex sequence.
    pub fn vs(&self) -> impl Iterator<Item = VertexView<'_>> {
        (0..self.vertex_count).map(move |index| VertexView { graph: self, index })
    }

    /// Edge sequence.
    pub fn es(&self) -> impl Iterator<Item = EdgeView<'_>> {
        (0..self.edges.len()).map(move |index| EdgeView { graph: self, index })
    }
}

/// Borrowed view of one vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    graph: &'a AttributeGraph,
    index: usize,
}

impl VertexView<'_> {
    /// Vertex index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Every declared vertex attribute; `null` where this vertex has no value.
    pub fn attributes(&self) -> BTreeMap<String, Value> {
        read_columns(&self.graph.vertex_attrs, self.index)
    }
}

/// Borrowed view of one edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    graph: &'a AttributeGraph,
    index: usize,
}

impl EdgeView<'_> {
    /// Edge index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source vertex index.
    pub fn source(&self) -> usize {
        self.graph.edges[self.index].0
    }

    /// Target vertex index.
    pub fn target(&self) -> usize {
        self.graph.edges[self.index].1
    }

    /// Every declared edge attribute; `null` where this edge has no value.
    pub fn attributes(&self) -> BTreeMap<String, Value> {
        read_columns(&self.graph.edge_attrs, self.index)
    }
}
