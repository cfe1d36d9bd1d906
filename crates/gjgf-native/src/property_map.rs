// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property-map graph: dense vertex indices plus typed property maps.
//!
//! Every vertex/edge property map is a typed array indexed by the vertex or
//! edge index. A slot that was never written reads back as the type's zero
//! value, so "unset" and "zero" are indistinguishable at this layer.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::NativeError;

/// Runtime type path reported by this model.
pub const TYPE_PATH: &str = "graph_tool.Graph";

/// Value type of a property map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `bool`
    Bool,
    /// 64-bit integer.
    Int,
    /// Double precision float.
    Double,
    /// UTF-8 string.
    String,
    /// Arbitrary value.
    Object,
}

impl ValueType {
    /// Value an unset slot reads back as.
    pub fn zero(self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Int => Value::from(0_i64),
            Self::Double => Value::from(0.0_f64),
            Self::String => Value::String(String::new()),
            Self::Object => Value::Null,
        }
    }

    /// Type name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Object => "object",
        }
    }

    fn coerce(self, value: Value) -> Option<Value> {
        match (self, value) {
            (Self::Bool, v @ Value::Bool(_)) | (Self::String, v @ Value::String(_)) => Some(v),
            (Self::Int, Value::Number(n)) if n.is_i64() || n.is_u64() => Some(Value::Number(n)),
            (Self::Double, Value::Number(n)) => n.as_f64().map(Value::from),
            (Self::Object, v) => Some(v),
            _ => None,
        }
    }
}

/// Typed value array indexed by vertex or edge index.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMap {
    value_type: ValueType,
    values: Vec<Value>,
}

impl PropertyMap {
    /// Empty map of the given type.
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            values: Vec::new(),
        }
    }

    /// Declared value type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Read slot `index`; unset slots read as the type's zero.
    pub fn get(&self, index: usize) -> Value {
        self.values
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.value_type.zero())
    }

    fn set(&mut self, name: &str, index: usize, value: Value) -> Result<(), NativeError> {
        let value = self
            .value_type
            .coerce(value)
            .ok_or_else(|| NativeError::TypeMismatch {
                property: name.to_owned(),
                expected: self.value_type.name(),
            })?;
        if self.values.len() <= index {
            self.values.resize(index + 1, self.value_type.zero());
        }
        self.values[index] = value;
        Ok(())
    }
}

/// Vertex descriptor. Displays as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(pub usize);

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    index: usize,
    source: Vertex,
    target: Vertex,
}

impl Edge {
    /// Edge index (slot in edge property maps).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source vertex.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Target vertex.
    pub fn target(&self) -> Vertex {
        self.target
    }
}

/// Graph with typed property maps at graph, vertex and edge level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyGraph {
    directed: bool,
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    graph_properties: BTreeMap<String, Value>,
    vertex_properties: BTreeMap<String, PropertyMap>,
    edge_properties: BTreeMap<String, PropertyMap>,
}

impl PropertyGraph {
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

    /// Add one vertex.
    pub fn add_vertex(&mut self) -> Vertex {
        self.vertex_count += 1;
        Vertex(self.vertex_count - 1)
    }

    /// Add `n` vertices.
    pub fn add_vertices(&mut self, n: usize) {
        self.vertex_count += n;
    }

    /// Add an edge between existing vertices.
    pub fn add_edge(&mut self, source: Vertex, target: Vertex) -> Result<Edge, NativeError> {
        for v in [source, target] {
            if v.0 >= self.vertex_count {
                return Err(NativeError::UnknownNode(v.to_string()));
            }
        }
        self.edges.push((source.0, target.0));
        Ok(Edge {
            index: self.edges.len() - 1,
            source,
            target,
        })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        (0..self.vertex_count).map(Vertex)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, &(s, t))| Edge {
                index,
                source: Vertex(s),
                target: Vertex(t),
            })
    }

    /// Set a graph-level property.
    pub fn set_graph_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.graph_properties.insert(name.into(), value.into());
    }

    /// Graph-level properties.
    pub fn graph_properties(&self) -> &BTreeMap<String, Value> {
        &self.graph_properties
    }

    /// Declare a vertex property map (replaces an existing one of that name).
    pub fn new_vertex_property(&mut self, name: impl Into<String>, value_type: ValueType) {
        self.vertex_properties
            .insert(name.into(), PropertyMap::new(value_type));
    }

    /// Write one vertex slot.
    pub fn set_vertex_property(
        &mut self,
        name: &str,
        vertex: Vertex,
        value: impl Into<Value>,
    ) -> Result<(), NativeError> {
        if vertex.0 >= self.vertex_count {
            return Err(NativeError::UnknownNode(vertex.to_string()));
        }
        self.vertex_properties
            .get_mut(name)
            .ok_or_else(|| NativeError::UnknownProperty(name.to_owned()))?
            .set(name, vertex.0, value.into())
    }

    /// Declared vertex property maps.
    pub fn vertex_properties(&self) -> &BTreeMap<String, PropertyMap> {
        &self.vertex_properties
    }

    /// Declare an edge property map (replaces an existing one of that name).
    pub fn new_edge_property(&mut self, name: impl Into<String>, value_type: ValueType) {
        self.edge_properties
            .insert(name.into(), PropertyMap::new(value_type));
    }

    /// Write one edge slot.
    pub fn set_edge_property(
        &mut self,
        name: &str,
        edge: Edge,
        value: impl Into<Value>,
    ) -> Result<(), NativeError> {
        if edge.index >= self.edges.len() {
            return Err(NativeError::UnknownEdge(edge.index.to_string()));
        }
        self.edge_properties
            .get_mut(name)
            .ok_or_else(|| NativeError::UnknownProperty(name.to_owned()))?
            .set(name, edge.index, value.into())
    }

    /// Declared edge property maps.
    pub fn edge_properties(&self) -> &BTreeMap<String, PropertyMap> {
        &self.edge_properties
    }
}
