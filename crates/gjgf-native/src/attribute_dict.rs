// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute-dict graph: arbitrary node keys, one attribute dict per graph,
//! node and edge.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Runtime type path of the undirected variant.
pub const TYPE_PATH: &str = "networkx.classes.graph.Graph";
/// Runtime type path of the directed variant.
pub const DIRECTED_TYPE_PATH: &str = "networkx.classes.digraph.DiGraph";

/// Attribute dict.
pub type AttrDict = BTreeMap<String, Value>;

/// Graph keyed by caller-chosen node keys (strings, numbers, ...).
///
/// Nodes iterate in insertion order. Undirected graphs hold one edge per
/// unordered pair; re-adding a node or edge merges its attributes.
#[derive(Debug, Clone, Default)]
pub struct DictGraph {
    directed: bool,
    graph: AttrDict,
    nodes: Vec<(Value, AttrDict)>,
    node_index: HashMap<String, usize>,
    edges: Vec<(usize, usize, AttrDict)>,
    edge_index: HashMap<(usize, usize), usize>,
}

fn key_of(node: &Value) -> String {
    node.to_string()
}

impl DictGraph {
    /// Empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty directed graph.
    pub fn new_directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Directedness flag.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Runtime type path of this graph.
    pub fn type_path(&self) -> &'static str {
        if self.directed {
            DIRECTED_TYPE_PATH
        } else {
            TYPE_PATH
        }
    }

    /// Graph attribute dict.
    pub fn graph(&self) -> &AttrDict {
        &self.graph
    }

    /// Mutable graph attribute dict.
    pub fn graph_mut(&mut self) -> &mut AttrDict {
        &mut self.graph
    }

    fn ensure_node(&mut self, node: Value) -> usize {
        let key = key_of(&node);
        if let Some(&index) = self.node_index.get(&key) {
            return index;
        }
        self.nodes.push((node, AttrDict::new()));
        let index = self.nodes.len() - 1;
        self.node_index.insert(key, index);
        index
    }

    /// Add a node (or merge attributes into an existing one).
    pub fn add_node(&mut self, node: impl Into<Value>, attrs: AttrDict) {
        let index = self.ensure_node(node.into());
        self.nodes[index].1.extend(attrs);
    }

    /// Add an edge (or merge attributes into an existing one). Missing
    /// endpoints are added as bare nodes.
    pub fn add_edge(&mut self, u: impl Into<Value>, v: impl Into<Value>, attrs: AttrDict) {
        let u = self.ensure_node(u.into());
        let v = self.ensure_node(v.into());
        let key = if self.directed || u <= v { (u, v) } else { (v, u) };
        if let Some(&index) = self.edge_index.get(&key) {
            self.edges[index].2.extend(attrs);
            return;
        }
        self.edges.push((u, v, attrs));
        self.edge_index.insert(key, self.edges.len() - 1);
    }

    /// Attributes of one node.
    pub fn node_attrs(&self, node: &Value) -> Option<&AttrDict> {
        self.node_index
            .get(&key_of(node))
            .map(|&index| &self.nodes[index].1)
    }

    /// Nodes with their attributes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&Value, &AttrDict)> {
        self.nodes.iter().map(|(node, attrs)| (node, attrs))
    }

    /// Edges `(u, v, attrs)` in insertion order, oriented as first added.
    pub fn edges(&self) -> impl Iterator<Item = (&Value, &Value, &AttrDict)> {
        self.edges
            .iter()
            .map(|(u, v, attrs)| (&self.nodes[*u].0, &self.nodes[*v].0, attrs))
    }

    /// Number of nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }
}
