// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Native-binding graph whose directedness and capabilities are encoded in
//! its concrete subtype rather than in a flag.
//!
//! Only the attributed network subtype carries per-node/per-edge attribute
//! tables (int, float and string columns). Other subtypes have no attribute
//! API at all; [`SnapGraph::attributes`] is the capability probe.

use std::collections::{BTreeMap, BTreeSet};

use crate::NativeError;

/// Concrete graph subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapType {
    /// Undirected simple graph.
    UNGraph,
    /// Directed simple graph.
    NGraph,
    /// Undirected network.
    UndirNet,
    /// Directed network.
    DirNet,
    /// Directed multigraph with node/edge attributes.
    NEANet,
}

impl SnapType {
    /// Runtime type path of the subtype.
    pub fn type_path(self) -> &'static str {
        match self {
            Self::UNGraph => "snap.PUNGraph",
            Self::NGraph => "snap.PNGraph",
            Self::UndirNet => "snap.PUndirNet",
            Self::DirNet => "snap.PDirNet",
            Self::NEANet => "snap.PNEANet",
        }
    }

    fn allows_multi_edges(self) -> bool {
        matches!(self, Self::NEANet)
    }

    fn is_undirected(self) -> bool {
        matches!(self, Self::UNGraph | Self::UndirNet)
    }
}

/// Node iterator item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapNode {
    id: i64,
}

impl SnapNode {
    /// Node id.
    pub fn get_id(&self) -> i64 {
        self.id
    }
}

/// Edge iterator item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapEdge {
    id: i64,
    src: i64,
    dst: i64,
}

impl SnapEdge {
    /// Edge id.
    pub fn get_id(&self) -> i64 {
        self.id
    }

    /// Source node id.
    pub fn get_src_nid(&self) -> i64 {
        self.src
    }

    /// Destination node id.
    pub fn get_dst_nid(&self) -> i64 {
        self.dst
    }
}

type Column<T> = BTreeMap<String, BTreeMap<i64, T>>;

#[derive(Debug, Clone, Default, PartialEq)]
struct AttrTables {
    node_int: Column<i64>,
    node_flt: Column<f64>,
    node_str: Column<String>,
    edge_int: Column<i64>,
    edge_flt: Column<f64>,
    edge_str: Column<String>,
}

fn names_for<T>(column: &Column<T>, id: i64) -> Vec<&str> {
    column
        .iter()
        .filter(|(_, values)| values.contains_key(&id))
        .map(|(name, _)| name.as_str())
        .collect()
}

fn value_for<T: Clone>(column: &Column<T>, id: i64, name: &str) -> Option<T> {
    column.get(name).and_then(|values| values.get(&id)).cloned()
}

/// Graph of one concrete [`SnapType`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapGraph {
    subtype: SnapType,
    nodes: BTreeSet<i64>,
    edges: Vec<SnapEdge>,
    next_edge_id: i64,
    attrs: AttrTables,
}

impl SnapGraph {
    /// Empty graph of the given subtype.
    pub fn new(subtype: SnapType) -> Self {
        Self {
            subtype,
            nodes: BTreeSet::new(),
            edges: Vec::new(),
            next_edge_id: 0,
            attrs: AttrTables::default(),
        }
    }

    /// Concrete subtype.
    pub fn subtype(&self) -> SnapType {
        self.subtype
    }

    /// Runtime type path (e.g. `snap.PNEANet`).
    pub fn type_path(&self) -> &'static str {
        self.subtype.type_path()
    }

    /// Add a node with an explicit id (no-op if present).
    pub fn add_node(&mut self, id: i64) -> i64 {
        self.nodes.insert(id);
        id
    }

    /// Whether `id` is a node.
    pub fn is_node(&self, id: i64) -> bool {
        self.nodes.contains(&id)
    }

    /// Add an edge. Simple subtypes return the existing id for a duplicate.
    pub fn add_edge(&mut self, src: i64, dst: i64) -> Result<i64, NativeError> {
        for id in [src, dst] {
            if !self.is_node(id) {
                return Err(NativeError::UnknownNode(id.to_string()));
            }
        }
        if !self.subtype.allows_multi_edges() {
            let undirected = self.subtype.is_undirected();
            if let Some(existing) = self.edges.iter().find(|e| {
                (e.src == src && e.dst == dst) || (undirected && e.src == dst && e.dst == src)
            }) {
                return Ok(existing.id);
            }
        }
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.push(SnapEdge { id, src, dst });
        Ok(id)
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = SnapNode> + '_ {
        self.nodes.iter().map(|&id| SnapNode { id })
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = SnapEdge> + '_ {
        self.edges.iter().copied()
    }

    /// Number of nodes.
    pub fn get_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn get_edges(&self) -> usize {
        self.edges.len()
    }

    /// Attribute access, present only on the attributed subtype.
    pub fn attributes(&self) -> Option<SnapAttributes<'_>> {
        (self.subtype == SnapType::NEANet).then_some(SnapAttributes { graph: self })
    }

    fn attribute_tables(&mut self) -> Result<&mut AttrTables, NativeError> {
        if self.subtype == SnapType::NEANet {
            Ok(&mut self.attrs)
        } else {
            Err(NativeError::NotAttributed(self.type_path()))
        }
    }

    fn check_node(&self, id: i64) -> Result<(), NativeError> {
        if self.is_node(id) {
            Ok(())
        } else {
            Err(NativeError::UnknownNode(id.to_string()))
        }
    }

    fn check_edge(&self, id: i64) -> Result<(), NativeError> {
        if self.edges.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(NativeError::UnknownEdge(id.to_string()))
        }
    }

    /// Set an integer node attribute.
    pub fn add_int_attr_dat_n(
        &mut self,
        node: i64,
        name: &str,
        value: i64,
    ) -> Result<(), NativeError> {
        self.check_node(node)?;
        let tables = self.attribute_tables()?;
        tables.node_int.entry(name.to_owned()).or_default().insert(node, value);
        Ok(())
    }

    /// Set a float node attribute.
    pub fn add_flt_attr_dat_n(
        &mut self,
        node: i64,
        name: &str,
        value: f64,
    ) -> Result<(), NativeError> {
        self.check_node(node)?;
        let tables = self.attribute_tables()?;
        tables.node_flt.entry(name.to_owned()).or_default().insert(node, value);
        Ok(())
    }

    /// Set a string node attribute.
    pub fn add_str_attr_dat_n(
        &mut self,
        node: i64,
        name: &str,
        value: &str,
    ) -> Result<(), NativeError> {
        self.check_node(node)?;
        let tables = self.attribute_tables()?;
        tables
            .node_str
            .entry(name.to_owned())
            .or_default()
            .insert(node, value.to_owned());
        Ok(())
    }

    /// Set an integer edge attribute.
    pub fn add_int_attr_dat_e(
        &mut self,
        edge: i64,
        name: &str,
        value: i64,
    ) -> Result<(), NativeError> {
        self.check_edge(edge)?;
        let tables = self.attribute_tables()?;
        tables.edge_int.entry(name.to_owned()).or_default().insert(edge, value);
        Ok(())
    }

    /// Set a float edge attribute.
    pub fn add_flt_attr_dat_e(
        &mut self,
        edge: i64,
        name: &str,
        value: f64,
    ) -> Result<(), NativeError> {
        self.check_edge(edge)?;
        let tables = self.attribute_tables()?;
        tables.edge_flt.entry(name.to_owned()).or_default().insert(edge, value);
        Ok(())
    }

    /// Set a string edge attribute.
    pub fn add_str_attr_dat_e(
        &mut self,
        edge: i64,
        name: &str,
        value: &str,
    ) -> Result<(), NativeError> {
        self.check_edge(edge)?;
        let tables = self.attribute_tables()?;
        tables
            .edge_str
            .entry(name.to_owned())
            .or_default()
            .insert(edge, value.to_owned());
        Ok(())
    }
}

/// Attribute enumeration and typed lookups of an attributed graph.
#[derive(Debug, Clone, Copy)]
pub struct SnapAttributes<'a> {
    graph: &'a SnapGraph,
}

impl<'a> SnapAttributes<'a> {
    /// Integer attribute names set on a node.
    pub fn int_attr_names_n(&self, node: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.node_int, node)
    }

    /// Float attribute names set on a node.
    pub fn flt_attr_names_n(&self, node: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.node_flt, node)
    }

    /// String attribute names set on a node.
    pub fn str_attr_names_n(&self, node: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.node_str, node)
    }

    /// Integer node attribute value.
    pub fn get_int_attr_dat_n(&self, node: i64, name: &str) -> Option<i64> {
        value_for(&self.graph.attrs.node_int, node, name)
    }

    /// Float node attribute value.
    pub fn get_flt_attr_dat_n(&self, node: i64, name: &str) -> Option<f64> {
        value_for(&self.graph.attrs.node_flt, node, name)
    }

    /// String node attribute value.
    pub fn get_str_attr_dat_n(&self, node: i64, name: &str) -> Option<String> {
        value_for(&self.graph.attrs.node_str, node, name)
    }

    /// Integer attribute names set on an edge.
    pub fn int_attr_names_e(&self, edge: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.edge_int, edge)
    }

    /// Float attribute names set on an edge.
    pub fn flt_attr_names_e(&self, edge: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.edge_flt, edge)
    }

    /// String attribute names set on an edge.
    pub fn str_attr_names_e(&self, edge: i64) -> Vec<&'a str> {
        names_for(&self.graph.attrs.edge_str, edge)
    }

    /// Integer edge attribute value.
    pub fn get_int_attr_dat_e(&self, edge: i64, name: &str) -> Option<i64> {
        value_for(&self.graph.attrs.edge_int, edge, name)
    }

    /// Float edge attribute value.
    pub fn get_flt_attr_dat_e(&self, edge: i64, name: &str) -> Option<f64> {
        value_for(&self.graph.attrs.edge_flt, edge, name)
    }

    /// String edge attribute value.
    pub fn get_str_attr_dat_e(&self, edge: i64, name: &str) -> Option<String> {
        value_for(&self.graph.attrs.edge_str, edge, name)
    }
}
