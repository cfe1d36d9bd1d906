// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Callback-traversal graph: nodes and edges are only reachable through
//! `for_nodes` / `for_edges` visitors. It carries no attributes of its own;
//! callers ship metadata next to it.

use crate::NativeError;

/// Runtime type path reported by this model.
pub const TYPE_PATH: &str = "networkit.graph.Graph";

#[derive(Debug, Clone, Copy, PartialEq)]
struct TraversalEdge {
    source: u64,
    target: u64,
    weight: f64,
    id: u64,
}

/// Graph with stable node ids (gaps appear after removals).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraversalGraph {
    directed: bool,
    alive: Vec<bool>,
    edges: Vec<TraversalEdge>,
    next_edge_id: u64,
}

impl TraversalGraph {
    /// Graph with `n` nodes and no edges.
    pub fn new(n: u64, directed: bool) -> Self {
        Self {
            directed,
            alive: vec![true; usize::try_from(n).unwrap_or(0)],
            ..Self::default()
        }
    }

    /// Directedness flag.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node, returning its id.
    pub fn add_node(&mut self) -> u64 {
        self.alive.push(true);
        self.alive.len() as u64 - 1
    }

    /// Whether `u` is a live node.
    pub fn has_node(&self, u: u64) -> bool {
        usize::try_from(u)
            .ok()
            .and_then(|i| self.alive.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Add an unweighted edge (weight 1.0), returning its edge id.
    pub fn add_edge(&mut self, u: u64, v: u64) -> Result<u64, NativeError> {
        self.add_weighted_edge(u, v, 1.0)
    }

    /// Add a weighted edge, returning its edge id.
    pub fn add_weighted_edge(&mut self, u: u64, v: u64, weight: f64) -> Result<u64, NativeError> {
        for node in [u, v] {
            if !self.has_node(node) {
                return Err(NativeError::UnknownNode(node.to_string()));
            }
        }
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.push(TraversalEdge {
            source: u,
            target: v,
            weight,
            id,
        });
        Ok(id)
    }

    /// Remove a node and its incident edges. Its id is not reused.
    pub fn remove_node(&mut self, u: u64) -> Result<(), NativeError> {
        let slot = usize::try_from(u)
            .ok()
            .and_then(|i| self.alive.get_mut(i))
            .filter(|alive| **alive)
            .ok_or_else(|| NativeError::UnknownNode(u.to_string()))?;
        *slot = false;
        self.edges.retain(|e| e.source != u && e.target != u);
        Ok(())
    }

    /// Number of live nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.alive.iter().filter(|alive| **alive).count()
    }

    /// Number of edges.
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Call `visit(u)` for every live node in id order.
    pub fn for_nodes<F: FnMut(u64)>(&self, mut visit: F) {
        for (u, alive) in self.alive.iter().enumerate() {
            if *alive {
                visit(u as u64);
            }
        }
    }

    /// Call `visit(u, v, weight, edge_id)` for every edge in insertion order.
    pub fn for_edges<F: FnMut(u64, u64, f64, u64)>(&self, mut visit: F) {
        for edge in &self.edges {
            visit(edge.source, edge.target, edge.weight, edge.id);
        }
    }
}
