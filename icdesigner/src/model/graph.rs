//! Connectivity graph of a component group.
//!
//! Nodes are components, edges are wires whose endpoints both belong to the
//! group. Used to decide whether a selection forms one connected circuit.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::guid::Guid;
use super::object_set::DigitalObjectSet;

#[derive(Debug, Clone)]
pub struct CircuitGraph {
    graph: UnGraph<Guid, Guid>,
    indices: HashMap<Guid, NodeIndex>,
}

impl CircuitGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            indices: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, component: Guid) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&component) {
            return idx;
        }
        let idx = self.graph.add_node(component);
        self.indices.insert(component, idx);
        idx
    }

    /// Connect two components; returns false if either is not a node.
    pub fn add_edge(&mut self, a: Guid, b: Guid, wire: Guid) -> bool {
        match (self.indices.get(&a), self.indices.get(&b)) {
            (Some(&ia), Some(&ib)) => {
                self.graph.add_edge(ia, ib, wire);
                true
            }
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, component: Guid) -> bool {
        self.indices.contains_key(&component)
    }

    /// Number of connected groups. An empty graph has none.
    pub fn component_groups(&self) -> usize {
        connected_components(&self.graph)
    }

    /// True when every node can reach every other node.
    pub fn is_connected(&self) -> bool {
        self.component_groups() <= 1
    }

    /// Components directly wired to `component`.
    pub fn neighbors(&self, component: Guid) -> Vec<Guid> {
        let Some(&idx) = self.indices.get(&component) else {
            return Vec::new();
        };
        let mut out: Vec<Guid> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).copied())
            .collect();
        out.sort();
        out.dedup();
        out
    }
}

impl Default for CircuitGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the connectivity graph induced by a group.
pub fn create_graph(group: &DigitalObjectSet) -> CircuitGraph {
    let mut graph = CircuitGraph::new();
    let mut port_to_component: HashMap<Guid, Guid> = HashMap::new();

    for component in group.components() {
        graph.add_node(component.id());
        for port in component.ports() {
            port_to_component.insert(port.id, component.id());
        }
    }

    for wire in group.wires() {
        let ends = (port_to_component.get(&wire.p1), port_to_component.get(&wire.p2));
        if let (Some(&a), Some(&b)) = ends {
            graph.add_edge(a, b, wire.id);
        }
    }

    graph
}
