//! A container of declared edges between components.
//!
//! The graph only stores edges; traversal and conflict resolution belong to
//! the engine that owns it. Replacing an edge swaps in a new snapshot and
//! hands back the previous one, which stays valid wherever else it is held.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::metadata::Edge;

/// Components connected by dependency edges.
pub struct EdgeGraph {
    graph: DiGraph<String, Edge>,
    /// Lookup from component label to node index.
    index: HashMap<String, NodeIndex>,
}

impl EdgeGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Add or retrieve a component node.
    pub fn add_component(&mut self, label: impl Into<String>) -> NodeIndex {
        let label = label.into();
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }
        let idx = self.graph.add_node(label.clone());
        self.index.insert(label, idx);
        idx
    }

    /// Look up a component by label.
    pub fn find(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn component(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Add a dependency edge from `from` to `to`. Parallel edges are kept.
    pub fn add_dependency(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        edge: impl Into<Edge>,
    ) -> EdgeIndex {
        self.graph.add_edge(from, to, edge.into())
    }

    pub fn edge(&self, idx: EdgeIndex) -> Option<&Edge> {
        self.graph.edge_weight(idx)
    }

    /// Outgoing edges of a component, in insertion order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, EdgeIndex, &Edge)> {
        let mut deps: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.id(), e.weight()))
            .collect();
        deps.sort_by_key(|(_, id, _)| id.index());
        deps
    }

    /// Swap the edge at `idx` for `edge`, returning the previous snapshot.
    pub fn replace_edge(&mut self, idx: EdgeIndex, edge: impl Into<Edge>) -> Option<Edge> {
        let slot = self.graph.edge_weight_mut(idx)?;
        let edge = edge.into();
        tracing::debug!("Replacing `{}` with `{}`", slot, edge);
        Some(std::mem::replace(slot, edge))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// One line per edge: `component -> edge`.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for idx in self.graph.edge_indices() {
            let Some((from, _)) = self.graph.edge_endpoints(idx) else {
                continue;
            };
            output.push_str(&format!("{} -> {}\n", self.graph[from], self.graph[idx]));
        }
        output
    }
}

impl Default for EdgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::DependencyEdge;
    use depgraft_core::selector::ModuleSelector;

    fn edge(version: &str) -> DependencyEdge {
        DependencyEdge::new(ModuleSelector::of("g", "m", version), vec![], false, None)
    }

    #[test]
    fn add_and_find() {
        let mut graph = EdgeGraph::new();
        let app = graph.add_component(":app");
        assert_eq!(graph.add_component(":app"), app);
        assert_eq!(graph.find(":app"), Some(app));
        assert_eq!(graph.component(app), ":app");
        assert!(graph.find(":lib").is_none());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn render_lists_edges() {
        let mut graph = EdgeGraph::new();
        let app = graph.add_component(":app");
        let lib = graph.add_component("g:m");
        graph.add_dependency(app, lib, edge("1.0"));
        graph.add_dependency(app, lib, edge("2.0"));
        assert_eq!(
            graph.render(),
            ":app -> DependencyEdge: g:m:1.0\n:app -> DependencyEdge: g:m:2.0\n"
        );
    }
}
