//! Compressed trie over indexed names.
//!
//! Nodes and edges live in two arenas owned by [`SearchIndex`]; edges refer to their
//! target node by index. Each node keys its outgoing edges by the first char of the
//! edge label, so labels are never empty and siblings never share a first char.

use crate::error::IndexError;
use std::collections::{BTreeMap, HashSet};
use symnav_core::types::{ElementId, NodeTypeSet};
use symnav_core::ValidationError;
use tracing::debug;

pub(crate) type NodeId = usize;
pub(crate) type EdgeId = usize;

pub(crate) const ROOT: NodeId = 0;

pub(crate) struct Node {
    pub(crate) edges: BTreeMap<char, EdgeId>,
    /// Ids terminating exactly here, with the types each was added under.
    pub(crate) element_ids: BTreeMap<ElementId, NodeTypeSet>,
    /// Union of the types of every entry at or below this node.
    pub(crate) contained_types: NodeTypeSet,
}

impl Node {
    fn new(contained_types: NodeTypeSet) -> Self {
        Self {
            edges: BTreeMap::new(),
            element_ids: BTreeMap::new(),
            contained_types,
        }
    }
}

pub(crate) struct Edge {
    pub(crate) label: Vec<char>,
    pub(crate) target: NodeId,
    /// Lower-cased chars reachable anywhere at or below this edge.
    pub(crate) gate: HashSet<char>,
}

impl Edge {
    fn new(label: Vec<char>, target: NodeId) -> Self {
        Self {
            label,
            target,
            gate: HashSet::new(),
        }
    }

    pub(crate) fn passes_gate(&self, remaining_query: &[char]) -> bool {
        remaining_query.iter().all(|c| self.gate.contains(c))
    }
}

/// Lower-cases a single char the way queries and gates are folded.
pub(crate) fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Append-only name index.
///
/// Build with [`add_entry`](Self::add_entry), then call [`finish_setup`](Self::finish_setup)
/// exactly once. The index is read-only afterwards until [`clear`](Self::clear).
pub struct SearchIndex {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    frozen: bool,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Create operations.
impl SearchIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeTypeSet::none())],
            edges: Vec::new(),
            frozen: false,
        }
    }

    /// Adds `name` under `id`. Comparison is case-sensitive; the stored text keeps its case.
    pub fn add_entry(
        &mut self,
        name: &str,
        id: ElementId,
        types: NodeTypeSet,
    ) -> Result<(), IndexError> {
        if self.frozen {
            return Err(IndexError::Frozen);
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let chars: Vec<char> = name.chars().collect();
        let mut remaining: &[char] = &chars;
        let mut current = ROOT;

        while let Some(&first) = remaining.first() {
            self.nodes[current].contained_types.add(types);

            let Some(&edge_id) = self.nodes[current].edges.get(&first) else {
                let leaf = self.push_node(NodeTypeSet::none());
                let edge_id = self.push_edge(remaining.to_vec(), leaf);
                self.nodes[current].edges.insert(first, edge_id);
                current = leaf;
                break;
            };

            let label = &self.edges[edge_id].label;
            let match_count = 1 + label[1..]
                .iter()
                .zip(&remaining[1..])
                .take_while(|(a, b)| a == b)
                .count();

            if match_count < label.len() {
                self.split_edge(edge_id, match_count);
            }

            remaining = &remaining[match_count..];
            current = self.edges[edge_id].target;
        }

        let node = &mut self.nodes[current];
        node.contained_types.add(types);
        node.element_ids
            .entry(id)
            .and_modify(|existing| existing.add(types))
            .or_insert(types);

        Ok(())
    }

    /// Cuts `edge_id` after `at` chars, moving the rest of its label below a new node.
    fn split_edge(&mut self, edge_id: EdgeId, at: usize) {
        let old_target = self.edges[edge_id].target;
        let tail = self.edges[edge_id].label.split_off(at);
        let tail_first = tail[0];

        let below = self.nodes[old_target].contained_types;
        let middle = self.push_node(below);
        let tail_edge = self.push_edge(tail, old_target);
        self.nodes[middle].edges.insert(tail_first, tail_edge);
        self.edges[edge_id].target = middle;
    }

    fn push_node(&mut self, contained_types: NodeTypeSet) -> NodeId {
        self.nodes.push(Node::new(contained_types));
        self.nodes.len() - 1
    }

    fn push_edge(&mut self, label: Vec<char>, target: NodeId) -> EdgeId {
        self.edges.push(Edge::new(label, target));
        self.edges.len() - 1
    }
}

/// Lifecycle operations.
impl SearchIndex {
    /// Computes every edge gate bottom-up and freezes the index.
    pub fn finish_setup(&mut self) {
        let root_edges: Vec<EdgeId> = self.nodes[ROOT].edges.values().copied().collect();
        for edge_id in root_edges {
            self.populate_gate(edge_id);
        }
        self.frozen = true;

        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "search index frozen"
        );
    }

    fn populate_gate(&mut self, edge_id: EdgeId) {
        let target = self.edges[edge_id].target;
        let children: Vec<EdgeId> = self.nodes[target].edges.values().copied().collect();

        let mut gate = HashSet::new();
        for child in children {
            self.populate_gate(child);
            gate.extend(self.edges[child].gate.iter().copied());
        }
        gate.extend(self.edges[edge_id].label.iter().map(|&c| fold_case(c)));

        self.edges[edge_id].gate = gate;
    }

    /// Drops every entry and returns to an empty, writable index.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Exact lookup operations.
impl SearchIndex {
    /// Returns the ids stored under exactly `name` (case-sensitive), in ascending order.
    pub fn find_ids(&self, name: &str) -> Vec<ElementId> {
        self.node_at(name)
            .map(|node| self.nodes[node].element_ids.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the smallest id stored under exactly `name`.
    pub fn find(&self, name: &str) -> Option<ElementId> {
        let node = self.node_at(name)?;
        self.nodes[node].element_ids.keys().next().copied()
    }

    /// Returns the gate of the edge that ends exactly at `prefix`, if there is one.
    pub fn gate_at(&self, prefix: &str) -> Option<&HashSet<char>> {
        let (_, last_edge) = self.walk(prefix)?;
        last_edge.map(|edge_id| &self.edges[edge_id].gate)
    }

    fn node_at(&self, name: &str) -> Option<NodeId> {
        self.walk(name).map(|(node, _)| node)
    }

    /// Follows whole edge labels spelling `name`; fails if `name` ends mid-edge.
    fn walk(&self, name: &str) -> Option<(NodeId, Option<EdgeId>)> {
        let chars: Vec<char> = name.chars().collect();
        let mut remaining: &[char] = &chars;
        let mut current = ROOT;
        let mut last_edge = None;

        while let Some(first) = remaining.first() {
            let edge_id = *self.nodes[current].edges.get(first)?;
            let label = &self.edges[edge_id].label;
            if !remaining.starts_with(label) {
                return None;
            }
            remaining = &remaining[label.len()..];
            current = self.edges[edge_id].target;
            last_edge = Some(edge_id);
        }

        Some((current, last_edge))
    }
}
