//! Graph container APIs used by the nerite explorer.
//!
//! The container is deliberately small: nodes are opaque string labels, edges
//! carry no payload, and nothing is ever removed (the explorer only grows a
//! graph until it is cleared wholesale). What it does guarantee is enumeration
//! order: `nodes()`, `edges()`, `successors()` and `neighbors()` all iterate in
//! insertion order, which the explorer relies on for reproducible root
//! selection, frontier expansion and tree layout.

use rustc_hash::FxBuildHasher;
use std::hash::{Hash, Hasher};

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    pub directed: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { directed: true }
    }
}

/// An edge between two node ids. For undirected graphs the endpoints are
/// stored in canonical (lexicographic) order so that `(a, b)` and `(b, a)`
/// index the same edge.
#[derive(Debug, Clone)]
pub struct Edge {
    pub v: String,
    pub w: String,
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state);
        self.w.hash(state);
    }
}

#[derive(Clone, Copy, Hash)]
struct EdgeView<'a> {
    v: &'a str,
    w: &'a str,
}

impl<'a> hashbrown::Equivalent<Edge> for EdgeView<'a> {
    fn equivalent(&self, key: &Edge) -> bool {
        key.v == self.v && key.w == self.w
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,

    nodes: Vec<String>,
    node_index: HashSet<String>,

    edges: Vec<Edge>,
    edge_index: HashSet<Edge>,
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashSet::default(),
            edges: Vec::new(),
            edge_index: HashSet::default(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions { directed: true })
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions { directed: false })
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn edge_view<'a>(&self, v: &'a str, w: &'a str) -> EdgeView<'a> {
        if self.options.directed || v <= w {
            EdgeView { v, w }
        } else {
            EdgeView { v: w, w: v }
        }
    }

    fn canonicalize_endpoints(&self, v: String, w: String) -> (String, String) {
        if self.options.directed || v <= w {
            (v, w)
        } else {
            (w, v)
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains(id)
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains(&id) {
            return self;
        }
        self.nodes.push(id.clone());
        self.node_index.insert(id);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.clone()
    }

    /// The first node ever inserted, if any. The explorer seeds its traversal
    /// from this node.
    pub fn first_node(&self) -> Option<&str> {
        self.nodes.first().map(|n| n.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains(&self.edge_view(v, w))
    }

    /// Inserts the edge `v -> w` (or `v -- w` for undirected graphs), creating
    /// either endpoint if it is not yet a node. Inserting an edge that already
    /// exists is a no-op.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        let (v, w) = self.canonicalize_endpoints(v, w);
        let key = Edge { v, w };
        if self.edge_index.contains(&key) {
            return self;
        }
        self.edges.push(key.clone());
        self.edge_index.insert(key);
        self
    }

    /// Heads of edges leaving `v`, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.v == v)
            .map(|e| e.w.as_str())
            .collect()
    }

    /// Nodes adjacent to `v` regardless of edge orientation, in edge insertion
    /// order, deduplicated. A self-loop contributes `v` itself once.
    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for e in &self.edges {
            let other = if e.v == v {
                e.w.as_str()
            } else if e.w == v {
                e.v.as_str()
            } else {
                continue;
            };
            if !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }

    /// Removes every node and edge, keeping the graph's options.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }
}
