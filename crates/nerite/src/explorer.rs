use std::collections::VecDeque;

use indexmap::IndexMap;
use nerite_graphlib::Graph;
use nerite_layout::{Point, compute_layout};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// Where the traversal currently stands.
///
/// `Idle` and `Exhausted` both have an empty frontier; keeping them apart
/// matters because `step` seeds a fresh root only from `Idle`. Once the
/// component containing the root is exhausted, further steps stay no-ops even
/// if disconnected unvisited nodes exist; `reset` is the way back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Exhausted,
}

/// The explorer state: an undirected graph under construction, plus a
/// breadth-first traversal over it that advances one dequeue per `step` call
/// and records its discoveries as a directed spanning tree.
#[derive(Debug)]
pub struct Explorer {
    graph: Graph,
    tree: Graph,
    visited: Vec<String>,
    queue: VecDeque<String>,
    phase: Phase,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            graph: Graph::undirected(),
            tree: Graph::directed(),
            visited: Vec::new(),
            queue: VecDeque::new(),
            phase: Phase::Idle,
        }
    }

    /// Parses `"node1,node2"` (tokens trimmed, both non-empty) and inserts the
    /// undirected edge, creating missing endpoints. Idempotent on repeats.
    /// On a format error, no state changes.
    pub fn add_edge(&mut self, text: &str) -> Result<()> {
        let (u, v) = parse_edge(text)?;
        debug!(%u, %v, "add edge");
        self.graph.set_edge(u, v);
        Ok(())
    }

    /// Advances the traversal by exactly one unit of work.
    ///
    /// From `Idle` with a non-empty graph, enqueues the first node in the
    /// graph's enumeration order as the root (and adds it to the tree as an
    /// isolated node). While `Running`, dequeues the front node, records it as
    /// visited, and enqueues each unseen neighbor with a `curr -> neighbor`
    /// tree edge. Anywhere else this is a no-op.
    pub fn step(&mut self) {
        match self.phase {
            Phase::Exhausted => {
                trace!("step ignored: traversal exhausted");
            }
            Phase::Idle => {
                let Some(root) = self.graph.first_node() else {
                    trace!("step ignored: graph is empty");
                    return;
                };
                let root = root.to_string();
                debug!(%root, "seed traversal");
                self.tree.ensure_node(root.clone());
                self.queue.push_back(root);
                self.phase = Phase::Running;
            }
            Phase::Running => {
                let Some(curr) = self.queue.pop_front() else {
                    self.phase = Phase::Exhausted;
                    return;
                };
                if !self.visited.iter().any(|n| n == &curr) {
                    self.visited.push(curr.clone());
                }
                debug!(node = %curr, "visit");

                let neighbors: Vec<String> = self
                    .graph
                    .neighbors(&curr)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                for n in neighbors {
                    if self.visited.iter().any(|x| x == &n) || self.queue.iter().any(|x| x == &n) {
                        continue;
                    }
                    trace!(parent = %curr, child = %n, "discover");
                    self.tree.set_edge(curr.clone(), n.clone());
                    self.queue.push_back(n);
                }

                if self.queue.is_empty() {
                    debug!(visited = self.visited.len(), "traversal exhausted");
                    self.phase = Phase::Exhausted;
                }
            }
        }
    }

    /// Clears the graph, the tree and all traversal state.
    pub fn reset(&mut self) {
        debug!("reset");
        self.graph.clear();
        self.tree.clear();
        self.visited.clear();
        self.queue.clear();
        self.phase = Phase::Idle;
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn tree(&self) -> &Graph {
        &self.tree
    }

    /// Nodes in the order they were dequeued.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// The frontier, front first.
    pub fn queue(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(|n| n.as_str())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.iter().any(|n| n == id)
    }

    /// Positions for the current spanning tree, recomputed from scratch on
    /// every call. Empty while the tree is empty.
    pub fn layout(&self) -> IndexMap<String, Point> {
        compute_layout(&self.tree, None)
    }

    /// A serializable read-only view of the whole state, built fresh.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}

fn parse_edge(text: &str) -> Result<(String, String)> {
    let mut tokens = text.split(',');
    if let (Some(u), Some(v), None) = (tokens.next(), tokens.next(), tokens.next()) {
        let u = u.trim();
        let v = v.trim();
        if !u.is_empty() && !v.is_empty() {
            return Ok((u.to_string(), v.to_string()));
        }
    }
    Err(Error::EdgeFormat {
        input: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_edge;

    #[test]
    fn parse_edge_trims_tokens() {
        let (u, v) = parse_edge("  a , b ").unwrap();
        assert_eq!(u, "a");
        assert_eq!(v, "b");
    }

    #[test]
    fn parse_edge_rejects_wrong_arity() {
        assert!(parse_edge("a").is_err());
        assert!(parse_edge("a,b,c").is_err());
        assert!(parse_edge("").is_err());
    }

    #[test]
    fn parse_edge_rejects_empty_tokens() {
        assert!(parse_edge("a,").is_err());
        assert!(parse_edge(",b").is_err());
        assert!(parse_edge(" , ").is_err());
    }
}
