use indexmap::IndexMap;
use nerite_layout::Point;
use serde::Serialize;

use crate::explorer::{Explorer, Phase};

/// Read-only view of the explorer for frontends: node/edge sets for the graph
/// pane, visited order and frontier for coloring, tree edges and positions for
/// the spanning-tree pane. Built fresh per request; holds no references back
/// into the explorer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub visited: Vec<String>,
    pub queue: Vec<String>,
    pub tree_edges: Vec<(String, String)>,
    pub positions: IndexMap<String, Point>,
}

impl Snapshot {
    pub(crate) fn of(explorer: &Explorer) -> Self {
        Self {
            phase: explorer.phase(),
            nodes: explorer.graph().node_ids(),
            edges: explorer
                .graph()
                .edges()
                .map(|e| (e.v.clone(), e.w.clone()))
                .collect(),
            visited: explorer.visited().to_vec(),
            queue: explorer.queue().map(str::to_string).collect(),
            tree_edges: explorer
                .tree()
                .edges()
                .map(|e| (e.v.clone(), e.w.clone()))
                .collect(),
            positions: explorer.layout(),
        }
    }
}
