//! Hierarchical layout for rooted trees.
//!
//! Places the root on the top band and every generation one unit lower,
//! spreading children evenly under their parent by recursive subdivision of a
//! unit-wide horizontal interval. The output is purely derived from the tree's
//! structure and is meant to be recomputed on demand, never cached as
//! authoritative state.

use indexmap::IndexMap;
use nerite_graphlib::Graph;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Assigns a position to every node reachable from `root` in `tree`.
///
/// `root` defaults to the first node in the tree's enumeration order. Each
/// node sits at the midpoint of its horizontal interval, with the root owning
/// `[0, 1)`; a node with `k` children splits its own interval into `k` equal
/// sub-intervals, handed out in child enumeration order. `y` is the negated
/// depth, so the root lands at `(0.5, 0.0)` and deeper generations at
/// `y = -1.0, -2.0, ...`.
///
/// An empty tree yields an empty map.
pub fn compute_layout(tree: &Graph, root: Option<&str>) -> IndexMap<String, Point> {
    let mut pos = IndexMap::new();
    let Some(root) = root.or_else(|| tree.first_node()) else {
        return pos;
    };
    subdivide(tree, root, 0.0, 1.0, 0, &mut pos);
    pos
}

fn subdivide(
    tree: &Graph,
    node: &str,
    left: f64,
    right: f64,
    depth: u32,
    pos: &mut IndexMap<String, Point>,
) {
    // `0.0 - depth` rather than `-depth`: negating a zero depth would give the
    // root an IEEE negative zero, which leaks a `-0.0` into formatted and
    // serialized output.
    pos.insert(
        node.to_string(),
        Point {
            x: (left + right) / 2.0,
            y: 0.0 - f64::from(depth),
        },
    );
    let children = tree.successors(node);
    if children.is_empty() {
        return;
    }
    let width = (right - left) / children.len() as f64;
    for (i, child) in children.into_iter().enumerate() {
        let child_left = left + i as f64 * width;
        subdivide(tree, child, child_left, child_left + width, depth + 1, pos);
    }
}
