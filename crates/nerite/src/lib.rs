#![forbid(unsafe_code)]

//! Interactive BFS explorer core.
//!
//! A user builds an undirected graph one `"node1,node2"` edge at a time, then
//! steps a breadth-first traversal one dequeue per call, watching the visit
//! order and the resulting spanning tree. This crate is the headless core: the
//! [`Explorer`] state machine plus serializable [`Snapshot`]s; rendering is a
//! pure consumer of snapshots and lives elsewhere.
//!
//! Determinism is a contract: node, edge and neighbor enumeration follow
//! insertion order, so the same edge-entry sequence always produces the same
//! traversal and the same layout.

mod error;
mod explorer;
mod snapshot;

pub use error::{Error, Result};
pub use explorer::{Explorer, Phase};
pub use nerite_graphlib::{Edge, Graph};
pub use nerite_layout::{Point, compute_layout};
pub use snapshot::Snapshot;
