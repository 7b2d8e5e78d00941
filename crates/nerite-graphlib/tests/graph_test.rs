use nerite_graphlib::Graph;

#[test]
fn set_edge_inserts_missing_endpoints() {
    let mut g = Graph::undirected();
    g.set_edge("a", "b");

    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn set_edge_is_idempotent() {
    let mut g = Graph::undirected();
    g.set_edge("a", "b");
    g.set_edge("a", "b");
    g.set_edge("b", "a");

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn undirected_edges_are_symmetric() {
    let mut g = Graph::undirected();
    g.set_edge("b", "a");

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
}

#[test]
fn directed_edges_are_not_symmetric() {
    let mut g = Graph::directed();
    g.set_edge("a", "b");

    assert!(g.is_directed());
    assert!(g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
    assert_eq!(g.successors("a"), vec!["b"]);
    assert_eq!(g.successors("b"), Vec::<&str>::new());
}

#[test]
fn nodes_enumerate_in_insertion_order() {
    let mut g = Graph::undirected();
    g.set_edge("c", "a");
    g.set_edge("a", "b");
    g.ensure_node("z");

    let ids: Vec<&str> = g.nodes().collect();
    assert_eq!(ids, vec!["c", "a", "b", "z"]);
    assert_eq!(g.first_node(), Some("c"));
}

#[test]
fn neighbors_enumerate_in_edge_insertion_order() {
    let mut g = Graph::undirected();
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    g.set_edge("d", "a");

    assert_eq!(g.neighbors("a"), vec!["b", "c", "d"]);
    assert_eq!(g.neighbors("b"), vec!["a"]);
    assert_eq!(g.neighbors("x"), Vec::<&str>::new());
}

#[test]
fn neighbors_dedupe_self_loops() {
    let mut g = Graph::undirected();
    g.set_edge("a", "a");
    g.set_edge("a", "b");

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.neighbors("a"), vec!["a", "b"]);
}

#[test]
fn successors_follow_edge_insertion_order() {
    let mut g = Graph::directed();
    g.set_edge("r", "b");
    g.set_edge("r", "a");
    g.set_edge("a", "c");

    assert_eq!(g.successors("r"), vec!["b", "a"]);
    assert_eq!(g.successors("a"), vec!["c"]);
}

#[test]
fn clear_empties_nodes_and_edges() {
    let mut g = Graph::undirected();
    g.set_edge("a", "b");
    g.set_edge("b", "c");
    g.clear();

    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_edge("a", "b"));
    assert!(!g.options().directed);

    // The cleared graph is usable again.
    g.set_edge("x", "y");
    assert_eq!(g.first_node(), Some("x"));
}
