use std::rc::Rc;

use super::*;

fn cities() -> Graph<&'static str, ()> {
    let link = |a, b, w| Link::with_weight(Node::new(a, ()), Node::new(b, ()), w);
    Graph::from_links([
        link("London", "Dublin", 464),
        link("London", "Belfast", 518),
        link("Dublin", "Belfast", 141),
    ])
}

/// a - b - c - d plus a shortcut a - d of weight 10; unit links elsewhere.
fn square() -> Graph<char, u32> {
    let nodes: Vec<_> = "abcd".chars().zip(1..).map(|(id, v)| Rc::new(Node::new(id, v))).collect();
    let link = |a: usize, b: usize, w| Link::with_weight(Rc::clone(&nodes[a]), Rc::clone(&nodes[b]), w);
    let links = vec![link(0, 1, 1), link(1, 2, 1), link(2, 3, 1), link(0, 3, 10)];
    Graph::builder().nodes(nodes.iter().cloned()).links(links).build().unwrap()
}

#[test]
fn test_from_links_collects_endpoints_once() {
    let graph = cities();
    assert_eq!(graph.len(), 3);
    let ids: Vec<_> = graph.nodes().map(|n| *n.id()).collect();
    assert_eq!(ids, vec!["London", "Dublin", "Belfast"]);
    assert_eq!(graph.links().len(), 3);
}

#[test]
fn test_from_links_first_endpoint_wins() {
    let graph = Graph::from_links([
        Link::new(Node::with_weight(1, "first", 5), Node::new(2, "")),
        Link::new(Node::with_weight(1, "second", 7), Node::new(3, "")),
    ]);
    let node = graph.node(&1).unwrap();
    assert_eq!(node.data(), &"first");
    assert_eq!(node.weight(), 5);
    assert_eq!(graph.links()[1].from().data(), &"first");
}

#[test]
fn test_build_rejects_duplicate_node() {
    let result = Graph::builder().node(Node::new(1, ())).node(Node::new(1, ())).build();
    assert_eq!(result.err(), Some(GraphError::DuplicateNode("1".to_string())));
}

#[test]
fn test_build_rejects_dangling_edge() {
    let result = Graph::new(
        [Node::new(1, ()), Node::new(2, ())],
        [Link::new(Node::new(1, ()), Node::new(9, ()))],
    );
    assert!(matches!(result, Err(GraphError::DanglingEdge { node, .. }) if node == "9"));
}

#[test]
fn test_build_rebinds_link_endpoints_to_graph_nodes() {
    let graph = Graph::new(
        [Node::with_weight('a', "kept", 3), Node::new('b', "")],
        [Link::new(Node::new('a', "stale"), Node::new('b', ""))],
    )
    .unwrap();
    assert_eq!(graph.links()[0].from().data(), &"kept");
}

#[test]
fn test_neighbours_and_links_of() {
    let graph = square();
    let mut around_a: Vec<char> = graph.neighbours(&'a').map(|n| *n.id()).collect();
    around_a.sort();
    assert_eq!(around_a, vec!['b', 'd']);
    assert_eq!(graph.links_of(&'c').count(), 2);
    assert_eq!(graph.neighbours(&'z').count(), 0);
    assert!(graph.contains(&'d'));
    assert!(!graph.contains(&'z'));
}

#[test]
fn test_shortest_path_prefers_cheaper_detour() {
    let graph = square();
    let path = graph.shortest_path(&'a', &'d').unwrap().unwrap();
    let ids: Vec<char> = path.nodes().iter().map(|n| *n.id()).collect();
    assert_eq!(ids, vec!['a', 'b', 'c', 'd']);
    assert_eq!(path.weight(), 3);
}

#[test]
fn test_shortest_path_counts_link_weights() {
    let graph = cities();
    let path = graph.shortest_path(&"London", &"Belfast").unwrap().unwrap();
    assert_eq!(path.weight(), 518);
    assert_eq!(path.len(), 1);
}

#[test]
fn test_shortest_path_to_self_is_empty() {
    let graph = square();
    let path = graph.shortest_path(&'b', &'b').unwrap().unwrap();
    assert!(path.is_empty());
}

#[test]
fn test_shortest_path_unreachable_is_none() {
    let graph = Graph::new(
        [Node::new(1, ()), Node::new(2, ()), Node::new(3, ())],
        [Link::new(Node::new(1, ()), Node::new(2, ()))],
    )
    .unwrap();
    assert!(graph.shortest_path(&1, &3).unwrap().is_none());
}

#[test]
fn test_shortest_path_unknown_node() {
    let graph = square();
    assert_eq!(
        graph.shortest_path(&'a', &'x').unwrap_err(),
        GraphError::UnknownNode("'x'".to_string())
    );
}

#[test]
fn test_shortest_path_with_admissible_heuristic_matches_dijkstra() {
    let graph = square();
    let distance_to_d = |node: &Node<char, u32>| i64::from(4 - node.data());
    let guided = graph.shortest_path_with(&'a', &'d', distance_to_d).unwrap().unwrap();
    assert_eq!(guided.weight(), 3);
}

#[test]
fn test_shortest_path_skips_superseded_frontier_paths() {
    // s-a (5) is enqueued first, then beaten by s-b-a (2) before it is popped.
    let link = |a, b, w| Link::with_weight(Node::new(a, ()), Node::new(b, ()), w);
    let graph = Graph::from_links([link('s', 'a', 5), link('s', 'b', 1), link('b', 'a', 1), link('a', 't', 10)]);

    let (found, expanded) = graph.search(&'s', &'t', |_| 0).unwrap();

    let ids: Vec<char> = found.unwrap().nodes().iter().map(|n| *n.id()).collect();
    assert_eq!(ids, vec!['s', 'b', 'a', 't']);
    // s, b, a through b, then t; the stale direct s-a path is never expanded.
    assert_eq!(expanded, 4);
}

#[test]
fn test_all_paths_with_all_nodes() {
    let paths = cities().all_paths_with_all_nodes();
    assert_eq!(paths.len(), 6);
    assert!(paths.iter().all(|p| p.nodes().len() == 3));
    assert_eq!(paths.iter().map(Path::weight).min(), Some(605));
    assert_eq!(paths.iter().map(Path::weight).max(), Some(982));
}

#[test]
fn test_all_paths_with_all_nodes_on_single_node() {
    let graph: Graph<u8, ()> = Graph::builder().node(Node::new(0, ())).build().unwrap();
    let paths = graph.all_paths_with_all_nodes();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_empty());
}

#[test]
fn test_all_paths_simple_walks() {
    let graph = square();
    let paths = graph
        .all_paths(&'a', &'c', |node, path| !path.contains_node(node))
        .unwrap();
    let mut routes: Vec<String> = paths
        .iter()
        .map(|p| p.nodes().iter().map(|n| *n.id()).collect())
        .collect();
    routes.sort();
    assert_eq!(routes, vec!["abc".to_string(), "adc".to_string()]);
}

#[test]
fn test_all_paths_stops_at_end() {
    let graph = square();
    // Revisits are allowed but nothing continues past 'b'.
    let paths = graph
        .all_paths(&'a', &'b', |node, path| *node.id() != 'd' && path.len() < 4)
        .unwrap();
    assert!(paths.iter().all(|p| p.end().id() == &'b'));
    assert!(paths.iter().all(|p| p.nodes().iter().filter(|n| n.id() == &'b').count() == 1));
}

#[test]
fn test_map_values_keeps_topology() {
    let graph = square();
    let doubled = graph.map_values(|v| v * 2);
    assert_eq!(doubled.node(&'c').unwrap().data(), &6);
    assert_eq!(doubled.links().len(), 4);
    assert_eq!(doubled.links()[1].to().data(), &6);
    assert_eq!(doubled.shortest_path(&'a', &'d').unwrap().unwrap().weight(), 3);
}

#[test]
fn test_map_nodes_reweights() {
    let graph = square();
    let heavy_b = graph
        .map_nodes(|node| {
            let weight = if *node.id() == 'b' { 100 } else { 0 };
            Node::with_weight(*node.id(), (), weight)
        })
        .unwrap();
    // The detour through 'b' now costs more than the shortcut.
    assert_eq!(heavy_b.shortest_path(&'a', &'d').unwrap().unwrap().weight(), 10);
}

#[test]
fn test_map_nodes_rejects_colliding_ids() {
    let graph = square();
    let result = graph.map_nodes(|node| Node::new('x', *node.data()));
    assert!(matches!(result, Err(GraphError::DuplicateNode(_))));
}

#[test]
fn test_debug_lists_ids_and_links() {
    let graph = Graph::from_links([Link::with_weight(Node::new('a', ()), Node::new('b', ()), 3)]);
    assert_eq!(format!("{:?}", graph), "Graph { nodes: ['a', 'b'], links: [('a', 'b', 3)] }");
}
