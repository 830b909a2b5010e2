use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use weighted_digraph::algo::{
    bfs, bfs_from_value, bfs_search, bfs_search_values, dfs, dfs_from_value, dfs_search,
    dfs_search_values, shortest_path, shortest_path_with,
};
use weighted_digraph::{GraphConfig, GraphError, GraphStore, Node, PathStrategy};

const STRATEGIES: [PathStrategy; 2] = [PathStrategy::Worklist, PathStrategy::PriorityQueue];

/// Nodes s, A..I, t with 21 weighted edges
fn reference_graph() -> GraphStore<&'static str, u32> {
    let mut store = GraphStore::new();
    for name in ["s", "A", "B", "C", "D", "E", "F", "G", "H", "I", "t"] {
        store.add_node(name);
    }
    let edges = [
        ("s", "A", 1),
        ("s", "D", 4),
        ("s", "G", 6),
        ("A", "B", 2),
        ("A", "E", 2),
        ("B", "C", 2),
        ("C", "t", 4),
        ("D", "A", 3),
        ("D", "E", 3),
        ("E", "C", 2),
        ("E", "F", 3),
        ("E", "I", 3),
        ("F", "C", 1),
        ("F", "t", 3),
        ("G", "D", 2),
        ("G", "E", 1),
        ("G", "H", 6),
        ("H", "E", 2),
        ("H", "I", 6),
        ("I", "F", 1),
        ("I", "t", 4),
    ];
    for (from, to, weight) in edges {
        store.add_edge_by_value(&from, &to, weight).unwrap();
    }
    store
}

fn names<'a>(
    items: impl Iterator<Item = weighted_digraph::GraphResult<&'a Node<&'static str>>>,
) -> Vec<&'static str> {
    items.map(|n| *n.unwrap().value()).collect()
}

#[test]
fn test_reference_graph_shape() {
    let store = reference_graph();
    assert_eq!(store.node_count(), 11);
    assert_eq!(store.edge_count(), 21);
}

#[test]
fn test_traversals_cover_reachable_set_once() {
    let store = reference_graph();
    let s = store.find_node(&"s");

    for walk in [names(dfs(&store, s)), names(bfs(&store, s))] {
        assert_eq!(walk.len(), 11);
        assert_eq!(walk[0], "s");
        let unique: HashSet<_> = walk.iter().collect();
        assert_eq!(unique.len(), walk.len());
    }
}

#[test]
fn test_traversal_from_sink() {
    let store = reference_graph();
    let t = store.find_node(&"t");
    assert_eq!(names(dfs(&store, t)), vec!["t"]);
    assert_eq!(names(bfs(&store, t)), vec!["t"]);
}

#[test]
fn test_bfs_visits_by_hop_distance() {
    let store = reference_graph();
    let walk = names(bfs(&store, store.find_node(&"s")));

    // Direct successors of s come right after it, in insertion order
    assert_eq!(&walk[..4], &["s", "A", "D", "G"]);
}

#[test]
fn test_search_ends_at_target() {
    let store = reference_graph();
    let s = store.find_node(&"s");
    let t = store.find_node(&"t");

    for walk in [names(dfs_search(&store, s, t)), names(bfs_search(&store, s, t))] {
        assert_eq!(walk.first(), Some(&"s"));
        assert_eq!(walk.last(), Some(&"t"));
        let unique: HashSet<_> = walk.iter().collect();
        assert_eq!(unique.len(), walk.len());
    }

    // t is the furthest node by hops, so BFS sees everything
    assert_eq!(names(bfs_search(&store, s, t)).len(), 11);
}

#[test]
fn test_value_overloads_match_node_overloads() {
    let store = reference_graph();
    let e = store.find_node(&"E");
    let t = store.find_node(&"t");

    assert_eq!(names(dfs_from_value(&store, &"E")), names(dfs(&store, e)));
    assert_eq!(names(bfs_from_value(&store, &"E")), names(bfs(&store, e)));
    assert_eq!(
        names(dfs_search_values(&store, &"E", &"t")),
        names(dfs_search(&store, e, t))
    );
    assert_eq!(
        names(bfs_search_values(&store, &"E", &"t")),
        names(bfs_search(&store, e, t))
    );

    assert_eq!(dfs_from_value(&store, &"missing").count(), 0);
    assert_eq!(bfs_search_values(&store, &"s", &"missing").count(), 0);
}

#[test]
fn test_invalid_origin_fails_on_first_step() {
    let store = reference_graph();
    let stranger = Node::new("s");

    let mut walk = bfs(&store, Some(&stranger));
    assert_eq!(
        walk.next(),
        Some(Err(GraphError::InvalidOrigin(stranger.id())))
    );
    assert_eq!(walk.next(), None);

    let mut search = dfs_search(&store, Some(&stranger), store.find_node(&"t"));
    assert!(matches!(search.next(), Some(Err(GraphError::InvalidOrigin(_)))));
    assert!(search.next().is_none());
}

#[test]
fn test_traversal_stops_when_not_pulled() {
    let store = reference_graph();
    let first_two = names(dfs(&store, store.find_node(&"s")).take(2));
    assert_eq!(first_two.len(), 2);
    assert_eq!(first_two[0], "s");
}

#[test]
fn test_reference_shortest_path() {
    let store = reference_graph();
    let s = store.find_node(&"s");
    let t = store.find_node(&"t");

    for strategy in STRATEGIES {
        let result = shortest_path_with(&store, s, t, strategy).unwrap();
        let route: Vec<&str> = result.nodes().iter().map(|n| *n.value()).collect();

        assert!(result.reached);
        assert_eq!(result.weight, 9);
        assert_eq!(route.len(), 5);
        assert_eq!(route.first(), Some(&"s"));
        assert_eq!(route.last(), Some(&"t"));
    }
}

#[test]
fn test_path_weight_matches_edges() {
    let store = reference_graph();
    let result = shortest_path(&store, store.find_node(&"s"), store.find_node(&"t")).unwrap();

    // Sum the lightest edge between each consecutive pair
    let total: u32 = result
        .nodes()
        .windows(2)
        .map(|pair| {
            store
                .edges_from(Some(&pair[0]))
                .into_iter()
                .filter(|e| e.to() == &pair[1])
                .map(|e| *e.weight())
                .min()
                .unwrap()
        })
        .sum();
    assert_eq!(total, result.weight);
}

#[test]
fn test_configured_strategy_is_used() {
    let mut store: GraphStore<&str, u32> =
        GraphStore::with_config(GraphConfig::new().with_path_strategy(PathStrategy::PriorityQueue));
    let a = store.add_node("a");
    let b = store.add_node("b");
    store.add_edge(&a, &b, 7);

    assert_eq!(store.config().path_strategy, PathStrategy::PriorityQueue);
    let result = shortest_path(&store, Some(&a), Some(&b)).unwrap();
    assert_eq!(result.weight, 7);
}

#[test]
fn test_get_path_edge_cases() {
    let store = reference_graph();
    let s = store.find_node(&"s");
    let stranger = Node::new("t");

    let none = shortest_path(&store, None, s).unwrap();
    assert!(none.path.is_none());
    assert_eq!(none.weight, 0);

    assert_eq!(
        shortest_path(&store, s, Some(&stranger)).unwrap_err(),
        GraphError::InvalidPathTarget(stranger.id())
    );

    // Nothing leads back into s
    let back = shortest_path(&store, store.find_node(&"t"), s).unwrap();
    assert!(!back.reached);
    assert_eq!(back.len(), 1);
    assert_eq!(back.weight, 0);
}

#[test]
fn test_equal_values_are_visited_separately() {
    let mut store: GraphStore<char, u32> = GraphStore::new();
    let a1 = store.add_node('a');
    let a2 = store.add_node('a');
    let b = store.add_node('b');
    store.add_edge(&a1, &a2, 1);
    store.add_edge(&a2, &b, 1);

    for walk in [
        dfs(&store, Some(&a1)).collect::<Result<Vec<_>, _>>().unwrap(),
        bfs(&store, Some(&a1)).collect::<Result<Vec<_>, _>>().unwrap(),
    ] {
        let ids: Vec<_> = walk.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![a1.id(), a2.id(), b.id()]);
    }

    for strategy in STRATEGIES {
        let result = shortest_path_with(&store, Some(&a1), Some(&b), strategy).unwrap();
        assert_eq!(result.nodes(), &[a1.clone(), a2.clone(), b.clone()]);
        assert_eq!(result.weight, 2);
    }
}

#[test]
fn test_random_graphs_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let mut store: GraphStore<usize, u64> = GraphStore::new();
        let nodes: Vec<_> = (0..30).map(|i| store.add_node(i)).collect();
        for _ in 0..90 {
            let from = &nodes[rng.gen_range(0..nodes.len())];
            let to = &nodes[rng.gen_range(0..nodes.len())];
            store.add_edge(from, to, rng.gen_range(0..20));
        }

        let origin = &nodes[0];
        let reachable: HashSet<usize> = dfs(&store, Some(origin))
            .map(|n| *n.unwrap().value())
            .collect();
        let breadth: HashSet<usize> = bfs(&store, Some(origin))
            .map(|n| *n.unwrap().value())
            .collect();
        assert_eq!(reachable, breadth);

        for target in &nodes {
            let worklist =
                shortest_path_with(&store, Some(origin), Some(target), PathStrategy::Worklist)
                    .unwrap();
            let heap =
                shortest_path_with(&store, Some(origin), Some(target), PathStrategy::PriorityQueue)
                    .unwrap();

            assert_eq!(worklist.reached, reachable.contains(target.value()));
            assert_eq!(worklist.reached, heap.reached);
            assert_eq!(worklist.weight, heap.weight);
        }
    }
}
