use anyhow::Context;
use weighted_digraph::algo::{bfs, dfs, dfs_search_values, shortest_path_with};
use weighted_digraph::{GraphStore, ListLoader, MatrixLoader, PathStrategy};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Weighted Digraph v{}", weighted_digraph::version());
    println!("==========================================");
    println!();

    demo_traversal()?;
    demo_shortest_path()?;
    demo_matrix()?;

    Ok(())
}

/// Road network used by the demos
fn road_network() -> anyhow::Result<GraphStore<&'static str, u32>> {
    let loader = ListLoader::from_adjacency(vec![
        ("s", vec![("A", 1), ("D", 4), ("G", 6)]),
        ("A", vec![("B", 2), ("E", 2)]),
        ("B", vec![("C", 2)]),
        ("C", vec![("t", 4)]),
        ("D", vec![("A", 3), ("E", 3)]),
        ("E", vec![("C", 2), ("F", 3), ("I", 3)]),
        ("F", vec![("C", 1), ("t", 3)]),
        ("G", vec![("D", 2), ("E", 1), ("H", 6)]),
        ("H", vec![("E", 2), ("I", 6)]),
        ("I", vec![("F", 1), ("t", 4)]),
        ("t", vec![]),
    ])
    .context("building road network")?;

    Ok(GraphStore::from_loader(&loader))
}

fn demo_traversal() -> anyhow::Result<()> {
    println!("=== Demo 1: Traversal ===");
    let store = road_network()?;
    let s = store.find_node(&"s");

    let depth: Vec<&str> = dfs(&store, s)
        .map(|n| n.map(|n| *n.value()))
        .collect::<Result<_, _>>()?;
    println!("DFS from s: {}", depth.join(" "));

    let breadth: Vec<&str> = bfs(&store, s)
        .map(|n| n.map(|n| *n.value()))
        .collect::<Result<_, _>>()?;
    println!("BFS from s: {}", breadth.join(" "));

    let search: Vec<&str> = dfs_search_values(&store, &"s", &"t")
        .map(|n| n.map(|n| *n.value()))
        .collect::<Result<_, _>>()?;
    println!("DFS search s -> t: {}", search.join(" "));
    println!();
    Ok(())
}

fn demo_shortest_path() -> anyhow::Result<()> {
    println!("=== Demo 2: Shortest Path ===");
    let store = road_network()?;
    let s = store.find_node(&"s");
    let t = store.find_node(&"t");

    for strategy in [PathStrategy::Worklist, PathStrategy::PriorityQueue] {
        let result = shortest_path_with(&store, s, t, strategy)?;
        let route: Vec<&str> = result.nodes().iter().map(|n| *n.value()).collect();
        println!(
            "{:?}: {} (weight {})",
            strategy,
            route.join(" -> "),
            result.weight
        );
    }
    println!();
    Ok(())
}

fn demo_matrix() -> anyhow::Result<()> {
    println!("=== Demo 3: Matrix Loader ===");
    let loader = MatrixLoader::from_values(
        ["x", "y", "z"],
        vec![
            vec![0.0, 1.5, 0.0],
            vec![0.0, 0.0, 2.5],
            vec![0.5, 0.0, 0.0],
        ],
    )
    .context("building matrix graph")?;
    let store = GraphStore::from_loader(&loader);

    println!("✓ {} nodes, {} edges", store.node_count(), store.edge_count());
    for edge in store.edges() {
        println!("  {} -> {} ({})", edge.from().value(), edge.to().value(), edge.weight());
    }
    Ok(())
}
