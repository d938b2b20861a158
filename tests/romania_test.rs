//! Searches over the classic Romania road map.

use searchtrace::{
    comparison_rows, path_cost, rank, run, AdjacencyGraph, EdgeDirection, StrategyKind,
    TableHeuristic,
};

fn romania() -> AdjacencyGraph<&'static str> {
    let mut g = AdjacencyGraph::new();
    for (a, b, km) in [
        ("Arad", "Zerind", 75),
        ("Arad", "Sibiu", 140),
        ("Arad", "Timisoara", 118),
        ("Zerind", "Oradea", 71),
        ("Oradea", "Sibiu", 151),
        ("Timisoara", "Lugoj", 111),
        ("Lugoj", "Mehadia", 70),
        ("Mehadia", "Drobeta", 75),
        ("Drobeta", "Craiova", 120),
        ("Craiova", "RimnicuVilcea", 146),
        ("Craiova", "Pitesti", 138),
        ("Sibiu", "Fagaras", 99),
        ("Sibiu", "RimnicuVilcea", 80),
        ("RimnicuVilcea", "Pitesti", 97),
        ("Fagaras", "Bucharest", 211),
        ("Pitesti", "Bucharest", 101),
        ("Bucharest", "Giurgiu", 90),
        ("Bucharest", "Urziceni", 85),
        ("Urziceni", "Hirsova", 98),
        ("Hirsova", "Eforie", 86),
        ("Urziceni", "Vaslui", 142),
        ("Vaslui", "Iasi", 92),
        ("Iasi", "Neamt", 87),
    ] {
        g.add_edge(a, b, km, EdgeDirection::Undirected).unwrap();
    }
    g
}

/// Straight-line distances to Bucharest; admissible for the road map.
fn sld_to_bucharest() -> TableHeuristic<&'static str> {
    [
        ("Arad", 366),
        ("Bucharest", 0),
        ("Craiova", 160),
        ("Drobeta", 242),
        ("Eforie", 161),
        ("Fagaras", 176),
        ("Giurgiu", 77),
        ("Hirsova", 151),
        ("Iasi", 226),
        ("Lugoj", 244),
        ("Mehadia", 241),
        ("Neamt", 234),
        ("Oradea", 380),
        ("Pitesti", 100),
        ("RimnicuVilcea", 193),
        ("Sibiu", 253),
        ("Timisoara", 329),
        ("Urziceni", 80),
        ("Vaslui", 199),
        ("Zerind", 374),
    ]
    .into_iter()
    .collect()
}

#[test]
fn a_star_arad_to_bucharest_is_optimal() {
    let g = romania();
    let h = sld_to_bucharest();
    let r = run(&g, Some(&h), "Arad", "Bucharest", StrategyKind::AStar).unwrap();
    assert!(r.success);
    assert_eq!(
        r.path,
        vec!["Arad", "Sibiu", "RimnicuVilcea", "Pitesti", "Bucharest"]
    );
    assert_eq!(r.total_cost, 418);
}

#[test]
fn uniform_cost_matches_a_star_cost() {
    let g = romania();
    let r = run(&g, None, "Arad", "Bucharest", StrategyKind::UniformCost).unwrap();
    assert_eq!(r.total_cost, 418);
    assert_eq!(
        r.path,
        vec!["Arad", "Sibiu", "RimnicuVilcea", "Pitesti", "Bucharest"]
    );
}

#[test]
fn a_star_expands_no_more_than_uniform_cost() {
    let g = romania();
    let h = sld_to_bucharest();
    let astar = run(&g, Some(&h), "Arad", "Bucharest", StrategyKind::AStar).unwrap();
    let ucs = run(&g, None, "Arad", "Bucharest", StrategyKind::UniformCost).unwrap();
    assert!(astar.expanded <= ucs.expanded);
}

#[test]
fn greedy_takes_the_fagaras_shortcut() {
    let g = romania();
    let h = sld_to_bucharest();
    let r = run(&g, Some(&h), "Arad", "Bucharest", StrategyKind::GreedyBestFirst).unwrap();
    assert!(r.success);
    assert_eq!(r.path, vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
    assert_eq!(r.total_cost, 450);
}

#[test]
fn breadth_first_minimizes_edge_count() {
    let g = romania();
    let r = run(&g, None, "Arad", "Bucharest", StrategyKind::BreadthFirst).unwrap();
    assert!(r.success);
    // Three edges is the minimum; discovery order picks the Fagaras route
    assert_eq!(r.path, vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
}

#[test]
fn depth_first_path_is_valid() {
    let g = romania();
    let r = run(&g, None, "Arad", "Bucharest", StrategyKind::DepthFirst).unwrap();
    assert!(r.success);
    assert_eq!(path_cost(&g, &r.path), Some(r.total_cost));
}

#[test]
fn iterative_deepening_finds_a_minimum_depth_route() {
    let g = romania();
    let r = run(
        &g,
        None,
        "Arad",
        "Bucharest",
        StrategyKind::IterativeDeepening { max_depth: 10 },
    )
    .unwrap();
    assert!(r.success);
    assert_eq!(r.path.len(), 4);
    assert_eq!(path_cost(&g, &r.path), Some(r.total_cost));
    // Earlier iterations contribute to the accumulated totals
    let dls = run(&g, None, "Arad", "Bucharest", StrategyKind::DepthLimited { limit: 3 }).unwrap();
    assert!(r.expanded > dls.expanded);
}

#[test]
fn depth_limit_below_goal_depth_fails() {
    let g = romania();
    let r = run(
        &g,
        None,
        "Arad",
        "Bucharest",
        StrategyKind::DepthLimited { limit: 2 },
    )
    .unwrap();
    assert!(!r.success);
    assert!(r.path.is_empty());
}

#[test]
fn side_by_side_comparison_over_all_strategies() {
    let g = romania();
    let h = sld_to_bucharest();
    let results: Vec<_> = [
        StrategyKind::BreadthFirst,
        StrategyKind::DepthFirst,
        StrategyKind::UniformCost,
        StrategyKind::GreedyBestFirst,
        StrategyKind::AStar,
    ]
    .into_iter()
    .map(|kind| run(&g, Some(&h), "Arad", "Bucharest", kind).unwrap())
    .collect();

    let rows = comparison_rows(&results);
    assert_eq!(rows.len(), 5, "every strategy reaches Bucharest");
    for row in &rows {
        assert!(row.total_cost >= 418, "no strategy beats the optimum");
        assert!(row.path_len >= 4);
        assert!(row.expanded > 0);
    }

    let ranking = rank(&results);
    assert_eq!(ranking.len(), 5);
    assert!(ranking.windows(2).all(|w| w[0].1 >= w[1].1));
}
