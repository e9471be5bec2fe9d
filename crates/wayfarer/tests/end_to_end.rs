//! End-to-end scenarios across the whole framework.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wayfarer::config::LocalSearchConfig;
use wayfarer::local::RandomRestart;
use wayfarer::search::{AStarTree, BreadthFirstTree, DepthFirstGraph};
use wayfarer::State;
use wayfarer_test::queens::{ClashCountHeuristic, QueensState};
use wayfarer_test::route::{GlobalDistanceHeuristic, RouteWorld};
use wayfarer_test::sliding::{ManhattanDistanceHeuristic, SlidingState};

#[test]
fn all_path_engines_solve_the_same_scramble() {
    wayfarer_test::init_test_logging();

    let mut rng = ChaCha8Rng::seed_from_u64(101);
    let scrambled = SlidingState::solved(3, 3).unwrap().scramble(&mut rng, 5);

    let bfs = BreadthFirstTree::new(scrambled.clone())
        .run()
        .into_goal()
        .unwrap();
    let astar = AStarTree::new(scrambled.clone(), ManhattanDistanceHeuristic)
        .run()
        .into_goal()
        .unwrap();
    let dfs = DepthFirstGraph::new(scrambled).run().into_goal().unwrap();

    // Breadth-first and A* are both cost-optimal here; depth-first only
    // promises to find some goal.
    assert_eq!(bfs.cost(), astar.cost());
    assert!(dfs.cost() >= astar.cost());
    assert!(dfs.state().is_goal());
}

#[test]
fn astar_traverses_a_route_world() {
    let mut rng = ChaCha8Rng::seed_from_u64(103);
    let world = RouteWorld::random_grid(&mut rng, 5, 5, 8.0).unwrap();
    let heuristic = GlobalDistanceHeuristic::for_world(&world).unwrap();

    let outcome = AStarTree::new(world.state_at(0), heuristic).run();
    let goal = outcome.into_goal().expect("grid worlds are connected");

    let path = goal.path();
    assert!(path.first().is_some());
    assert!(path.last().map(|state| state.is_goal()).unwrap_or(false));
    assert_eq!(path.len(), goal.depth() + 1);
}

#[test]
fn config_driven_restart_solves_eight_queens() {
    let config = LocalSearchConfig::from_toml_str(
        r#"
        random_seed = 107
        max_plateau_moves = 100

        [strategy]
        type = "steepest_ascent"

        [restart]
        quality_margin = 0.0
        "#,
    )
    .unwrap();

    let mut restart = RandomRestart::new(ClashCountHeuristic, &config);
    let solved = restart
        .run(|rng| QueensState::random(rng, 8))
        .expect("an uncapped search always makes at least one run");

    assert_eq!(solved.count_clashes(), 0);
}
