use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use hexpath::config::RandomizeConfig;
use hexpath::randomize::{
    randomize_obstacles, randomize_scenario, randomize_weights, randomize_weights_range,
};
use hexpath::Grid;

fn grid_of(size: i32, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::generate(size, 100.0, &mut rng).unwrap()
}

fn obstacle_flags(grid: &Grid) -> Vec<bool> {
    grid.tiles.iter().map(|t| t.is_obstacle).collect()
}

#[test]
fn test_chance_one_blocks_everything_chance_zero_clears_it() {
    let mut grid = grid_of(5, 1);
    let mut rng = StdRng::seed_from_u64(2);
    let none = HashSet::new();

    randomize_obstacles(&mut grid, &mut rng, 1.0, &none).unwrap();
    assert!(grid.tiles.iter().all(|t| t.is_obstacle));
    assert!(
        grid.tiles.iter().all(|t| t.neighbors.is_empty()),
        "all-obstacle grid leaves no neighbor entries"
    );

    // a second pass redraws every flag, so obstacles from the first pass clear
    randomize_obstacles(&mut grid, &mut rng, 0.0, &none).unwrap();
    assert!(grid.tiles.iter().all(|t| !t.is_obstacle));
    let corner = grid.tile(grid.index_at(0, 0).unwrap()).unwrap();
    assert_eq!(corner.neighbors.len(), 2, "lists rebuilt after clearing");
}

#[test]
fn test_excluded_tiles_keep_their_state() {
    let mut grid = grid_of(5, 3);
    let mut rng = StdRng::seed_from_u64(4);

    let kept_wall = grid.index_at(1, 1).unwrap();
    let kept_open = grid.index_at(3, 3).unwrap();
    grid.set_obstacle(kept_wall, true);
    let exclude: HashSet<i32> = [kept_wall, kept_open].into_iter().collect();

    randomize_obstacles(&mut grid, &mut rng, 1.0, &exclude).unwrap();
    assert!(grid.tile(kept_wall).unwrap().is_obstacle, "excluded wall kept");
    assert!(!grid.tile(kept_open).unwrap().is_obstacle, "excluded open tile kept");

    randomize_obstacles(&mut grid, &mut rng, 0.0, &exclude).unwrap();
    assert!(
        grid.tile(kept_wall).unwrap().is_obstacle,
        "exclusion also shields from clearing"
    );
}

#[test]
fn test_invalid_chance_rejected_before_any_change() {
    let mut grid = grid_of(4, 5);
    let mut rng = StdRng::seed_from_u64(6);
    let before = obstacle_flags(&grid);
    let none = HashSet::new();

    assert!(randomize_obstacles(&mut grid, &mut rng, 1.5, &none).is_err());
    assert!(randomize_obstacles(&mut grid, &mut rng, -0.1, &none).is_err());
    assert_eq!(obstacle_flags(&grid), before, "failed call left flags alone");
}

#[test]
fn test_seeded_scatter_is_reproducible() {
    let mut grid_a = grid_of(6, 7);
    let mut grid_b = grid_of(6, 7);
    let none = HashSet::new();

    let mut rng_a = StdRng::seed_from_u64(8);
    let mut rng_b = StdRng::seed_from_u64(8);
    randomize_obstacles(&mut grid_a, &mut rng_a, 0.3, &none).unwrap();
    randomize_obstacles(&mut grid_b, &mut rng_b, 0.3, &none).unwrap();

    assert_eq!(obstacle_flags(&grid_a), obstacle_flags(&grid_b));
}

#[test]
fn test_weight_randomization_ranges() {
    let mut grid = grid_of(5, 9);
    let mut rng = StdRng::seed_from_u64(10);

    randomize_weights(&mut grid, &mut rng);
    for tile in &grid.tiles {
        assert!(
            tile.weight >= 1.0 && tile.weight <= 5.0,
            "tile {} drew weight {}",
            tile.instance_index,
            tile.weight
        );
    }

    randomize_weights_range(&mut grid, &mut rng, 2.0, 2.0).unwrap();
    assert!(grid.tiles.iter().all(|t| t.weight == 2.0));

    assert!(randomize_weights_range(&mut grid, &mut rng, 0.0, 5.0).is_err());
    assert!(randomize_weights_range(&mut grid, &mut rng, -1.0, 5.0).is_err());
    assert!(randomize_weights_range(&mut grid, &mut rng, 3.0, 2.0).is_err());
}

#[test]
fn test_scenario_roll_respects_config() {
    let mut grid = grid_of(4, 11);
    let mut rng = StdRng::seed_from_u64(12);
    let config = RandomizeConfig::default();

    let scenario = randomize_scenario(&mut grid, &mut rng, &config).unwrap();

    assert!(
        grid.size >= config.size_min && grid.size <= config.size_max,
        "rolled size {} outside {}..={}",
        grid.size,
        config.size_min,
        config.size_max
    );
    assert_ne!(scenario.start_index, scenario.goal_index);
    let start = grid.tile(scenario.start_index).expect("start exists");
    let goal = grid.tile(scenario.goal_index).expect("goal exists");
    assert!(!start.is_obstacle, "start stays walkable");
    assert!(!goal.is_obstacle, "goal stays walkable");
}

#[test]
fn test_scenario_roll_reproducible_from_seed() {
    let config = RandomizeConfig::default();

    let mut grid_a = grid_of(4, 13);
    let mut rng_a = StdRng::seed_from_u64(14);
    let scenario_a = randomize_scenario(&mut grid_a, &mut rng_a, &config).unwrap();

    let mut grid_b = grid_of(4, 13);
    let mut rng_b = StdRng::seed_from_u64(14);
    let scenario_b = randomize_scenario(&mut grid_b, &mut rng_b, &config).unwrap();

    assert_eq!(scenario_a, scenario_b);
    assert_eq!(grid_a.size, grid_b.size);
    assert_eq!(obstacle_flags(&grid_a), obstacle_flags(&grid_b));
}

#[test]
fn test_scenario_rejects_bad_config() {
    let mut grid = grid_of(4, 15);
    let mut rng = StdRng::seed_from_u64(16);

    let mut config = RandomizeConfig::default();
    config.size_min = 1;
    assert!(randomize_scenario(&mut grid, &mut rng, &config).is_err());

    let mut config = RandomizeConfig::default();
    config.size_min = 8;
    config.size_max = 5;
    assert!(randomize_scenario(&mut grid, &mut rng, &config).is_err());

    let mut config = RandomizeConfig::default();
    config.obstacle_chance = 2.0;
    assert!(randomize_scenario(&mut grid, &mut rng, &config).is_err());

    assert_eq!(grid.size, 4, "rejected rolls leave the grid untouched");
}
