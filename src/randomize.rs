use std::collections::HashSet;

use rand::Rng;

use crate::config::RandomizeConfig;
use crate::grid::Grid;
use crate::node::{WEIGHT_MAX, WEIGHT_MIN};

/// Start and goal picked by a scenario roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub start_index: i32,
    pub goal_index: i32,
}

/// Re-draw the obstacle flag of every tile: obstacle iff a uniform draw lands
/// under `chance`. Tiles whose index is in `exclude` (typically the current
/// start and goal) are skipped and keep whatever flag they had. Tiles that
/// were obstacles before and miss the draw this time become walkable again.
pub fn randomize_obstacles(
    grid: &mut Grid,
    rng: &mut impl Rng,
    chance: f32,
    exclude: &HashSet<i32>,
) -> Result<(), String> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(format!(
            "obstacle chance must be within [0, 1], got {}",
            chance
        ));
    }
    for index in grid.instance_indices() {
        if exclude.contains(&index) {
            continue;
        }
        let obstacle = rng.gen::<f32>() < chance;
        grid.set_obstacle(index, obstacle);
    }
    Ok(())
}

/// Give every tile a fresh uniform weight in the conventional [1.0, 5.0] range
pub fn randomize_weights(grid: &mut Grid, rng: &mut impl Rng) {
    draw_weights(grid, rng, WEIGHT_MIN, WEIGHT_MAX);
}

/// Same as `randomize_weights` with a caller-chosen range
pub fn randomize_weights_range(
    grid: &mut Grid,
    rng: &mut impl Rng,
    min: f32,
    max: f32,
) -> Result<(), String> {
    if !min.is_finite() || min <= 0.0 {
        return Err(format!("weight range minimum must be positive, got {}", min));
    }
    if !max.is_finite() || max < min {
        return Err(format!(
            "weight range maximum must be at least the minimum, got {}",
            max
        ));
    }
    draw_weights(grid, rng, min, max);
    Ok(())
}

fn draw_weights(grid: &mut Grid, rng: &mut impl Rng, min: f32, max: f32) {
    for tile in grid.tiles.iter_mut() {
        tile.weight = rng.gen_range(min..=max);
    }
}

/// Roll a whole exercise in one go: rebuild the grid at a random size within
/// the configured span, pick two distinct tiles as start and goal, then
/// scatter obstacles everywhere else. Start and goal stay walkable.
pub fn randomize_scenario(
    grid: &mut Grid,
    rng: &mut impl Rng,
    config: &RandomizeConfig,
) -> Result<Scenario, String> {
    if config.size_min < 2 {
        return Err(format!(
            "scenario grids need at least 2 tiles for distinct start and goal, size_min is {}",
            config.size_min
        ));
    }
    if config.size_max < config.size_min {
        return Err(format!(
            "scenario size range is inverted: {}..{}",
            config.size_min, config.size_max
        ));
    }
    if !(0.0..=1.0).contains(&config.obstacle_chance) {
        return Err(format!(
            "obstacle chance must be within [0, 1], got {}",
            config.obstacle_chance
        ));
    }

    let size = rng.gen_range(config.size_min..=config.size_max);
    grid.regenerate(size, rng)?;

    let total = size * size;
    let start_index = rng.gen_range(0..total);
    let mut goal_index = rng.gen_range(0..total);
    while goal_index == start_index {
        goal_index = rng.gen_range(0..total);
    }

    let exclude: HashSet<i32> = [start_index, goal_index].into_iter().collect();
    randomize_obstacles(grid, rng, config.obstacle_chance, &exclude)?;

    Ok(Scenario {
        start_index,
        goal_index,
    })
}
