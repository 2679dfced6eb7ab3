use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use hexpath::pathfinding::{format_path, PathStep};
use hexpath::Grid;

/// Pathfinding fixture: a fully pinned grid plus the route it must produce
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioFixture {
    pub test_name: String,
    pub grid_size: i32,
    pub hex_radius: f32,
    /// Weight applied to every tile before the overrides
    pub default_weight: f32,
    #[serde(default)]
    pub weight_overrides: Vec<WeightOverride>,
    #[serde(default)]
    pub obstacles: Vec<i32>,
    pub start_index: i32,
    pub goal_index: i32,
    /// Expected tile sequence; empty means no path is expected
    pub expected_path: Vec<i32>,
    /// Expected weighted cost, checked when a path is expected
    pub expected_cost: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeightOverride {
    pub instance_index: i32,
    pub weight: f32,
}

/// Load a fixture from a JSON file
pub fn load_fixture(path: &Path) -> Result<ScenarioFixture, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let fixture: ScenarioFixture = serde_json::from_str(&contents)?;
    Ok(fixture)
}

/// Build the grid a fixture describes. Generation rolls random weights, so
/// every weight is pinned before obstacles go in.
pub fn build_fixture_grid(fixture: &ScenarioFixture) -> Grid {
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = Grid::generate(fixture.grid_size, fixture.hex_radius, &mut rng).unwrap();
    set_all_weights(&mut grid, fixture.default_weight);
    for entry in &fixture.weight_overrides {
        grid.set_weight(entry.instance_index, entry.weight).unwrap();
    }
    for &index in &fixture.obstacles {
        grid.set_obstacle(index, true);
    }
    grid
}

/// Pin every tile to the same weight
pub fn set_all_weights(grid: &mut Grid, weight: f32) {
    for index in grid.instance_indices() {
        grid.set_weight(index, weight).unwrap();
    }
}

/// ASCII view of a grid with a path overlaid. Odd rows are indented to hint
/// at the hex stagger.
pub fn visualize_path(grid: &Grid, path: &[PathStep], start_index: i32, goal_index: i32) -> String {
    let on_path: HashSet<i32> = path.iter().map(|step| step.instance_index).collect();
    let mut result = String::new();

    result.push_str(&format!("\nPath: {}\n", format_path(path)));
    result.push_str(&format!("Tiles: {}\n\n", path.len()));

    for y in 0..grid.size {
        if y % 2 == 1 {
            result.push(' ');
        }
        for x in 0..grid.size {
            let index = grid.index_at(x, y).unwrap();
            let tile = grid.tile(index).unwrap();
            let symbol = if index == start_index {
                'S'
            } else if index == goal_index {
                'G'
            } else if tile.is_obstacle {
                '#'
            } else if on_path.contains(&index) {
                '*'
            } else {
                '.'
            };
            result.push(symbol);
            result.push(' ');
        }
        result.push('\n');
    }

    result
}
