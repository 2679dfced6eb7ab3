use crate::grid::Grid;
use crate::hex::WorldPos;

/// Tolerance under which two f-costs count as equal when ranking the frontier
pub const COST_EPSILON: f32 = 1e-4;

/// One step of a computed path, in the shape a renderer consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    pub instance_index: i32,
    pub world_position: WorldPos,
}

fn nearly_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= COST_EPSILON
}

/// Weighted A* over the tile graph.
///
/// Returns the tiles from start to goal inclusive, or an empty vec when either
/// index is unknown or no route survives the obstacles. Entering a neighbor
/// costs the euclidean distance between the two centers times the neighbor's
/// weight; with every weight at 1.0 that is plain shortest-path search.
///
/// The straight-line heuristic is admissible (and the result cheapest) while
/// all weights stay >= 1.0. Smaller positive weights are accepted and still
/// produce a valid path, just not necessarily the cheapest one.
///
/// Search scratch lives on the tiles and is reset up front, so the result
/// only depends on the grid state at call time. Frontier selection is a linear
/// scan: lowest f-cost wins, near-ties go to the lower h-cost, exact ties to
/// the tile that entered the frontier first.
pub fn find_path(grid: &mut Grid, start_index: i32, goal_index: i32) -> Vec<PathStep> {
    let (start, goal) = match (grid.slot_of(start_index), grid.slot_of(goal_index)) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return Vec::new(),
    };

    for tile in grid.tiles.iter_mut() {
        tile.reset_search();
    }

    let goal_pos = grid.tiles[goal].world_position;
    let start_pos = grid.tiles[start].world_position;
    grid.tiles[start].g_cost = 0.0;
    grid.tiles[start].h_cost = start_pos.distance(&goal_pos);

    let mut open: Vec<usize> = vec![start];
    let mut closed: Vec<bool> = vec![false; grid.tiles.len()];

    while !open.is_empty() {
        let mut best = 0;
        for i in 1..open.len() {
            let candidate = &grid.tiles[open[i]];
            let current = &grid.tiles[open[best]];
            let candidate_f = candidate.f_cost();
            let current_f = current.f_cost();
            if candidate_f < current_f
                || (nearly_equal(candidate_f, current_f) && candidate.h_cost < current.h_cost)
            {
                best = i;
            }
        }
        let current = open[best];

        if current == goal {
            return reconstruct(grid, goal);
        }

        // Plain remove keeps frontier insertion order, which the exact-tie
        // rule above relies on.
        open.remove(best);
        closed[current] = true;

        let current_pos = grid.tiles[current].world_position;
        let current_g = grid.tiles[current].g_cost;
        let neighbors = grid.tiles[current].neighbors.clone();
        for neighbor in neighbors {
            // Cached lists filter obstacles already; the flag is checked again
            // so a list gone stale can never route through a wall.
            if grid.tiles[neighbor].is_obstacle || closed[neighbor] {
                continue;
            }

            let neighbor_pos = grid.tiles[neighbor].world_position;
            let tentative_g =
                current_g + current_pos.distance(&neighbor_pos) * grid.tiles[neighbor].weight;
            if tentative_g < grid.tiles[neighbor].g_cost {
                let tile = &mut grid.tiles[neighbor];
                tile.g_cost = tentative_g;
                tile.h_cost = neighbor_pos.distance(&goal_pos);
                tile.parent = Some(current);
                if !open.contains(&neighbor) {
                    open.push(neighbor);
                }
            }
        }
    }

    Vec::new()
}

/// Follow parent pointers back from the goal and emit start-to-goal order
fn reconstruct(grid: &Grid, goal: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(slot) = cursor {
        let tile = &grid.tiles[slot];
        path.push(PathStep {
            instance_index: tile.instance_index,
            world_position: tile.world_position,
        });
        cursor = tile.parent;
    }
    path.reverse();
    path
}

/// Total weighted cost of a path: each step pays the distance from the
/// previous tile times the weight of the tile being entered
pub fn path_cost(grid: &Grid, path: &[PathStep]) -> f32 {
    let mut total = 0.0;
    for i in 1..path.len() {
        let previous = path[i - 1].world_position;
        if let Some(tile) = grid.tile(path[i].instance_index) {
            total += previous.distance(&tile.world_position) * tile.weight;
        }
    }
    total
}

/// Format a path's instance indices for display
pub fn format_path(path: &[PathStep]) -> String {
    if path.is_empty() {
        return "no path".to_string();
    }
    let mut result = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&step.instance_index.to_string());
    }
    result
}
