use crate::hex::WorldPos;

/// Smallest traversal weight handed out by grid generation and the randomizers
pub const WEIGHT_MIN: f32 = 1.0;
/// Largest traversal weight handed out by grid generation and the randomizers
pub const WEIGHT_MAX: f32 = 5.0;

/// One cell of the hex grid.
///
/// Carries both the permanent tile state (coordinates, weight, obstacle flag,
/// cached neighbor list) and the per-search scratch the pathfinder writes
/// (g/h costs and the parent back-pointer).
#[derive(Debug, Clone)]
pub struct TileNode {
    /// Column within the grid
    pub grid_x: i32,
    /// Row within the grid
    pub grid_y: i32,
    /// World-space placement derived from (grid_x, grid_y)
    pub world_position: WorldPos,
    /// Stable handle callers use to address this tile
    pub instance_index: i32,
    /// Cost multiplier applied when a path enters this tile
    pub weight: f32,
    /// Obstacle tiles never appear in neighbor lists and never join a path
    pub is_obstacle: bool,
    /// Arena slots of adjacent walkable tiles, in canonical offset order
    pub neighbors: Vec<usize>,
    /// Cost of the best known route from the search start
    pub g_cost: f32,
    /// Straight-line distance to the search goal
    pub h_cost: f32,
    /// Arena slot of the tile this one was reached from, for path reconstruction
    pub parent: Option<usize>,
}

impl TileNode {
    pub fn new(
        grid_x: i32,
        grid_y: i32,
        world_position: WorldPos,
        instance_index: i32,
        weight: f32,
    ) -> Self {
        TileNode {
            grid_x,
            grid_y,
            world_position,
            instance_index,
            weight,
            is_obstacle: false,
            neighbors: Vec::new(),
            g_cost: f32::INFINITY,
            h_cost: f32::INFINITY,
            parent: None,
        }
    }

    /// Combined cost used to rank frontier tiles
    pub fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }

    /// Clear the search scratch ahead of a new query
    pub fn reset_search(&mut self) {
        self.g_cost = f32::INFINITY;
        self.h_cost = f32::INFINITY;
        self.parent = None;
    }
}
