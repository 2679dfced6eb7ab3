use std::collections::HashMap;

use rand::Rng;

use crate::hex::{self, WorldPos};
use crate::node::{TileNode, WEIGHT_MAX, WEIGHT_MIN};

/// N×N hexagonal tile grid with per-tile weights and obstacle flags.
///
/// Tiles live in one arena vec; neighbor lists and parent pointers are slots
/// into that vec. Instance indices are the external handles: they are assigned
/// column by column (`x * size + y`) so they line up with the order in which
/// `placements()` reports tiles.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Tiles per row and per column
    pub size: i32,
    /// Distance from a hex center to its corners; fixes the world-space spacing
    pub hex_radius: f32,
    /// Tile arena; every cross-reference in the grid is a slot in here
    pub tiles: Vec<TileNode>,
    /// Instance index -> arena slot
    node_map: HashMap<i32, usize>,
    /// Midpoint of the bounding box of all tile positions
    center: WorldPos,
}

impl Grid {
    /// Build an n×n grid. Tiles get world positions from the hex layout,
    /// sequential instance indices in column-major order and a random starting
    /// weight. Neighbor lists are linked in a second pass once every tile
    /// exists.
    pub fn generate(size: i32, hex_radius: f32, rng: &mut impl Rng) -> Result<Grid, String> {
        if size <= 0 {
            return Err(format!("grid size must be positive, got {}", size));
        }
        if hex_radius <= 0.0 {
            return Err(format!("hex radius must be positive, got {}", hex_radius));
        }

        let total = (size * size) as usize;
        let mut tiles = Vec::with_capacity(total);
        let mut node_map = HashMap::with_capacity(total);
        let mut min = WorldPos::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = WorldPos::new(f32::MIN, f32::MIN, f32::MIN);

        for x in 0..size {
            for y in 0..size {
                let position = hex::tile_position(x, y, hex_radius);
                min.x = min.x.min(position.x);
                min.y = min.y.min(position.y);
                min.z = min.z.min(position.z);
                max.x = max.x.max(position.x);
                max.y = max.y.max(position.y);
                max.z = max.z.max(position.z);

                let instance_index = x * size + y;
                let weight = rng.gen_range(WEIGHT_MIN..=WEIGHT_MAX);
                node_map.insert(instance_index, tiles.len());
                tiles.push(TileNode::new(x, y, position, instance_index, weight));
            }
        }

        let center = WorldPos::new(
            (min.x + max.x) * 0.5,
            (min.y + max.y) * 0.5,
            (min.z + max.z) * 0.5,
        );

        let mut grid = Grid {
            size,
            hex_radius,
            tiles,
            node_map,
            center,
        };
        grid.build_neighbors();
        Ok(grid)
    }

    /// Throw the current tiles away and rebuild at a new size, keeping the
    /// hex radius. Instance indices from before the call go stale; lookups
    /// with them simply miss.
    pub fn regenerate(&mut self, size: i32, rng: &mut impl Rng) -> Result<(), String> {
        *self = Grid::generate(size, self.hex_radius, rng)?;
        Ok(())
    }

    /// Recompute every tile's cached neighbor list from the current obstacle
    /// flags. Lists are built for obstacle tiles too; only membership is
    /// filtered.
    pub fn build_neighbors(&mut self) {
        for slot in 0..self.tiles.len() {
            let list = self.walkable_neighbors(slot);
            self.tiles[slot].neighbors = list;
        }
    }

    /// Slots of the walkable tiles adjacent to `slot`, in canonical offset order
    fn walkable_neighbors(&self, slot: usize) -> Vec<usize> {
        let x = self.tiles[slot].grid_x;
        let y = self.tiles[slot].grid_y;
        let mut list = Vec::with_capacity(6);
        for &(dx, dy) in hex::neighbor_offsets(y) {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || nx >= self.size || ny < 0 || ny >= self.size {
                continue;
            }
            let neighbor = self.slot_at(nx, ny);
            if !self.tiles[neighbor].is_obstacle {
                list.push(neighbor);
            }
        }
        list
    }

    /// Arena slot for in-bounds coordinates; column-major like the indices
    fn slot_at(&self, x: i32, y: i32) -> usize {
        (x * self.size + y) as usize
    }

    /// Instance index of the tile at (x, y), if the coordinates are in bounds
    pub fn index_at(&self, x: i32, y: i32) -> Option<i32> {
        if x < 0 || x >= self.size || y < 0 || y >= self.size {
            return None;
        }
        Some(x * self.size + y)
    }

    /// Arena slot behind an instance index
    pub fn slot_of(&self, instance_index: i32) -> Option<usize> {
        self.node_map.get(&instance_index).copied()
    }

    /// Tile behind an instance index
    pub fn tile(&self, instance_index: i32) -> Option<&TileNode> {
        self.slot_of(instance_index).map(|slot| &self.tiles[slot])
    }

    /// Mutable tile behind an instance index
    pub fn tile_mut(&mut self, instance_index: i32) -> Option<&mut TileNode> {
        match self.slot_of(instance_index) {
            Some(slot) => Some(&mut self.tiles[slot]),
            None => None,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Midpoint of the grid's bounding box, e.g. for aiming a camera
    pub fn center(&self) -> WorldPos {
        self.center
    }

    /// Every instance index currently alive, in ascending order
    pub fn instance_indices(&self) -> Vec<i32> {
        let mut indices: Vec<i32> = self.node_map.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// (instance index, world position) pairs in index order, the shape a
    /// renderer wants for instanced placement
    pub fn placements(&self) -> Vec<(i32, WorldPos)> {
        self.tiles
            .iter()
            .map(|tile| (tile.instance_index, tile.world_position))
            .collect()
    }

    /// Set or clear a tile's obstacle flag and repair the cached neighbor
    /// lists around it. Unknown indices are ignored: stale handles are routine
    /// right after a regeneration.
    pub fn set_obstacle(&mut self, instance_index: i32, obstacle: bool) {
        let slot = match self.slot_of(instance_index) {
            Some(slot) => slot,
            None => return,
        };
        if self.tiles[slot].is_obstacle == obstacle {
            return;
        }
        self.tiles[slot].is_obstacle = obstacle;

        // Only the geometrically adjacent tiles can list this one, so only
        // their caches need recomputing. Adjacency is symmetric across the
        // two offset tables.
        let x = self.tiles[slot].grid_x;
        let y = self.tiles[slot].grid_y;
        for &(dx, dy) in hex::neighbor_offsets(y) {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || nx >= self.size || ny < 0 || ny >= self.size {
                continue;
            }
            let neighbor = self.slot_at(nx, ny);
            let list = self.walkable_neighbors(neighbor);
            self.tiles[neighbor].neighbors = list;
        }
    }

    /// Update a tile's traversal weight. Any positive value is accepted;
    /// values below 1.0 make the straight-line heuristic inadmissible, which
    /// the pathfinder tolerates at the price of optimality. Unknown indices
    /// are ignored.
    pub fn set_weight(&mut self, instance_index: i32, weight: f32) -> Result<(), String> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(format!("tile weight must be positive, got {}", weight));
        }
        if let Some(tile) = self.tile_mut(instance_index) {
            tile.weight = weight;
        }
        Ok(())
    }
}
