/// Hex layout math for the pointy-top offset ("brick") tiling.
///
/// Tiles sit in N×N rows and columns; odd-numbered rows are staggered by half a
/// tile width, which is why the neighbor offset tables differ by row parity.

/// 3D world-space placement of a tile center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        WorldPos { x, y, z }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Spacing between tile centers within a row
pub fn horizontal_shift(hex_radius: f32) -> f32 {
    hex_radius * 3.0_f32.sqrt()
}

/// Spacing between row centerlines
pub fn vertical_shift(hex_radius: f32) -> f32 {
    hex_radius * 1.5
}

/// World position of the tile at column `x`, row `y`
pub fn tile_position(x: i32, y: i32, hex_radius: f32) -> WorldPos {
    let h = horizontal_shift(hex_radius);
    let v = vertical_shift(hex_radius);
    if y % 2 == 0 {
        WorldPos::new(h * x as f32, v * y as f32, 0.0)
    } else {
        // staggered row: shifted right by half a tile width
        WorldPos::new(h * x as f32 + h / 2.0, v * y as f32, 0.0)
    }
}

/// Neighbor offsets (dx, dy) for even-numbered rows, in canonical order.
/// The order is fixed: neighbor lists inherit it, and the pathfinder's
/// tie-breaking depends on it staying stable.
pub const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),  // same row, left
    (1, 0),   // same row, right
    (0, -1),  // previous row pair
    (-1, -1),
    (0, 1), // next row pair
    (-1, 1),
];

/// Neighbor offsets for odd-numbered (staggered) rows
pub const ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (1, -1),
    (0, 1),
    (1, 1),
];

/// Offset table matching the parity of row `y`
pub fn neighbor_offsets(y: i32) -> &'static [(i32, i32); 6] {
    if y % 2 == 0 {
        &EVEN_ROW_OFFSETS
    } else {
        &ODD_ROW_OFFSETS
    }
}
