pub mod action_log;
pub mod config;
pub mod grid;
pub mod hex;
pub mod node;
pub mod pathfinding;
pub mod randomize;

pub use grid::Grid;
pub use hex::WorldPos;
pub use node::TileNode;
pub use pathfinding::{find_path, PathStep};
pub use randomize::Scenario;
