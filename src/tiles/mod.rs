//! Tile data structures and neighbor expansion
//!
//! This module contains tile-related functionality including:
//! - Ordered-attribute tiles and their similarity metric
//! - Floors: an anchor tile with its scored grid neighbors

/// Neighbor expansion of grid tiles
pub mod floor;
/// Ordered-attribute tiles and quantized similarity
pub mod tile;

pub use floor::{CellTile, Floor, Neighbor};
pub use tile::{Similarity, Tile};
