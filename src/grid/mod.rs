//! Grid cell providers supplying identity, serialization and neighbor topology
//!
//! This module contains:
//! - The provider contract consumed by floor building and exploration
//! - An H3 hexagonal grid provider
//! - An explicit adjacency-list provider for hand-built graphs

/// Explicit adjacency-list grid
pub mod adjacency;
/// H3 hexagonal grid backed by `h3o`
pub mod h3;

pub use adjacency::AdjacencyGrid;
pub use h3::H3Grid;

use std::fmt::Debug;
use std::hash::Hash;

/// Source of grid cells and their neighbor topology
///
/// Implementations must be deterministic: the same cell always serializes to
/// the same string and yields neighbors in the same order. Exploration calls
/// the provider through a shared reference from a single thread; running
/// explorations concurrently is only sound when the provider's reads are
/// themselves safe to share.
pub trait GridProvider {
    /// Stable, totally ordered cell identity usable as a map key
    type Cell: Copy + Ord + Hash + Debug;

    /// Error raised for cells the provider cannot resolve
    type Error: std::error::Error + Send + Sync + 'static;

    /// Canonical string form of a cell
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` is not a valid identity for this grid
    fn serialize(&self, cell: Self::Cell) -> Result<String, Self::Error>;

    /// Adjacent cells in canonical edge order
    ///
    /// The position of each cell in the returned list is its edge index.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` is not a valid identity for this grid
    fn directed_neighbors(&self, cell: Self::Cell) -> Result<Vec<Self::Cell>, Self::Error>;
}
