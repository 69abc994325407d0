//! Neighbor expansion of a grid tile
//!
//! A floor is an anchor tile together with every adjacent tile the grid
//! provider reports, each scored against the anchor and tagged with the edge
//! index that reaches it.

use crate::grid::GridProvider;
use crate::io::error::{Result, provider_failure};
use crate::tiles::tile::{Similarity, Tile};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A tile derived from a grid cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellTile<C> {
    /// Identity of the underlying cell
    pub cell: C,
    /// Attributes derived from the cell's serialization
    pub tile: Tile<char>,
}

impl<C: Copy + std::fmt::Debug> CellTile<C> {
    /// Derive the tile of `cell`: one attribute per character of its serialization
    ///
    /// # Errors
    ///
    /// Returns [`crate::TesseraError::ProviderFailure`] if the provider cannot
    /// serialize the cell, or [`crate::TesseraError::InvalidState`] if the
    /// serialization is empty
    pub fn derive<G>(grid: &G, cell: C) -> Result<Self>
    where
        G: GridProvider<Cell = C>,
    {
        let text = grid
            .serialize(cell)
            .map_err(|err| provider_failure(&cell, err))?;
        Ok(Self {
            cell,
            tile: Tile::from_serialized(&text)?,
        })
    }

    /// Similarity between the tiles of two cells
    ///
    /// # Errors
    ///
    /// Returns [`crate::TesseraError::CardinalityMismatch`] if the tiles differ in length
    pub fn similarity(&self, other: &Self) -> Result<Similarity> {
        self.tile.similarity(&other.tile)
    }
}

/// A tile reached from an anchor along one provider edge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor<C> {
    /// The adjacent tile
    pub tile: CellTile<C>,
    /// Similarity between the anchor and this tile
    pub similarity: Similarity,
    /// Provider edge index, equal to the position in the floor
    pub edge_index: usize,
}

/// An anchor tile and its scored neighbors in edge order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor<C> {
    /// Tile the neighbors were expanded from
    pub anchor: CellTile<C>,
    /// Neighbors ordered by edge index
    pub neighbors: Vec<Neighbor<C>>,
}

impl<C: Copy + std::fmt::Debug> Floor<C> {
    /// Expand `anchor` into its scored neighbors
    ///
    /// # Errors
    ///
    /// Propagates provider failures and similarity errors from [`neighbors`]
    pub fn build<G>(grid: &G, anchor: CellTile<C>) -> Result<Self>
    where
        G: GridProvider<Cell = C>,
    {
        let neighbors = neighbors(grid, &anchor)?;
        Ok(Self { anchor, neighbors })
    }

    /// Neighbor reached through `edge_index`
    pub fn neighbor(&self, edge_index: usize) -> Option<&Neighbor<C>> {
        self.neighbors.get(edge_index)
    }
}

/// Score every neighbor of `anchor` in the provider's canonical edge order
///
/// # Errors
///
/// Returns [`crate::TesseraError::ProviderFailure`] if the provider cannot
/// enumerate or serialize cells, and [`crate::TesseraError::CardinalityMismatch`]
/// if a neighbor serializes to a different length than the anchor
pub fn neighbors<G>(grid: &G, anchor: &CellTile<G::Cell>) -> Result<Vec<Neighbor<G::Cell>>>
where
    G: GridProvider,
{
    let cells = grid
        .directed_neighbors(anchor.cell)
        .map_err(|err| provider_failure(&anchor.cell, err))?;

    let mut scored = Vec::with_capacity(cells.len());
    for (edge_index, cell) in cells.into_iter().enumerate() {
        let tile = CellTile::derive(grid, cell)?;
        let similarity = anchor.similarity(&tile)?;
        scored.push(Neighbor {
            tile,
            similarity,
            edge_index,
        });
    }

    trace!(anchor = ?anchor.cell, count = scored.len(), "built floor");
    Ok(scored)
}
