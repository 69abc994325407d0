//! Explicit adjacency-list grid
//!
//! Every cell carries a label, used as its serialization, and an ordered list
//! of neighbors whose positions are the edge indices. Useful for graphs whose
//! walks must be known in advance.

use super::GridProvider;
use std::collections::BTreeMap;

/// Lookup of a cell that was never inserted
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell {0} is not part of the grid")]
pub struct UnknownCell(pub u32);

#[derive(Clone, Debug)]
struct CellEntry {
    label: String,
    neighbors: Vec<u32>,
}

/// In-memory grid defined cell by cell
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGrid {
    cells: BTreeMap<u32, CellEntry>,
}

impl AdjacencyGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, or replace an existing one, with its label and ordered neighbors
    #[must_use]
    pub fn with_cell(mut self, cell: u32, label: impl Into<String>, neighbors: &[u32]) -> Self {
        self.insert(cell, label, neighbors);
        self
    }

    /// Add a cell, or replace an existing one, with its label and ordered neighbors
    pub fn insert(&mut self, cell: u32, label: impl Into<String>, neighbors: &[u32]) {
        self.cells.insert(
            cell,
            CellEntry {
                label: label.into(),
                neighbors: neighbors.to_vec(),
            },
        );
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell identities in ascending order
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.keys().copied()
    }

    fn entry(&self, cell: u32) -> Result<&CellEntry, UnknownCell> {
        self.cells.get(&cell).ok_or(UnknownCell(cell))
    }
}

impl GridProvider for AdjacencyGrid {
    type Cell = u32;
    type Error = UnknownCell;

    fn serialize(&self, cell: u32) -> Result<String, UnknownCell> {
        self.entry(cell).map(|entry| entry.label.clone())
    }

    fn directed_neighbors(&self, cell: u32) -> Result<Vec<u32>, UnknownCell> {
        self.entry(cell).map(|entry| entry.neighbors.clone())
    }
}
