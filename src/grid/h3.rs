//! H3 hexagonal grid provider
//!
//! Cells are raw 64-bit H3 indexes so that malformed identities can reach the
//! provider and be reported as provider failures. Serialization is the
//! canonical lowercase hexadecimal form, and neighbors follow the order of the
//! cell's directed edges (six for hexagons, five for pentagons).

use super::GridProvider;
use crate::io::error::{Result, invalid_parameter};
use h3o::CellIndex;
use h3o::error::InvalidCellIndex;

/// Stateless H3 grid
#[derive(Clone, Copy, Debug, Default)]
pub struct H3Grid;

impl H3Grid {
    /// Create the grid provider
    pub const fn new() -> Self {
        Self
    }

    /// All 122 resolution-0 cells, in index order
    ///
    /// This is the sample domain the simple tile function is classified over.
    pub fn base_cells() -> Vec<u64> {
        CellIndex::base_cells().map(u64::from).collect()
    }

    /// Parse a hexadecimal H3 index such as `8844d072a3fffff`
    ///
    /// # Errors
    ///
    /// Returns [`crate::TesseraError::InvalidParameter`] if `text` is not
    /// hexadecimal or does not name a valid cell
    pub fn parse_cell(text: &str) -> Result<u64> {
        let trimmed = text.trim().trim_start_matches("0x");
        let raw = u64::from_str_radix(trimmed, 16)
            .map_err(|err| invalid_parameter("cell", &text, &err))?;
        CellIndex::try_from(raw).map_err(|err| invalid_parameter("cell", &text, &err))?;
        Ok(raw)
    }

    fn resolve(cell: u64) -> std::result::Result<CellIndex, InvalidCellIndex> {
        CellIndex::try_from(cell)
    }
}

impl GridProvider for H3Grid {
    type Cell = u64;
    type Error = InvalidCellIndex;

    fn serialize(&self, cell: u64) -> std::result::Result<String, InvalidCellIndex> {
        Self::resolve(cell).map(|index| index.to_string())
    }

    fn directed_neighbors(&self, cell: u64) -> std::result::Result<Vec<u64>, InvalidCellIndex> {
        let index = Self::resolve(cell)?;
        Ok(index
            .edges()
            .map(|edge| u64::from(edge.destination()))
            .collect())
    }
}
