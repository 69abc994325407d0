//! Tests for the H3 grid provider

#[cfg(test)]
mod tests {
    use tessera::TesseraError;
    use tessera::explore::{Explorer, ExplorerState};
    use tessera::grid::{GridProvider, H3Grid};
    use tessera::tiles::{CellTile, Floor};

    const CELL: u64 = 0x0884_4d07_2a3f_ffff;

    // Tests the sample domain is the full set of resolution-0 cells
    // Verified by truncating the base cell list
    #[test]
    fn test_base_cells() {
        let cells = H3Grid::base_cells();
        assert_eq!(cells.len(), 122);

        let grid = H3Grid::new();
        for cell in cells {
            assert_eq!(grid.serialize(cell).unwrap().len(), 15);
        }
    }

    // Tests hexadecimal cells parse and malformed ones are rejected
    // Verified by accepting any hexadecimal number
    #[test]
    fn test_parse_cell() {
        assert_eq!(H3Grid::parse_cell("8844d072a3fffff").unwrap(), CELL);
        assert_eq!(H3Grid::parse_cell("0x8844d072a3fffff").unwrap(), CELL);

        for text in ["", "not-a-cell", "0", "ffffffffffffffff"] {
            assert!(matches!(
                H3Grid::parse_cell(text),
                Err(TesseraError::InvalidParameter { parameter: "cell", .. })
            ));
        }
    }

    // Tests neighbors are the cell's edge destinations and adjacency is symmetric
    // Verified by returning the cell itself among its neighbors
    #[test]
    fn test_neighbors_are_symmetric() {
        let grid = H3Grid::new();
        let neighbors = grid.directed_neighbors(CELL).unwrap();

        assert!((5..=6).contains(&neighbors.len()));
        assert!(!neighbors.contains(&CELL));
        for neighbor in neighbors {
            assert!(grid.directed_neighbors(neighbor).unwrap().contains(&CELL));
        }
    }

    // Tests floors over H3 compare serializations of equal length
    // Verified by mixing resolutions in the neighbor list
    #[test]
    fn test_floor_scores_every_edge() {
        let grid = H3Grid::new();
        let anchor = CellTile::derive(&grid, CELL).unwrap();
        let floor = Floor::build(&grid, anchor).unwrap();

        assert_eq!(floor.anchor.tile.cardinality(), 15);
        for (position, neighbor) in floor.neighbors.iter().enumerate() {
            assert_eq!(neighbor.edge_index, position);
            assert!(neighbor.similarity.as_f32() > 0.5);
        }
    }

    // Tests a walk over the real grid terminates within its budget
    // Verified by ignoring the step budget
    #[test]
    fn test_explore_h3() {
        let grid = H3Grid::new();
        let exploration = Explorer::new().with_max_steps(25).explore(&grid, CELL).unwrap();

        assert!(exploration.path.len() <= 25);
        if exploration.state == ExplorerState::Exhausted {
            assert_eq!(exploration.path.len(), 25);
        }
        assert!(exploration.unique_tiles >= 2);
    }

    // Tests invalid indexes fail inside the provider
    // Verified by treating invalid indexes as isolated cells
    #[test]
    fn test_invalid_index_is_provider_failure() {
        let err = Explorer::new().explore(&H3Grid::new(), 0).unwrap_err();
        assert!(matches!(err.error, TesseraError::ProviderFailure { .. }));
    }
}
