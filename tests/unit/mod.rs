//! Unit tests mirroring the source tree, one file per source file


/// Hand-built grids with known greedy walks
pub mod fixtures {
    use tessera::grid::AdjacencyGrid;

    /// Three mutually adjacent cells walked 0 -> 1 -> 2 -> 0
    ///
    /// From 0 the best move is 1 (0.75). From 1 both neighbors score 0.75 and
    /// cell 2 comes first. From 2 the best move is back to 1, which reverses
    /// the previous step, so the walk falls back to 0 (0.50).
    pub fn triangle() -> AdjacencyGrid {
        AdjacencyGrid::new()
            .with_cell(0, "aaaa", &[1, 2])
            .with_cell(1, "aaab", &[2, 0])
            .with_cell(2, "aabb", &[0, 1])
    }

    /// Cell 1's best move is straight back to the start
    ///
    /// Cell 2 is a poor alternative: 0.25 from cell 1 and 0.00 from cell 0.
    pub fn spur() -> AdjacencyGrid {
        AdjacencyGrid::new()
            .with_cell(0, "aaaa", &[1, 2])
            .with_cell(1, "aaab", &[0, 2])
            .with_cell(2, "bbbb", &[0, 1])
    }
}
