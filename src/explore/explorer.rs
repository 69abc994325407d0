//! Greedy best-first exploration of the tile adjacency graph
//!
//! From the current tile the explorer expands a floor, moves to the most
//! similar neighbor that reaches the similarity floor, and records the move
//! as a step. It never immediately reverses its previous move; when the only
//! admissible move is a reversal the walk is stuck. The walk ends when it is
//! stuck, when the step budget is spent, or, if configured, when it arrives
//! back at its starting tile.

use crate::explore::path::{Path, Step};
use crate::grid::GridProvider;
use crate::io::configuration::{DEFAULT_MAX_STEPS, DEFAULT_MIN_SIMILARITY, DEFAULT_STOP_ON_RETURN};
use crate::io::error::{Result, TesseraError, invalid_parameter};
use crate::tiles::floor::{CellTile, Floor, Neighbor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Stopping policy for an exploration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Maximum number of steps to take
    pub max_steps: usize,
    /// Lowest similarity a neighbor needs to be considered
    pub min_similarity: f32,
    /// End the walk as soon as it arrives back at the starting tile
    pub stop_on_return: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            stop_on_return: DEFAULT_STOP_ON_RETURN,
        }
    }
}

impl ExplorerConfig {
    /// Copy of this configuration with a new step budget
    #[must_use]
    pub const fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Copy of this configuration with a new similarity floor
    #[must_use]
    pub const fn with_min_similarity(self, min_similarity: f32) -> Self {
        Self {
            min_similarity,
            ..self
        }
    }

    /// Copy of this configuration with a new return policy
    #[must_use]
    pub const fn with_stop_on_return(self, stop_on_return: bool) -> Self {
        Self {
            stop_on_return,
            ..self
        }
    }

    /// Check the similarity floor is a non-negative number
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::InvalidParameter`] if `min_similarity` is negative or NaN
    pub fn validate(&self) -> Result<()> {
        if self.min_similarity.is_nan() || self.min_similarity < 0.0 {
            return Err(invalid_parameter(
                "min_similarity",
                &self.min_similarity,
                &"must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a single exploration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerState {
    /// Still taking steps
    Running,
    /// Arrived back at the starting tile with return stopping enabled
    Completed,
    /// Step budget spent
    Exhausted,
    /// No admissible neighbor left
    Stuck,
}

impl ExplorerState {
    /// Whether the walk has stopped
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for ExplorerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Exhausted => "exhausted",
            Self::Stuck => "stuck",
        };
        f.write_str(name)
    }
}

/// Result of a finished exploration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration<C> {
    /// The walk taken
    pub path: Path<C>,
    /// Terminal state that ended the walk
    pub state: ExplorerState,
    /// Number of distinct tiles visited, the start included
    pub unique_tiles: usize,
}

/// Failure during exploration, with whatever path was walked before it
#[derive(Debug)]
pub struct ExploreError<C> {
    /// Steps taken before the failure; `None` if the start tile could not be built
    pub path: Option<Path<C>>,
    /// Cause of the failure
    pub error: TesseraError,
}

impl<C> ExploreError<C> {
    const fn before_start(error: TesseraError) -> Self {
        Self { path: None, error }
    }

    /// Number of steps taken before the failure
    pub fn steps_taken(&self) -> usize {
        self.path.as_ref().map_or(0, |path| path.steps.len())
    }
}

impl<C> fmt::Display for ExploreError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exploration failed after {} steps: {}",
            self.steps_taken(),
            self.error
        )
    }
}

impl<C: fmt::Debug> std::error::Error for ExploreError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<C> From<ExploreError<C>> for TesseraError {
    fn from(err: ExploreError<C>) -> Self {
        err.error
    }
}

/// Greedy walker over a grid's tile adjacency graph
///
/// Holds only its configuration; every call to [`Explorer::explore`] owns
/// its own path and bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Explorer {
    config: ExplorerConfig,
}

impl Explorer {
    /// Explorer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Explorer with the given configuration
    pub const fn from_config(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub const fn config(&self) -> ExplorerConfig {
        self.config
    }

    /// New explorer with a different step budget
    #[must_use]
    pub const fn with_max_steps(self, max_steps: usize) -> Self {
        Self::from_config(self.config.with_max_steps(max_steps))
    }

    /// New explorer with a different similarity floor
    #[must_use]
    pub const fn with_min_similarity(self, min_similarity: f32) -> Self {
        Self::from_config(self.config.with_min_similarity(min_similarity))
    }

    /// New explorer with a different return policy
    #[must_use]
    pub const fn with_stop_on_return(self, stop_on_return: bool) -> Self {
        Self::from_config(self.config.with_stop_on_return(stop_on_return))
    }

    /// Walk the grid greedily from `start`
    ///
    /// # Errors
    ///
    /// Returns an [`ExploreError`] if the configuration is invalid, if the
    /// provider cannot resolve a cell on the way, or if tiles of different
    /// cardinality meet. The error carries the path walked so far.
    pub fn explore<G>(
        &self,
        grid: &G,
        start: G::Cell,
    ) -> std::result::Result<Exploration<G::Cell>, ExploreError<G::Cell>>
    where
        G: GridProvider,
    {
        self.config.validate().map_err(ExploreError::before_start)?;
        let anchor = CellTile::derive(grid, start).map_err(ExploreError::before_start)?;

        let mut walk = Walk::new(anchor, self.config);
        match walk.run(grid) {
            Ok(state) => {
                info!(
                    start = ?start,
                    %state,
                    steps = walk.path.steps.len(),
                    unique_tiles = walk.visited.len(),
                    "exploration finished"
                );
                Ok(Exploration {
                    unique_tiles: walk.visited.len(),
                    path: walk.path,
                    state,
                })
            }
            Err(error) => Err(ExploreError {
                path: Some(walk.path),
                error,
            }),
        }
    }
}

/// Mutable bookkeeping of one exploration
struct Walk<C> {
    config: ExplorerConfig,
    path: Path<C>,
    current: CellTile<C>,
    previous: Option<C>,
    visited: BTreeMap<C, usize>,
}

impl<C: Copy + Ord + fmt::Debug> Walk<C> {
    fn new(anchor: CellTile<C>, config: ExplorerConfig) -> Self {
        let visited = BTreeMap::from([(anchor.cell, 1)]);
        Self {
            config,
            current: anchor.clone(),
            path: Path::new(anchor),
            previous: None,
            visited,
        }
    }

    fn run<G>(&mut self, grid: &G) -> Result<ExplorerState>
    where
        G: GridProvider<Cell = C>,
    {
        let mut state = if self.config.max_steps == 0 {
            ExplorerState::Exhausted
        } else {
            ExplorerState::Running
        };

        while !state.is_terminal() {
            state = self.advance(grid)?;
        }
        Ok(state)
    }

    fn advance<G>(&mut self, grid: &G) -> Result<ExplorerState>
    where
        G: GridProvider<Cell = C>,
    {
        let floor = Floor::build(grid, self.current.clone())?;
        let threshold = self.config.min_similarity;
        let anchor = self.path.anchor.cell;

        let Some(mut chosen) = select_best(&floor.neighbors, threshold, None) else {
            debug!(at = ?self.current.cell, "no neighbor reaches the similarity floor");
            return Ok(ExplorerState::Stuck);
        };

        let mut returning = self.config.stop_on_return && chosen.tile.cell == anchor;
        if !returning && self.previous == Some(chosen.tile.cell) {
            let Some(alternative) = select_best(&floor.neighbors, threshold, self.previous) else {
                debug!(at = ?self.current.cell, "only move reverses the previous step");
                return Ok(ExplorerState::Stuck);
            };
            chosen = alternative;
            returning = self.config.stop_on_return && chosen.tile.cell == anchor;
        }

        self.take(chosen);

        if returning {
            Ok(ExplorerState::Completed)
        } else if self.path.steps.len() >= self.config.max_steps {
            Ok(ExplorerState::Exhausted)
        } else {
            Ok(ExplorerState::Running)
        }
    }

    fn take(&mut self, neighbor: &Neighbor<C>) {
        let step = Step {
            edge_index: neighbor.edge_index,
            cell: neighbor.tile.cell,
            similarity: neighbor.similarity,
        };
        debug!(
            step = self.path.steps.len() + 1,
            edge = step.edge_index,
            to = ?step.cell,
            similarity = %step.similarity,
            "step"
        );

        self.path.steps.push(step);
        *self.visited.entry(step.cell).or_insert(0) += 1;
        self.previous = Some(self.current.cell);
        self.current = neighbor.tile.clone();
    }
}

/// Most similar neighbor reaching `threshold`, skipping `excluded`
///
/// Ties keep the earliest edge index.
pub fn select_best<C: PartialEq + Copy>(
    neighbors: &[Neighbor<C>],
    threshold: f32,
    excluded: Option<C>,
) -> Option<&Neighbor<C>> {
    let mut best: Option<&Neighbor<C>> = None;
    for neighbor in neighbors {
        if !neighbor.similarity.meets(threshold) || excluded == Some(neighbor.tile.cell) {
            continue;
        }
        if best.is_none_or(|current| neighbor.similarity > current.similarity) {
            best = Some(neighbor);
        }
    }
    best
}
