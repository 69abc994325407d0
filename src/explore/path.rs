//! Recorded walks and their completion statistics

use crate::tiles::floor::CellTile;
use crate::tiles::tile::Similarity;
use serde::{Deserialize, Serialize};

/// One transition taken during exploration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<C> {
    /// Provider edge index followed from the previous tile
    pub edge_index: usize,
    /// Identity of the tile the step arrived at
    pub cell: C,
    /// Similarity that justified the move
    pub similarity: Similarity,
}

/// Starting tile and the ordered steps walked from it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path<C> {
    /// Tile the walk started from
    pub anchor: CellTile<C>,
    /// Transitions in the order they were taken
    pub steps: Vec<Step<C>>,
}

impl<C: PartialEq> Path<C> {
    /// Start an empty path at `anchor`
    pub const fn new(anchor: CellTile<C>) -> Self {
        Self {
            anchor,
            steps: Vec::new(),
        }
    }

    /// Number of steps taken
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was taken
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the last step arrived back at the anchor
    ///
    /// Judged from the steps alone, whatever stopped the walk.
    pub fn is_complete(&self) -> bool {
        self.steps
            .last()
            .is_some_and(|step| step.cell == self.anchor.cell)
    }

    /// Summary statistics over the step similarities
    pub fn completion_stats(&self) -> CompletionStats {
        let is_complete = self.is_complete();
        let path_length = self.steps.len();

        let mut stats = CompletionStats {
            is_complete,
            path_length,
            ..CompletionStats::default()
        };

        let (Some(min), Some(max)) = (
            self.steps.iter().map(|step| step.similarity).min(),
            self.steps.iter().map(|step| step.similarity).max(),
        ) else {
            return stats;
        };

        let total: f64 = self.steps.iter().map(|step| step.similarity.as_f64()).sum();
        stats.average_similarity = Some(total / path_length as f64);
        stats.min_similarity = Some(min.as_f64());
        stats.max_similarity = Some(max.as_f64());

        if is_complete {
            stats.completion_similarity = self.steps.last().map(|step| step.similarity.as_f64());
        }

        stats
    }
}

/// Completion report for a path
///
/// Similarity figures are only present when the path has steps, and the
/// completion similarity only when it is complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    /// Whether the last step returned to the anchor
    pub is_complete: bool,
    /// Number of steps
    pub path_length: usize,
    /// Mean step similarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_similarity: Option<f64>,
    /// Lowest step similarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_similarity: Option<f64>,
    /// Highest step similarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_similarity: Option<f64>,
    /// Similarity of the final, returning step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_similarity: Option<f64>,
}
