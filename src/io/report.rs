//! JSON and plain-text rendering of tiles, floors, paths and classifications

use crate::classify::function::Classification;
use crate::explore::explorer::Exploration;
use crate::explore::path::{CompletionStats, Path};
use crate::grid::GridProvider;
use crate::io::error::{Result, TesseraError, provider_failure};
use crate::tiles::floor::{CellTile, Floor};
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON form of any record
///
/// # Errors
///
/// Returns [`TesseraError::Serialization`] if the value cannot be serialized
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write the pretty-printed JSON form of a record to `path`
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &std::path::Path) -> Result<()> {
    let json = to_json(value)?;
    std::fs::write(path, json).map_err(|source| TesseraError::FileSystem {
        path: path.to_path_buf(),
        operation: "write report",
        source,
    })
}

/// Text label of a tile: its attributes joined back together
pub fn tile_label<C>(tile: &CellTile<C>) -> String {
    tile.tile.attributes().iter().collect()
}

/// Write a path as its start cell followed by one line per step
///
/// # Errors
///
/// Returns an error if a step's cell cannot be serialized or writing fails
pub fn render_path<G, W>(grid: &G, path: &Path<G::Cell>, out: &mut W) -> Result<()>
where
    G: GridProvider,
    W: Write,
{
    writeln!(out, "Start: {}", tile_label(&path.anchor))?;
    for (number, step) in path.steps.iter().enumerate() {
        let label = grid
            .serialize(step.cell)
            .map_err(|err| provider_failure(&step.cell, err))?;
        writeln!(
            out,
            "  Step {}: {} -> {label} (edge {})",
            number + 1,
            step.similarity,
            step.edge_index
        )?;
    }
    Ok(())
}

/// Write a finished exploration: its path, terminal state and statistics
///
/// # Errors
///
/// Returns an error if a step's cell cannot be serialized or writing fails
pub fn render_exploration<G, W>(grid: &G, exploration: &Exploration<G::Cell>, out: &mut W) -> Result<()>
where
    G: GridProvider,
    W: Write,
{
    render_path(grid, &exploration.path, out)?;
    writeln!(out, "State: {}", exploration.state)?;
    writeln!(out, "Unique tiles: {}", exploration.unique_tiles)?;
    render_stats(&exploration.path.completion_stats(), out)
}

/// Write completion statistics, omitting figures that are absent
///
/// # Errors
///
/// Returns an error if writing fails
pub fn render_stats<W: Write>(stats: &CompletionStats, out: &mut W) -> Result<()> {
    writeln!(out, "Path length: {}", stats.path_length)?;
    writeln!(out, "Complete: {}", stats.is_complete)?;

    let figures = [
        ("Average similarity", stats.average_similarity),
        ("Min similarity", stats.min_similarity),
        ("Max similarity", stats.max_similarity),
        ("Return similarity", stats.completion_similarity),
    ];
    for (name, value) in figures {
        if let Some(value) = value {
            writeln!(out, "{name}: {value:.3}")?;
        }
    }
    Ok(())
}

/// Write a floor as its anchor followed by one line per neighbor
///
/// # Errors
///
/// Returns an error if writing fails
pub fn render_floor<C, W: Write>(floor: &Floor<C>, out: &mut W) -> Result<()> {
    writeln!(out, "Anchor: {}", tile_label(&floor.anchor))?;
    for neighbor in &floor.neighbors {
        writeln!(
            out,
            "  Edge {}: {} ({})",
            neighbor.edge_index,
            tile_label(&neighbor.tile),
            neighbor.similarity
        )?;
    }
    Ok(())
}

/// Write each classification predicate on its own line
///
/// # Errors
///
/// Returns an error if writing fails
pub fn render_classification<W: Write>(classification: &Classification, out: &mut W) -> Result<()> {
    writeln!(out, "Deterministic: {}", classification.deterministic)?;
    writeln!(out, "Onto: {}", classification.onto)?;
    writeln!(out, "One-to-one: {}", classification.one_to_one)?;
    writeln!(out, "Bijective: {}", classification.bijective)?;
    Ok(())
}
