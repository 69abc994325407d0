//! Command-line interface for exploring and classifying H3 tiles

use crate::classify::domain::{Codomain, Domain};
use crate::classify::function::classify;
use crate::explore::explorer::{Explorer, ExplorerConfig, ExplorerState};
use crate::explore::path::{CompletionStats, Path};
use crate::grid::h3::H3Grid;
use crate::io::configuration::{
    DEFAULT_DETERMINISM_TRIALS, DEFAULT_MAX_STEPS, DEFAULT_MIN_SIMILARITY,
};
use crate::io::error::{Result, invalid_state};
use crate::io::progress::SurveyProgress;
use crate::io::report::{
    render_classification, render_exploration, render_floor, render_path, to_json, write_json,
};
use crate::tiles::floor::{CellTile, Floor};
use crate::tiles::tile::Tile;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(
    author,
    version,
    about = "Explore H3 grids greedily by tile similarity and classify tile functions"
)]
/// Command-line arguments for the tessera tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every exploration step
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Operations offered by the command line
#[derive(Subcommand)]
pub enum Command {
    /// Walk greedily from one cell and report the path
    Explore {
        /// Hexadecimal H3 index to start from
        #[arg(value_name = "CELL")]
        cell: String,

        /// Stopping policy
        #[command(flatten)]
        walk: WalkArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a cell's neighbors with their similarity scores
    Floor {
        /// Hexadecimal H3 index to expand
        #[arg(value_name = "CELL")]
        cell: String,

        /// Emit the floor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explore from every resolution-0 cell and summarize the outcomes
    Survey {
        /// Stopping policy
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Classify the character-split tile function over the resolution-0 cells
    Classify {
        /// Repeated applications used to check determinism
        #[arg(short, long, default_value_t = DEFAULT_DETERMINISM_TRIALS)]
        trials: usize,
    },
}

/// Explorer stopping policy shared by the walking commands
#[derive(Args, Clone, Copy, Debug)]
pub struct WalkArgs {
    /// Maximum number of steps
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Lowest similarity a neighbor needs to be considered
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_SIMILARITY)]
    pub min_similarity: f32,

    /// Stop when the walk arrives back at its start
    #[arg(short = 'r', long)]
    pub stop_on_return: bool,
}

impl WalkArgs {
    /// Explorer configured by these arguments
    pub const fn explorer(&self) -> Explorer {
        Explorer::from_config(ExplorerConfig {
            max_steps: self.max_steps,
            min_similarity: self.min_similarity,
            stop_on_return: self.stop_on_return,
        })
    }
}

#[derive(Serialize)]
struct ExplorationReport<'a> {
    config: ExplorerConfig,
    path: &'a Path<u64>,
    state: ExplorerState,
    unique_tiles: usize,
    stats: CompletionStats,
}

/// Runs the selected command against the H3 grid
pub struct CommandRunner {
    cli: Cli,
    grid: H3Grid,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            grid: H3Grid::new(),
        }
    }

    /// Run the selected command, writing its report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if a cell cannot be parsed, exploration fails, or the
    /// report cannot be written
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Explore {
                cell,
                walk,
                json,
                output,
            } => self.explore(cell, walk, *json, output.as_deref(), out),
            Command::Floor { cell, json } => self.floor(cell, *json, out),
            Command::Survey { walk } => self.survey(walk, out),
            Command::Classify { trials } => self.classify(*trials, out),
        }
    }

    fn explore<W: Write>(
        &self,
        cell: &str,
        walk: &WalkArgs,
        json: bool,
        output: Option<&std::path::Path>,
        out: &mut W,
    ) -> Result<()> {
        let start = H3Grid::parse_cell(cell)?;
        let explorer = walk.explorer();

        let exploration = match explorer.explore(&self.grid, start) {
            Ok(exploration) => exploration,
            Err(err) => {
                if let Some(path) = &err.path {
                    render_path(&self.grid, path, out)?;
                }
                return Err(err.into());
            }
        };

        if !json && output.is_none() {
            return render_exploration(&self.grid, &exploration, out);
        }

        let report = ExplorationReport {
            config: explorer.config(),
            path: &exploration.path,
            state: exploration.state,
            unique_tiles: exploration.unique_tiles,
            stats: exploration.path.completion_stats(),
        };
        match output {
            Some(path) => write_json(&report, path),
            None => Ok(writeln!(out, "{}", to_json(&report)?)?),
        }
    }

    fn floor<W: Write>(&self, cell: &str, json: bool, out: &mut W) -> Result<()> {
        let anchor = CellTile::derive(&self.grid, H3Grid::parse_cell(cell)?)?;
        let floor = Floor::build(&self.grid, anchor)?;

        if json {
            writeln!(out, "{}", to_json(&floor)?)?;
            Ok(())
        } else {
            render_floor(&floor, out)
        }
    }

    fn survey<W: Write>(&self, walk: &WalkArgs, out: &mut W) -> Result<()> {
        let explorer = walk.explorer();
        let starts = H3Grid::base_cells();
        let mut progress = SurveyProgress::new(starts.len(), self.cli.quiet);

        for start in starts {
            match explorer.explore(&self.grid, start) {
                Ok(exploration) => progress.record(exploration.state, exploration.path.len()),
                Err(err) => {
                    warn!(start = %format!("{start:x}"), error = %err, "exploration failed");
                    progress.record_failure(err.steps_taken());
                }
            }
        }
        progress.finish();

        writeln!(out, "Starts: {}", progress.recorded())?;
        writeln!(out, "Completed: {}", progress.completed())?;
        writeln!(out, "Exhausted: {}", progress.exhausted())?;
        writeln!(out, "Stuck: {}", progress.stuck())?;
        writeln!(out, "Failed: {}", progress.failed())?;
        writeln!(out, "Mean steps: {:.2}", progress.mean_steps())?;
        Ok(())
    }

    fn classify<W: Write>(&self, trials: usize, out: &mut W) -> Result<()> {
        let grid = self.grid;
        let split_serialization =
            |cell: &u64| -> Result<Tile<char>> { Ok(CellTile::derive(&grid, *cell)?.tile) };

        let domain: Domain<u64> = H3Grid::base_cells().into_iter().collect();
        let codomain = Codomain::image(&split_serialization, &domain)?;
        let probe = domain
            .elements()
            .first()
            .copied()
            .ok_or_else(|| invalid_state(&"grid has no base cells"))?;

        writeln!(out, "Domain cardinality: {}", domain.cardinality())?;
        writeln!(out, "Codomain cardinality: {}", codomain.cardinality())?;
        if let Some(tile) = codomain.tiles().first() {
            writeln!(out, "First tile attributes: {}", tile.cardinality())?;
        }

        let classification = classify(&split_serialization, &domain, &codomain, &probe, trials)?;
        render_classification(&classification, out)
    }
}
