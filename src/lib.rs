//! Classification and greedy exploration of procedural tile functions
//!
//! A procedural tile function maps elements of a finite domain to tiles,
//! ordered records of attributes. The crate certifies such functions as
//! deterministic, onto, one-to-one or bijective, and walks grids of tiles by
//! moving greedily to the most similar neighbor, recording a traceable path.

#![forbid(unsafe_code)]

/// Formal classification of procedural tile functions over finite domains
pub mod classify;
/// Greedy exploration of tile adjacency graphs
pub mod explore;
/// Grid cell providers supplying identity, serialization and topology
pub mod grid;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, similarity scoring and neighbor expansion
pub mod tiles;

pub use io::error::{Result, TesseraError};
