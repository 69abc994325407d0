/// Finite domains and codomains
pub mod domain;
/// Procedural tile functions and their classification predicates
pub mod function;

pub use domain::{Codomain, Domain};
pub use function::{Classification, ProceduralTileFunction, classify};
