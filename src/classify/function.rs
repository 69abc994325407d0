//! Procedural tile functions and their formal classification
//!
//! A procedural tile function maps domain elements to tiles. Nothing about a
//! user-supplied function is assumed: determinism is checked by repetition,
//! and surjectivity and injectivity by scanning the domain for each codomain
//! tile. Each scan stops at the first matching element.

use crate::classify::domain::{Codomain, Domain};
use crate::io::error::Result;
use crate::tiles::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapping from domain elements to tiles
///
/// Implemented for every `Fn(&E) -> Result<Tile<A>>`. A failed application
/// ends the classification with that error.
pub trait ProceduralTileFunction<E, A: PartialEq> {
    /// Map one element to its tile
    ///
    /// # Errors
    ///
    /// Returns whatever error the function raises for `element`
    fn apply(&self, element: &E) -> Result<Tile<A>>;

    /// Whether `trials` applications to `input` all agree with the first
    ///
    /// Fewer than two trials are trivially deterministic.
    ///
    /// # Errors
    ///
    /// Propagates the first failed application
    fn is_deterministic(&self, input: &E, trials: usize) -> Result<bool> {
        if trials < 2 {
            return Ok(true);
        }

        let first = self.apply(input)?;
        for trial in 1..trials {
            if self.apply(input)? != first {
                debug!(trial, "repeated application disagreed with the first");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every codomain tile is produced by some domain element
    ///
    /// # Errors
    ///
    /// Propagates the first failed application
    fn is_onto(&self, domain: &Domain<E>, codomain: &Codomain<A>) -> Result<bool> {
        for (position, tile) in codomain.iter().enumerate() {
            if first_preimage(self, domain, tile)?.is_none() {
                debug!(position, "codomain tile has no preimage");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every codomain tile is produced by exactly one domain element
    ///
    /// A function that is not onto is not one-to-one. The per-tile count stops
    /// at the first matching element, so several preimages of one tile still
    /// count once.
    ///
    /// # Errors
    ///
    /// Propagates the first failed application
    fn is_one_to_one(&self, domain: &Domain<E>, codomain: &Codomain<A>) -> Result<bool> {
        if !self.is_onto(domain, codomain)? {
            return Ok(false);
        }

        for (position, tile) in codomain.iter().enumerate() {
            let count = first_preimage(self, domain, tile)?.map_or(0, |_| 1);
            if count != 1 {
                debug!(position, count, "codomain tile is not uniquely produced");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether the function is both one-to-one and onto
    ///
    /// # Errors
    ///
    /// Propagates the first failed application
    fn is_bijective(&self, domain: &Domain<E>, codomain: &Codomain<A>) -> Result<bool> {
        Ok(self.is_one_to_one(domain, codomain)? && self.is_onto(domain, codomain)?)
    }
}

impl<E, A, F> ProceduralTileFunction<E, A> for F
where
    A: PartialEq,
    F: Fn(&E) -> Result<Tile<A>>,
{
    fn apply(&self, element: &E) -> Result<Tile<A>> {
        self(element)
    }
}

/// Position of the first domain element mapped to `tile`, scanning in order
fn first_preimage<E, A, F>(function: &F, domain: &Domain<E>, tile: &Tile<A>) -> Result<Option<usize>>
where
    A: PartialEq,
    F: ProceduralTileFunction<E, A> + ?Sized,
{
    for (position, element) in domain.iter().enumerate() {
        if function.apply(element)? == *tile {
            return Ok(Some(position));
        }
    }
    Ok(None)
}

/// Every classification of one function over a domain and codomain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Repeated application to the probe element agreed
    pub deterministic: bool,
    /// Every codomain tile has a preimage
    pub onto: bool,
    /// Every codomain tile has exactly one preimage
    pub one_to_one: bool,
    /// Both one-to-one and onto
    pub bijective: bool,
}

/// Run every predicate, probing determinism with `trials` applications to `probe`
///
/// # Errors
///
/// Propagates the first failed application
pub fn classify<E, A, F>(
    function: &F,
    domain: &Domain<E>,
    codomain: &Codomain<A>,
    probe: &E,
    trials: usize,
) -> Result<Classification>
where
    A: PartialEq,
    F: ProceduralTileFunction<E, A> + ?Sized,
{
    Ok(Classification {
        deterministic: function.is_deterministic(probe, trials)?,
        onto: function.is_onto(domain, codomain)?,
        one_to_one: function.is_one_to_one(domain, codomain)?,
        bijective: function.is_bijective(domain, codomain)?,
    })
}
