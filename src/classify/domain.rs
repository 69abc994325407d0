//! Finite domains and codomains of procedural tile functions

use crate::io::error::Result;
use crate::tiles::tile::Tile;
use serde::{Deserialize, Serialize};

/// Finite, ordered set of opaque elements compared by equality only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain<E> {
    elements: Vec<E>,
}

impl<E> Domain<E> {
    /// Create a domain from its elements
    pub const fn new(elements: Vec<E>) -> Self {
        Self { elements }
    }

    /// Number of elements
    pub const fn cardinality(&self) -> usize {
        self.elements.len()
    }

    /// Elements in order
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<E> FromIterator<E> for Domain<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a Domain<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Finite, ordered set of tiles a function is expected to produce
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "A: Clone + Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct Codomain<A = char> {
    tiles: Vec<Tile<A>>,
}

impl<A> Codomain<A> {
    /// Create a codomain from its tiles
    pub const fn new(tiles: Vec<Tile<A>>) -> Self {
        Self { tiles }
    }

    /// Codomain produced by applying `function` to every element of `domain`, in order
    ///
    /// # Errors
    ///
    /// Propagates the first failed application
    pub fn image<E, F>(function: &F, domain: &Domain<E>) -> Result<Self>
    where
        F: Fn(&E) -> Result<Tile<A>>,
    {
        domain.iter().map(function).collect()
    }

    /// Number of tiles
    pub const fn cardinality(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles in order
    pub fn tiles(&self) -> &[Tile<A>] {
        &self.tiles
    }

    /// Iterate over the tiles in order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile<A>> {
        self.tiles.iter()
    }
}

impl<A> FromIterator<Tile<A>> for Codomain<A> {
    fn from_iter<I: IntoIterator<Item = Tile<A>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, A> IntoIterator for &'a Codomain<A> {
    type Item = &'a Tile<A>;
    type IntoIter = std::slice::Iter<'a, Tile<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
