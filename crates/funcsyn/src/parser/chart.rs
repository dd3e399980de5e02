//! Chart data structure for the recognizer.

use hashbrown::HashSet;
use lasso::Spur;

/// A partial-derivation state in the chart.
///
/// Production `alt` of `lhs` has been recognized up to position `dot` of
/// its right-hand side, starting at input position `start`. Interned
/// nonterminal keys keep items `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Item {
    pub(crate) lhs: Spur,
    pub(crate) alt: usize,
    pub(crate) dot: usize,
    pub(crate) start: usize,
}

impl Item {
    pub(crate) const fn new(lhs: Spur, alt: usize, dot: usize, start: usize) -> Self {
        Self {
            lhs,
            alt,
            dot,
            start,
        }
    }

    /// The same item with the dot advanced over one symbol.
    pub(crate) const fn advanced(self) -> Self {
        Self {
            dot: self.dot + 1,
            ..self
        }
    }
}

/// Item sets per input position.
///
/// `positions[i]` holds the states recognized up to position `i`. Created
/// fresh for every recognition call and discarded with it.
pub(crate) struct Chart {
    positions: Vec<HashSet<Item, ahash::RandomState>>,
}

impl Chart {
    pub(crate) fn new(input_len: usize) -> Self {
        let mut positions = Vec::with_capacity(input_len + 1);
        for _ in 0..=input_len {
            positions.push(HashSet::with_hasher(ahash::RandomState::new()));
        }
        Self { positions }
    }

    pub(crate) fn get(&self, position: usize) -> &HashSet<Item, ahash::RandomState> {
        &self.positions[position]
    }

    /// Add an item at the given position. Returns true if it was newly
    /// inserted.
    pub(crate) fn add(&mut self, position: usize, item: Item) -> bool {
        self.positions[position].insert(item)
    }
}
