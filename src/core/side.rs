//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two sides of the board: `First` plays "X", `Second` plays "O".
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side` for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the board.
///
/// Sides are displayed as `X` (first) and `O` (second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Get the opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Get the raw side index (0 for `First`, 1 for `Second`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// The mark drawn for this side.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }

    /// The colour a renderer paints this side's cells with.
    #[must_use]
    pub const fn colour(self) -> MarkColour {
        match self {
            Side::First => MarkColour::Red,
            Side::Second => MarkColour::Blue,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Presentation hint for a side's marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkColour {
    Red,
    Blue,
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use decay_tac_toe::core::{Side, SideMap};
///
/// let mut scores: SideMap<u8> = SideMap::with_value(0);
/// scores[Side::Second] += 1;
///
/// assert_eq!(scores[Side::First], 0);
/// assert_eq!(scores[Side::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::First), factory(Side::Second)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::First.index(), 0);
        assert_eq!(Side::Second.index(), 1);
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
        assert_eq!(format!("{}", Side::First), "X");
        assert_eq!(format!("{}", Side::Second), "O");
    }

    #[test]
    fn test_side_colours() {
        assert_eq!(Side::First.colour(), MarkColour::Red);
        assert_eq!(Side::Second.colour(), MarkColour::Blue);
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::First], 0);
        assert_eq!(map[Side::Second], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<u8> = SideMap::with_value(3);
        map[Side::First] -= 1;
        *map.get_mut(Side::Second) += 2;

        assert_eq!(map[Side::First], 2);
        assert_eq!(map[Side::Second], 5);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<char> = SideMap::new(Side::symbol);
        let pairs: Vec<_> = map.iter().map(|(s, c)| (s, *c)).collect();

        assert_eq!(pairs, vec![(Side::First, 'X'), (Side::Second, 'O')]);
    }

    #[test]
    fn test_side_serde() {
        let json = serde_json::to_string(&Side::Second).unwrap();
        let side: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, Side::Second);
    }
}
