//! Sort keys, directions and the per-field direction toggles.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::data::{Field, Record};

use super::compare::{compare_by_key, TextCollator};

/// A column to sort by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// One of the known record fields.
    Field(Field),
    /// A field outside the known set, compared as text.
    Other(String),
}

impl SortKey {
    /// Resolve a field name to a sort key.
    pub fn parse(name: &str) -> Self {
        name.parse::<Field>()
            .map(SortKey::Field)
            .unwrap_or_else(|_| SortKey::Other(name.to_string()))
    }
}

impl From<Field> for SortKey {
    fn from(field: Field) -> Self {
        SortKey::Field(field)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Field(field) => f.write_str(field.name()),
            SortKey::Other(name) => f.write_str(name),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Arrow glyph for status display.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

/// The direction the first sort of a field applies.
///
/// The id column starts descending while every text column starts
/// ascending. Users of the original table rely on this, so it is kept.
pub fn initial_direction(field: Field) -> Direction {
    match field {
        Field::Id => Direction::Descending,
        _ => Direction::Ascending,
    }
}

/// Per-field record of the direction the next sort will apply.
///
/// Every known field toggles independently: sorting by email does not
/// reset the id toggle and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortToggles {
    next: HashMap<Field, Direction>,
}

impl SortToggles {
    /// Create toggles with every field at its initial direction.
    pub fn new() -> Self {
        Self {
            next: Field::ALL
                .into_iter()
                .map(|field| (field, initial_direction(field)))
                .collect(),
        }
    }

    /// The direction the next sort of `field` will apply.
    pub fn next(&self, field: Field) -> Direction {
        self.next
            .get(&field)
            .copied()
            .unwrap_or_else(|| initial_direction(field))
    }

    /// Take the direction for a sort of `key` and flip the stored one.
    ///
    /// Keys outside the known set always sort ascending and keep no state.
    pub fn advance(&mut self, key: &SortKey) -> Direction {
        match key {
            SortKey::Field(field) => {
                let direction = self.next(*field);
                self.next.insert(*field, direction.reversed());
                direction
            }
            SortKey::Other(_) => Direction::Ascending,
        }
    }
}

impl Default for SortToggles {
    fn default() -> Self {
        Self::new()
    }
}

/// Return a sorted copy of `rows`.
///
/// The sort is stable, so rows comparing equal keep the order they had in
/// `rows`.
pub fn sorted(rows: &[Record], key: &SortKey, direction: Direction) -> Vec<Record> {
    let mut collator = TextCollator::new();
    let mut out = rows.to_vec();
    out.sort_by(|a, b| direction.apply(compare_by_key(&mut collator, a, b, key)));
    out
}
