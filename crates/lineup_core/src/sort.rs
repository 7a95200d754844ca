//! Comparator selection for the hero table.
//!
//! A sort column maps to an ordered chain of key rules: the primary key
//! follows the requested direction, tie-breakers are always ascending.
//! Rows are ordered with the stable `slice::sort_by`, so heroes equal on
//! every rule keep their catalog order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::Hero;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Name,
    Species,
    Class,
    #[default]
    Cost,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] =
        [SortColumn::Name, SortColumn::Species, SortColumn::Class, SortColumn::Cost];

    /// Matches the lowercase column names exactly; anything else is `Cost`.
    pub fn parse(column: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == column).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Species => "species",
            SortColumn::Class => "class",
            SortColumn::Cost => "cost",
        }
    }
}

impl From<&str> for SortColumn {
    fn from(column: &str) -> Self {
        Self::parse(column)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hero attribute a rule compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    /// First species tag; heroes without species sort before any tag.
    FirstSpecies,
    ClassName,
    Cost,
}

impl SortKey {
    pub fn compare(&self, a: &Hero, b: &Hero) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::FirstSpecies => a.species.first().cmp(&b.species.first()),
            SortKey::ClassName => a.class_name.cmp(&b.class_name),
            SortKey::Cost => a.cost.cmp(&b.cost),
        }
    }
}

/// One rule of a comparator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    pub key: SortKey,
    pub ascending: bool,
}

impl Comparator {
    pub fn ascend(key: SortKey) -> Self {
        Self { key, ascending: true }
    }

    pub fn descend(key: SortKey) -> Self {
        Self { key, ascending: false }
    }

    fn directed(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    pub fn compare(&self, a: &Hero, b: &Hero) -> Ordering {
        let ord = self.key.compare(a, b);
        if self.ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

/// Primary rule plus tie-breakers for `column`.
pub fn comparators(column: SortColumn, ascending: bool) -> Vec<Comparator> {
    match column {
        SortColumn::Name => vec![Comparator::directed(SortKey::Name, ascending)],
        SortColumn::Species => vec![
            Comparator::directed(SortKey::FirstSpecies, ascending),
            Comparator::ascend(SortKey::Cost),
        ],
        SortColumn::Class => vec![
            Comparator::directed(SortKey::ClassName, ascending),
            Comparator::ascend(SortKey::Cost),
        ],
        SortColumn::Cost => vec![
            Comparator::directed(SortKey::Cost, ascending),
            Comparator::ascend(SortKey::Name),
        ],
    }
}

/// First non-equal rule decides.
pub fn compare_heroes(chain: &[Comparator], a: &Hero, b: &Hero) -> Ordering {
    chain
        .iter()
        .map(|c| c.compare(a, b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Current column and direction of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self { column: SortColumn::Cost, ascending: true }
    }
}

impl SortState {
    pub fn new(column: SortColumn, ascending: bool) -> Self {
        Self { column, ascending }
    }

    /// Header click: same column flips direction, another column keeps it.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.ascending = !self.ascending;
        }
        self.column = column;
    }

    pub fn comparators(&self) -> Vec<Comparator> {
        comparators(self.column, self.ascending)
    }
}

/// Stable sort of `heroes` under `state`.
pub fn sort_heroes<'a>(heroes: &'a [Hero], state: &SortState) -> Vec<&'a Hero> {
    let chain = state.comparators();
    let mut rows: Vec<&Hero> = heroes.iter().collect();
    rows.sort_by(|a, b| compare_heroes(&chain, a, b));
    rows
}

/// Left table gets the larger half.
pub fn split_halves<T>(rows: &[T]) -> (&[T], &[T]) {
    rows.split_at(rows.len().div_ceil(2))
}
