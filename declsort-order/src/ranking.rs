//! Ranked lookup
//!
//! One generic ordering-table component instantiated per configured
//! comparator: a value-name maps to its position in the configuration
//! array, a `null` entry donates its position to every value the table
//! does not list, and a table without a `null` entry sends unlisted
//! values to the trailing sentinel.

use std::collections::HashMap;

/// The rank a lookup assigns to an element
///
/// `Leading` sorts before every configured position and exists for the
/// detached-header rule; `Trailing` is the maximum sentinel for "value not
/// present in the policy". Derived ordering: `Leading < Position(n) <
/// Trailing`, positions by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Leading,
    Position(usize),
    Trailing,
}

/// Value-name to configured-position table
#[derive(Debug, Clone)]
pub struct RankTable {
    positions: HashMap<String, usize>,
    wildcard: Option<usize>,
}

impl RankTable {
    /// Build from the configured value list; a `None` entry is the
    /// wildcard and its index becomes the rank of everything unlisted.
    /// Later duplicates of a value-name are ignored; the first position
    /// wins, keeping ranks dense in configuration order.
    pub fn from_values(values: &[Option<String>]) -> RankTable {
        let mut positions = HashMap::new();
        let mut wildcard = None;
        for (index, value) in values.iter().enumerate() {
            match value {
                Some(name) => {
                    positions.entry(name.clone()).or_insert(index);
                }
                None => {
                    if wildcard.is_none() {
                        wildcard = Some(index);
                    }
                }
            }
        }
        RankTable {
            positions,
            wildcard,
        }
    }

    /// Rank of a trait value; `None` means the axis does not apply to the
    /// element, which ranks like any unlisted value.
    pub fn rank(&self, value: Option<&str>) -> Rank {
        value
            .and_then(|name| self.positions.get(name))
            .map(|&index| Rank::Position(index))
            .unwrap_or_else(|| self.wildcard_rank())
    }

    /// Rank given to values the table does not list
    pub fn wildcard_rank(&self) -> Rank {
        self.wildcard.map(Rank::Position).unwrap_or(Rank::Trailing)
    }

    /// Whether a value-name is explicitly configured
    pub fn contains(&self, value: &str) -> bool {
        self.positions.contains_key(value)
    }
}
