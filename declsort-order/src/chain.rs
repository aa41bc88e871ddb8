//! The comparator chain
//!
//! A chain is the compiled form of an ordering policy: an immutable,
//! ordered list of comparators built once by the configuration loader and
//! passed by reference into the layout engine. Evaluation short-circuits
//! in configuration order; a pair equal under every comparator keeps its
//! original relative order through sort stability.

use crate::element::{Element, Kind, TraitAxis};
use crate::ranking::{Rank, RankTable};
use regex::Regex;
use std::cmp::Ordering;

/// Which comparators participate in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareScope {
    /// The whole chain, used for sorting
    Full,
    /// Skips comparators flagged `ignore_if_single_line`; used for
    /// blank-line placement between single-line elements
    SingleLine,
}

#[derive(Debug, Clone)]
enum Rule {
    Ranked { axis: TraitAxis, table: RankTable },
    Pattern { patterns: Vec<(usize, Regex)>, wildcard: Option<usize> },
    Name,
}

/// One configured ordering rule
#[derive(Debug, Clone)]
pub struct Comparator {
    rule: Rule,
    ignore_if_single_line: bool,
}

impl Comparator {
    /// A trait comparator over one classification axis
    pub fn ranked(axis: TraitAxis, values: &[Option<String>]) -> Comparator {
        Comparator {
            rule: Rule::Ranked {
                axis,
                table: RankTable::from_values(values),
            },
            ignore_if_single_line: false,
        }
    }

    /// A pattern comparator: ordered regular expressions over element
    /// text, first match wins; a `None` entry is the wildcard position.
    pub fn pattern(entries: &[Option<String>]) -> Result<Comparator, regex::Error> {
        let mut patterns = Vec::new();
        let mut wildcard = None;
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                Some(pattern) => patterns.push((index, Regex::new(pattern)?)),
                None => {
                    if wildcard.is_none() {
                        wildcard = Some(index);
                    }
                }
            }
        }
        Ok(Comparator {
            rule: Rule::Pattern { patterns, wildcard },
            ignore_if_single_line: false,
        })
    }

    /// The name comparator; needs no configuration
    pub fn name() -> Comparator {
        Comparator {
            rule: Rule::Name,
            ignore_if_single_line: false,
        }
    }

    /// Mark this comparator as skipped when only blank-line placement
    /// between single-line elements is at stake
    pub fn ignore_if_single_line(mut self, ignore: bool) -> Comparator {
        self.ignore_if_single_line = ignore;
        self
    }

    fn compare(&self, a: &Element, b: &Element) -> Ordering {
        match &self.rule {
            Rule::Ranked { axis, table } => {
                rank_on(*axis, table, a).cmp(&rank_on(*axis, table, b))
            }
            Rule::Pattern { patterns, wildcard } => {
                pattern_rank(patterns, *wildcard, a).cmp(&pattern_rank(patterns, *wildcard, b))
            }
            Rule::Name => compare_names(&a.name, &b.name),
        }
    }
}

/// Rank an element on a classification axis. A detached header's kind
/// ranks ahead of every configured position unless the policy lists
/// `Header` explicitly, so a banner stays at the top of the file even under
/// policies that never mention it.
fn rank_on(axis: TraitAxis, table: &RankTable, element: &Element) -> Rank {
    if axis == TraitAxis::Kind
        && element.kind == Some(Kind::Header)
        && !table.contains(Kind::Header.as_str())
    {
        return Rank::Leading;
    }
    table.rank(element.trait_value(axis))
}

fn pattern_rank(patterns: &[(usize, Regex)], wildcard: Option<usize>, element: &Element) -> Rank {
    patterns
        .iter()
        .find(|(_, regex)| regex.is_match(&element.text))
        .map(|&(index, _)| Rank::Position(index))
        .or(wildcard.map(Rank::Position))
        .unwrap_or(Rank::Trailing)
}

/// Case-insensitive with a byte-order tie-break, so `a` and `A` group
/// together but the order is still total over distinct names
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The compiled ordering policy
#[derive(Debug, Clone)]
pub struct ComparatorChain {
    comparators: Vec<Comparator>,
}

impl ComparatorChain {
    pub fn new(comparators: Vec<Comparator>) -> ComparatorChain {
        ComparatorChain { comparators }
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Compare two elements under the policy. Short-circuits on the first
    /// comparator with an opinion; `Equal` defers to sort stability.
    pub fn compare(&self, a: &Element, b: &Element, scope: CompareScope) -> Ordering {
        for comparator in &self.comparators {
            if scope == CompareScope::SingleLine && comparator.ignore_if_single_line {
                continue;
            }
            let ordering = comparator.compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
