//! Ordering engine
//!
//! Takes the top-level nodes of a parsed source file, reduces each to an
//! [`Element`] (classification traits plus emission text), stably sorts
//! the elements under a [`ComparatorChain`], and serializes them back to
//! text with policy-aware blank-line placement. The whole pipeline is a
//! pure in-memory computation: nothing here reads files, and a chain built
//! once can order any number of files.

pub mod chain;
pub mod classify;
pub mod element;
pub mod header;
pub mod layout;
pub mod ranking;

pub use chain::{Comparator, ComparatorChain, CompareScope};
pub use element::{Declaration, Element, Kind, Persistence, TraitAxis, Transfer};
pub use ranking::{Rank, RankTable};

use declsort_parser::SourceFile;

/// Reduce a parsed file to its ordered-insertion element list, in source
/// order. The first node may contribute two elements: its detached banner
/// header and its content; every other node contributes exactly one.
pub fn collect_elements(file: &SourceFile) -> Vec<Element> {
    let mut elements = Vec::new();
    for (index, node) in file.nodes.iter().enumerate() {
        let (banner, rest) = header::split(node, &file.source, index == 0);
        if let Some(text) = banner {
            elements.push(Element::header(text));
        }
        elements.push(classify::classify(node, &file.source, rest));
    }
    elements
}

/// Reorder the top-level declarations of `source` under the chain
pub fn order_source(source: &str, chain: &ComparatorChain) -> String {
    let file = declsort_parser::parse(source);
    layout::layout(collect_elements(&file), chain)
}
