//! Layout: stable sort plus re-serialization
//!
//! The element sequence arrives in source order, gets a stable sort under
//! the full chain (stability is the tie-break for policy-equal elements),
//! and is then re-emitted. Blank-line placement between neighbors uses the
//! single-line-restricted chain: multi-line elements are always separated
//! for readability, single-line elements only when the policy puts them in
//! different groups.

use crate::chain::{CompareScope, ComparatorChain};
use crate::element::Element;
use std::cmp::Ordering;

/// Sort the elements and serialize them back to text
pub fn layout(mut elements: Vec<Element>, chain: &ComparatorChain) -> String {
    elements.sort_by(|a, b| chain.compare(a, b, CompareScope::Full));
    serialize(&elements, chain)
}

fn serialize(elements: &[Element], chain: &ComparatorChain) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 && separated(&elements[i - 1], element, chain) {
            out.push('\n');
        }
        out.push_str(element.text.trim());
        out.push('\n');
    }
    out
}

fn separated(previous: &Element, current: &Element, chain: &ComparatorChain) -> bool {
    previous.is_multiline()
        || current.is_multiline()
        || chain.compare(previous, current, CompareScope::SingleLine) != Ordering::Equal
}
