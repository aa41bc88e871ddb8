//! Trait extraction
//!
//! Maps a scanned [`SourceNode`] to an [`Element`]: the node category
//! collapses to a tagged kind, the marker flags become traits, and the
//! name is resolved per variant. Extraction never fails: nodes the
//! scanner could not recognize get not-applicable traits and participate
//! in ordering through whatever traits they do have.

use crate::element::{Declaration, Element, Kind, Persistence, Transfer};
use declsort_parser::{NodeCategory, SourceNode};

/// Build the content element for a node. `text` is the emission text the
/// header splitter decided on (the node text plus whichever leading
/// comments stayed attached).
pub fn classify(node: &SourceNode, source: &str, text: String) -> Element {
    Element {
        kind: kind_of(node),
        transfer: node.exported.then_some(Transfer::IsExported),
        persistence: node.constant.then_some(Persistence::IsConstant),
        declaration: node.declared.then_some(Declaration::IsDeclared),
        name: name_of(node, source),
        text,
    }
}

fn kind_of(node: &SourceNode) -> Option<Kind> {
    match node.category {
        NodeCategory::Import if node.type_only => Some(Kind::TypeImport),
        NodeCategory::Import => Some(Kind::Import),
        NodeCategory::Variable => Some(Kind::Variable),
        NodeCategory::Function => Some(Kind::Function),
        NodeCategory::Class => Some(Kind::Class),
        NodeCategory::Interface => Some(Kind::Interface),
        NodeCategory::TypeAlias => Some(Kind::Type),
        NodeCategory::Enumeration => Some(Kind::Enumeration),
        NodeCategory::CommentOnly | NodeCategory::Unknown => None,
    }
}

/// Interfaces use their full text as a name surrogate; everything else
/// uses the declared name, empty when there is none.
fn name_of(node: &SourceNode, source: &str) -> String {
    match node.category {
        NodeCategory::Interface => node.text(source).trim().to_string(),
        _ => node.name.clone().unwrap_or_default(),
    }
}
