//! Header splitting
//!
//! A banner comment block at the very top of a file, separated from the
//! first declaration by a blank line, is detached into its own Header
//! element so it keeps its place while the declarations move. Splitting
//! only ever applies to the first node of a file: comments above later
//! declarations legitimately belong to them and must travel with them.

use declsort_parser::SourceNode;
use std::ops::Range;

/// Split a node into an optional detached header and the rest.
///
/// The rest preserves the original layout of whatever stays attached: it
/// is sliced from the source, not re-joined.
pub fn split(node: &SourceNode, source: &str, is_first_in_file: bool) -> (Option<String>, String) {
    if !is_first_in_file || node.leading_comments.is_empty() {
        return (None, node.full_text(source).trim().to_string());
    }

    let header_len = gap_index(node, source);
    if header_len == 0 {
        return (None, node.full_text(source).trim().to_string());
    }

    let header = node.leading_comments[..header_len]
        .iter()
        .map(|range| source[range.clone()].trim())
        .collect::<Vec<_>>()
        .join("\n");
    let rest_start = node
        .leading_comments
        .get(header_len)
        .map(|range| range.start)
        .unwrap_or(node.span.start);
    let rest = source[rest_start..node.span.end].trim().to_string();

    (Some(header), rest)
}

/// Number of leading comments belonging to the header: a single forward
/// scan looking for the first blank-line gap between one comment and the
/// next, or, for the last comment, between it and the statement itself.
/// Zero means no gap anywhere, hence no detachable header.
fn gap_index(node: &SourceNode, source: &str) -> usize {
    for (i, comment) in node.leading_comments.iter().enumerate() {
        let next_start = node
            .leading_comments
            .get(i + 1)
            .map(|range| range.start)
            .unwrap_or(node.span.start);
        if has_blank_line(source, comment.end..next_start) {
            return i + 1;
        }
    }
    0
}

/// A gap is a blank line: more than one line terminator in the slice
/// between two ranges. Counting terminators rather than bytes keeps CRLF
/// endings and indentation from producing false gaps.
fn has_blank_line(source: &str, between: Range<usize>) -> bool {
    source[between].matches('\n').count() > 1
}
