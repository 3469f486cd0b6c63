// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-insensitive search over node labels.
//!
//! Filtering never prunes: it returns a copy of the tree in which nodes that
//! do not match the term are marked [`faded`](crate::Display::faded). Matching
//! nodes keep their original flags. An empty term disables filtering.

use alloc::vec::Vec;
use core::ops::Range;

use crate::TreeNode;

/// Returns a filtered copy of `tree` for `term`.
///
/// ```
/// use mindmap_tree::{TreeNode, filter};
///
/// let tree = TreeNode::new("root", "Plans").with_child(TreeNode::new("a", "Groceries"));
/// let filtered = filter(&tree, "plan");
/// assert!(!filtered.display.faded);
/// assert!(filtered.nodes[0].display.faded);
/// assert_eq!(filter(&tree, ""), tree);
/// ```
pub fn filter(tree: &TreeNode, term: &str) -> TreeNode {
    let mut out = tree.clone();
    if term.is_empty() {
        return out;
    }
    log::debug!("searching tree for {term:?}");
    fade_unmatched(&mut out, term);
    out
}

fn fade_unmatched(node: &mut TreeNode, term: &str) {
    if !matches(&node.text, term) {
        node.display.faded = true;
    }
    for child in &mut node.nodes {
        fade_unmatched(child, term);
    }
}

/// Returns `true` if `text` contains `term`, ignoring case.
///
/// The empty term matches everything.
pub fn matches(text: &str, term: &str) -> bool {
    term.is_empty()
        || text
            .char_indices()
            .any(|(idx, _)| match_at(&text[idx..], term).is_some())
}

/// Byte ranges of the non-overlapping, case-insensitive occurrences of `term`
/// in `text`, in order.
///
/// Characters are compared by their lowercase expansions, so the returned
/// ranges always fall on `char` boundaries of `text`.
pub fn match_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if term.is_empty() {
        return ranges;
    }
    let mut start = 0;
    while start < text.len() {
        if let Some(len) = match_at(&text[start..], term) {
            ranges.push(start..start + len);
            start += len;
        } else {
            // Advance by one char.
            start += text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    ranges
}

/// If `text` starts with `term` (ignoring case), returns the matched byte length.
fn match_at(text: &str, term: &str) -> Option<usize> {
    let mut haystack = text.char_indices();
    let mut len = 0;
    for wanted in term.chars() {
        let (idx, got) = haystack.next()?;
        if !got.to_lowercase().eq(wanted.to_lowercase()) {
            return None;
        }
        len = idx + got.len_utf8();
    }
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Display;

    fn tree() -> TreeNode {
        TreeNode::new("root", "Mind Map")
            .with_child(TreeNode::new("a", "Alpha").with_child(TreeNode::new("a1", "alphabet")))
            .with_child(TreeNode::new("b", "Beta"))
    }

    #[test]
    fn empty_term_is_identity() {
        let mut t = tree();
        t.nodes[1].display.faded = true;
        let out = filter(&t, "");
        assert_eq!(out, t);
    }

    #[test]
    fn unmatched_term_fades_every_node() {
        let out = filter(&tree(), "zzz");
        assert!(out.iter().all(|n| n.display.faded));
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_structure() {
        let out = filter(&tree(), "ALPHA");
        assert_eq!(out.node_count(), 4);
        let faded: Vec<(&str, bool)> = out
            .iter()
            .map(|n| (n.id.as_str(), n.display.faded))
            .collect();
        assert_eq!(
            faded,
            [("root", true), ("a", false), ("a1", false), ("b", true)]
        );
    }

    #[test]
    fn matching_root_leaves_root_unfaded() {
        let out = filter(&tree(), "mind");
        assert!(!out.display.faded);
        assert_eq!(tree().display, Display::default(), "input is untouched");
    }

    #[test]
    fn match_ranges_are_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), [0..2, 2..4]);
        assert_eq!(match_ranges("Ab ab AB", "ab"), [0..2, 3..5, 6..8]);
        assert!(match_ranges("abc", "").is_empty());
    }

    #[test]
    fn match_ranges_respect_char_boundaries() {
        let text = "Hộ Trì Chơn Lý";
        let ranges = match_ranges(text, "chơn");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "Chơn");
    }
}
