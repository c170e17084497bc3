//! Backward paren matching over the rendered tree.
//!
//! The search starts from the character immediately left of the caret and
//! walks text content backward, hopping previous-sibling and parent links,
//! counting close parens so nested pairs are skipped. The probe decorates
//! the triggering close paren and, when found, its partner.

use tracing::trace;

use crate::markup::SpanKind;
use crate::tree::{NodeId, RenderTree, TreeError};

/// Location of a matching opening parenthesis: a text leaf and the char
/// offset of the `(` within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenMatch {
    pub node: NodeId,
    pub offset: usize,
}

/// What a close-paren probe concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenOutcome {
    /// A partner was found; both parens carry the matched decoration.
    Matched,
    /// No partner exists; the close paren carries the bad decoration.
    Unbalanced,
}

/// Search backward from `start_offset` within `start`'s text content for the
/// opening paren that balances a close paren.
///
/// A `)` deepens the nesting count, a `(` under a nonzero count closes a
/// nested pair, and a `(` at count zero is the match. When a node's content
/// is exhausted the walk continues at the previous node in content order and
/// scans it from its end. Offsets past a node's content clamp to its last
/// char. Returns `None` when the walk reaches the display container.
pub fn find_matching_open(
    tree: &RenderTree,
    start: NodeId,
    start_offset: usize,
) -> Option<ParenMatch> {
    let mut depth = 0usize;
    let mut node = start;
    let mut from = Some(start_offset);
    loop {
        let content: Vec<char> = tree.text_content(node).chars().collect();
        let begin_at = from.take();
        if !content.is_empty() {
            let upper = begin_at.map_or(content.len() - 1, |f| f.min(content.len() - 1));
            for index in (0..=upper).rev() {
                match content[index] {
                    ')' => depth += 1,
                    '(' if depth > 0 => depth -= 1,
                    '(' => {
                        return tree
                            .locate_content_char(node, index)
                            .map(|(leaf, offset)| ParenMatch { node: leaf, offset });
                    }
                    _ => {}
                }
            }
        }
        node = tree.prev_in_content_order(node)?;
    }
}

/// Probe the character left of the caret and apply paren decorations.
///
/// Returns `None` without touching the tree when the caret has no closing
/// paren on its left. Otherwise wraps the close paren (first) and its partner
/// (second, at the position captured before any mutation) in matched-paren
/// spans; an unbalanced close gets the bad variant instead.
pub fn highlight_parens(tree: &mut RenderTree) -> Result<Option<ParenOutcome>, TreeError> {
    let Some((node, ch)) = tree.char_left_of_caret() else {
        return Ok(None);
    };
    if ch != ')' {
        return Ok(None);
    }
    let content_len = tree.text_content(node).chars().count();
    let open = if content_len >= 2 {
        find_matching_open(tree, node, content_len - 2)
    } else {
        tree.prev_in_content_order(node)
            .and_then(|prev| find_matching_open(tree, prev, usize::MAX))
    };
    trace!(found = open.is_some(), "close paren probe");

    let Some((close_leaf, close_offset)) = tree.locate_content_char(node, content_len - 1) else {
        return Ok(None);
    };
    tree.wrap_range(
        close_leaf,
        close_offset,
        close_offset + 1,
        SpanKind::MatchedParen {
            bad: open.is_none(),
        },
    )?;
    match open {
        Some(found) => {
            // The captured position stays valid: the close wrap only split
            // text at or right of the close paren.
            tree.wrap_range(
                found.node,
                found.offset,
                found.offset + 1,
                SpanKind::MatchedParen { bad: false },
            )?;
            Ok(Some(ParenOutcome::Matched))
        }
        None => Ok(Some(ParenOutcome::Unbalanced)),
    }
}
