//! The rendered node tree.
//!
//! This module materializes a display markup string into an explicit
//! in-memory structure: a root container holding paragraphs of classified
//! spans and text leaves. Nodes expose text content, parent, and sibling
//! navigation, which is everything the bracket matcher needs, so the search
//! can be exercised without any real rendering surface.
//!
//! The tree is rebuilt wholesale on every render pass and mutated only by
//! the two paren-highlight insertions.

mod builder;
mod node;

pub use node::{NodeId, NodeKind, RenderTree};

use thiserror::Error;

/// Errors from building or decorating a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error(transparent)]
    Markup(#[from] crate::markup::MarkupError),
    #[error("<p> may only open at the top level")]
    MisplacedParagraph,
    #[error("content outside any paragraph")]
    MisplacedContent,
    #[error("closing tag without a matching open")]
    UnbalancedClose,
    #[error("unclosed element at end of markup")]
    UnclosedElement,
    #[error("only text nodes can be decorated")]
    DecorateNonText,
    #[error("node is detached from the tree")]
    DetachedNode,
    #[error("range {start}..{end} outside node text of length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}
