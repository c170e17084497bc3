//! Build a [`RenderTree`] from display markup.

use crate::markup::{self, MarkupEvent, MarkupScanner};

use super::node::{NodeKind, RenderTree};
use super::TreeError;

impl RenderTree {
    /// Materialize display markup into a tree.
    ///
    /// Adjacent text runs coalesce into maximal text leaves and escapes are
    /// resolved, so text content matches what a display surface would show.
    pub fn parse(markup: &str) -> Result<Self, TreeError> {
        let mut tree = Self::empty();
        let mut cursor = tree.root();
        for event in MarkupScanner::new(markup) {
            match event? {
                MarkupEvent::OpenParagraph => {
                    if cursor != tree.root() {
                        return Err(TreeError::MisplacedParagraph);
                    }
                    cursor = tree.push_node(NodeKind::Paragraph, cursor);
                }
                MarkupEvent::CloseParagraph => {
                    if !matches!(tree.kind(cursor), NodeKind::Paragraph) {
                        return Err(TreeError::UnbalancedClose);
                    }
                    cursor = tree.parent(cursor).ok_or(TreeError::UnbalancedClose)?;
                }
                MarkupEvent::OpenSpan(kind) => {
                    if cursor == tree.root() {
                        return Err(TreeError::MisplacedContent);
                    }
                    cursor = tree.push_node(NodeKind::Span(kind), cursor);
                }
                MarkupEvent::CloseSpan => {
                    if !matches!(tree.kind(cursor), NodeKind::Span(_)) {
                        return Err(TreeError::UnbalancedClose);
                    }
                    cursor = tree.parent(cursor).ok_or(TreeError::UnbalancedClose)?;
                }
                MarkupEvent::Text(raw) => {
                    if cursor == tree.root() {
                        return Err(TreeError::MisplacedContent);
                    }
                    tree.append_text(cursor, &markup::unescape_text(raw));
                }
            }
        }
        if cursor != tree.root() {
            return Err(TreeError::UnclosedElement);
        }
        Ok(tree)
    }
}
