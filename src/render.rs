//! The per-event render driver.
//!
//! One synchronous pass per input event: tokenize, place the caret, assemble
//! paragraphs, materialize the tree, probe for a close paren, and serialize.
//! The returned markup replaces the displayed content wholesale, so a pass
//! has no partial side effects.

use tracing::{debug, trace, trace_span};

use crate::caret::insert_caret;
use crate::matcher::{self, ParenOutcome};
use crate::syntax::{KeywordTable, Token, tokenize_with};
use crate::tree::{RenderTree, TreeError};

/// A completed render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Display markup, to be set wholesale by the host.
    pub markup: String,
    /// Close-paren probe outcome, when one ran.
    pub paren: Option<ParenOutcome>,
}

/// Run one full pass with the built-in keyword set.
pub fn render(text: &str, caret: usize, focused: bool) -> Result<Rendered, TreeError> {
    render_with(text, caret, focused, &KeywordTable::default())
}

/// Run one full pass against a specific keyword table.
pub fn render_with(
    text: &str,
    caret: usize,
    focused: bool,
    keywords: &KeywordTable,
) -> Result<Rendered, TreeError> {
    let _span = trace_span!("render_pass", chars = text.chars().count()).entered();
    let tokens = tokenize_with(text, keywords);
    trace!(tokens = tokens.len(), "tokenized input");
    let decorated = insert_caret(&tokens, caret, focused);
    let assembled = assemble(&decorated);
    let mut tree = RenderTree::parse(&assembled)?;
    let paren = matcher::highlight_parens(&mut tree)?;
    if let Some(outcome) = paren {
        debug!(?outcome, "close paren probe");
    }
    Ok(Rendered {
        markup: tree.to_markup(),
        paren,
    })
}

/// Join rendered token forms into paragraph markup. Empty paragraphs pad to
/// a single space so they keep a visible line.
fn assemble(tokens: &[Token]) -> String {
    let mut markup = String::from("<p>");
    for token in tokens {
        markup.push_str(token.rendered());
    }
    markup.push_str("</p>");
    markup.replace("<p></p>", "<p> </p>")
}
