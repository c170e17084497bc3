//! Caret placement in the rendered token sequence.
//!
//! Maps a linear caret offset back to a token/char boundary and splices a
//! caret marker into that token's rendered form. The input sequence is left
//! untouched; a decorated copy is returned.

use crate::markup;
use crate::syntax::Token;

/// Return a copy of `tokens` with a caret marker spliced into the token
/// containing `caret` (a char offset, clamped to the text length).
///
/// Placement, in priority order: a paragraph-break token gets the marker
/// appended after the break when the caret sits exactly at its end and
/// prepended otherwise; a caret at a token's end offset gets a space-wrapping
/// marker appended after the rendered content; anywhere else the exact source
/// char under the caret is wrapped in place, preserving the surrounding
/// slices verbatim.
pub fn insert_caret(tokens: &[Token], caret: usize, focused: bool) -> Vec<Token> {
    let mut decorated = tokens.to_vec();
    let text_end = decorated.last().map_or(0, Token::end_offset);
    let caret = caret.min(text_end);

    let mut index = 0;
    for next in 1..decorated.len() {
        if decorated[index].end_offset() > caret {
            break;
        }
        index = next;
    }
    let token = &mut decorated[index];
    let end_offset = token.end_offset();

    if token.is_paragraph_break() {
        let rendered = if end_offset == caret {
            format!("{}{}", markup::PARAGRAPH_BREAK, markup::caret_span(focused, " "))
        } else {
            format!("{}{}", markup::caret_span(focused, " "), markup::PARAGRAPH_BREAK)
        };
        token.set_rendered(rendered);
    } else if end_offset == caret {
        let mut rendered = token.rendered().to_string();
        rendered.push_str(&markup::caret_span(focused, " "));
        token.set_rendered(rendered);
    } else {
        let offset = caret - token.start_offset();
        let chars: Vec<char> = token.original().chars().collect();
        let wrapped = chars.get(offset).map_or_else(|| " ".to_string(), char::to_string);
        let left: String = chars[..offset].iter().collect();
        let right: String = chars[(offset + 1).min(chars.len())..].iter().collect();
        let splice = format!(
            "{}{}{}",
            markup::escape_text(&left),
            markup::caret_span(focused, &markup::escape_text(&wrapped)),
            markup::escape_text(&right)
        );
        let escaped_original = markup::escape_text(token.original());
        let rendered = token.rendered().replacen(&escaped_original, &splice, 1);
        token.set_rendered(rendered);
    }
    decorated
}
