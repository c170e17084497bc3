use std::time::Instant;

use tracing::trace;

use crate::app::Model;
use crate::editor::{Direction, InputBuffer};

/// All events the controller reacts to.
///
/// These are the host's change, keyboard, and focus notifications, already
/// translated out of any concrete UI event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Type a character at the caret
    InsertChar(char),
    /// Insert a string at the caret (paste)
    InsertStr(String),
    /// Delete the character before the caret (Backspace)
    DeleteBack,
    /// Delete the character at the caret (Delete)
    DeleteForward,
    /// Move the caret one step (arrow keys)
    MoveCaret(Direction),
    /// Move the caret to the start of its line (Home)
    MoveHome,
    /// Move the caret to the end of its line (End)
    MoveEnd,
    /// Place the caret at an absolute char offset (mouse click)
    SetCaret(usize),
    /// Insert one indent step, as the host does for a tab press
    Indent,
    /// Replace the whole buffer, caret at the end
    SetText(String),
    /// The input surface gained focus
    Focus,
    /// The input surface lost focus
    Blur,
}

/// Apply a message and re-render the display when it changed.
///
/// Every state-changing message runs one full synchronous pass. Arrow-key
/// moves inside the repaint window are dropped entirely, matching the host
/// swallowing the key repeat. Focus changes alone restyle the caret but do
/// not dismiss the welcome display.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::InsertChar(ch) => {
            model.buffer.insert_char(ch);
            model.refresh();
        }
        Message::InsertStr(text) => {
            model.buffer.insert_str(&text);
            model.refresh();
        }
        Message::DeleteBack => {
            model.buffer.delete_back();
            model.refresh();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
            model.refresh();
        }
        Message::MoveCaret(direction) => {
            if model.guard.allow(Instant::now()) {
                model.buffer.move_caret(direction);
                model.refresh();
            } else {
                trace!(?direction, "arrow repaint suppressed");
            }
        }
        Message::MoveHome => {
            model.buffer.move_home();
            model.refresh();
        }
        Message::MoveEnd => {
            model.buffer.move_end();
            model.refresh();
        }
        Message::SetCaret(offset) => {
            model.buffer.set_caret(offset);
            model.refresh();
        }
        Message::Indent => {
            let indent = model.config().indent();
            model.buffer.insert_str(&indent);
            model.refresh();
        }
        Message::SetText(text) => {
            model.buffer = InputBuffer::from_text(&text);
            model.buffer.move_to_end();
            model.refresh();
        }
        Message::Focus => {
            model.focused = true;
            if !model.is_pristine() {
                model.refresh();
            }
        }
        Message::Blur => {
            model.focused = false;
            if !model.is_pristine() {
                model.refresh();
            }
        }
    }
    model
}
