//! Rope-backed input buffer with a linear caret.
//!
//! The thin editing layer underneath the controller: the rendering core only
//! ever sees the buffer's full text and the caret's char offset.

mod buffer;

pub use buffer::{Direction, InputBuffer};
