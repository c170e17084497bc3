use ropey::Rope;

/// Direction for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope, addressed by one linear char offset.
///
/// The rendering core consumes the whole text plus a linear caret offset, so
/// unlike a line/column cursor the caret here is a single char index;
/// vertical movement derives line and column on the fly and keeps a sticky
/// column across short lines.
pub struct InputBuffer {
    rope: Rope,
    caret: usize,
    col_memory: usize,
}

impl InputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer from a string, caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: 0,
            col_memory: 0,
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Buffer length in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The caret as a char offset into the text.
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Place the caret, clamped to the buffer.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.rope.len_chars());
        self.col_memory = self.col();
    }

    /// Insert a character at the caret.
    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.caret, ch);
        self.caret += 1;
        self.col_memory = self.col();
    }

    /// Insert a string at the caret.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.rope.insert(self.caret, s);
        self.caret += s.chars().count();
        self.col_memory = self.col();
    }

    /// Delete the character before the caret (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.rope.remove(self.caret - 1..self.caret);
        self.caret -= 1;
        self.col_memory = self.col();
        true
    }

    /// Delete the character at the caret (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.caret..=self.caret);
        self.col_memory = self.col();
        true
    }

    /// Move the caret one step in the given direction.
    pub fn move_caret(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move to the start of the caret's line (Home).
    pub fn move_home(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        self.caret = self.rope.line_to_char(line);
        self.col_memory = 0;
    }

    /// Move to the end of the caret's line (End).
    pub fn move_end(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        let len = self.line_len(line);
        self.caret = self.rope.line_to_char(line) + len;
        self.col_memory = len;
    }

    /// Move to the end of the buffer.
    pub fn move_to_end(&mut self) {
        self.caret = self.rope.len_chars();
        self.col_memory = self.col();
    }

    // --- Private helpers ---

    /// Char column of the caret within its line.
    fn col(&self) -> usize {
        let line = self.rope.char_to_line(self.caret);
        self.caret - self.rope.line_to_char(line)
    }

    /// Line length in chars, excluding the line break.
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    fn move_left(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
        }
        self.col_memory = self.col();
    }

    fn move_right(&mut self) {
        if self.caret < self.rope.len_chars() {
            self.caret += 1;
        }
        self.col_memory = self.col();
    }

    fn move_up(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        if line == 0 {
            return;
        }
        let col = self.col_memory.min(self.line_len(line - 1));
        self.caret = self.rope.line_to_char(line - 1) + col;
    }

    fn move_down(&mut self) {
        let line = self.rope.char_to_line(self.caret);
        if line + 1 >= self.rope.len_lines() {
            return;
        }
        let col = self.col_memory.min(self.line_len(line + 1));
        self.caret = self.rope.line_to_char(line + 1) + col;
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("caret", &self.caret)
            .finish()
    }
}
