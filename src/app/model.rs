use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::EditorConfig;
use crate::editor::InputBuffer;
use crate::matcher::ParenOutcome;
use crate::render;
use crate::syntax::KeywordTable;

/// Markup shown until the first editing or caret message arrives.
pub const WELCOME: &str =
    "<p>Welcome to schemelight!</p><p>Start typing to dismiss this message.</p>";

/// Rate limit for repeated arrow-key repaints.
///
/// A granted repaint arms the window; further requests inside it are denied,
/// so a held arrow key does not trigger a full pass per repeat.
#[derive(Debug, Clone)]
pub struct RepaintGuard {
    window: Duration,
    last: Option<Instant>,
}

impl RepaintGuard {
    pub const fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Whether an arrow repaint may run at `now`.
    pub fn allow(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            if now.saturating_duration_since(last) < self.window {
                return false;
            }
        }
        self.last = Some(now);
        true
    }
}

/// The complete editor state.
///
/// Owns the input buffer, the focus flag, and the latest display markup,
/// which is replaced atomically after each successful render pass.
pub struct Model {
    /// Input text and caret.
    pub buffer: InputBuffer,
    /// Whether the input surface has focus.
    pub focused: bool,
    pub(super) guard: RepaintGuard,
    config: EditorConfig,
    keywords: KeywordTable,
    view: String,
    paren: Option<ParenOutcome>,
    pristine: bool,
}

impl Model {
    pub fn new(config: EditorConfig) -> Self {
        let keywords = config.keyword_table();
        Self {
            buffer: InputBuffer::new(),
            focused: true,
            guard: RepaintGuard::new(config.repaint_window),
            config,
            keywords,
            view: WELCOME.to_string(),
            paren: None,
            pristine: true,
        }
    }

    /// Current display markup.
    pub fn display(&self) -> &str {
        &self.view
    }

    /// Outcome of the last close-paren probe.
    pub const fn paren(&self) -> Option<ParenOutcome> {
        self.paren
    }

    /// Whether the welcome display is still up.
    pub const fn is_pristine(&self) -> bool {
        self.pristine
    }

    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Recompute the display from the current buffer, caret, and focus.
    ///
    /// A failed pass keeps the previous display; the markup is only ever
    /// replaced whole.
    pub(super) fn refresh(&mut self) {
        self.pristine = false;
        let blinking = self.focused && self.config.blink;
        match render::render_with(
            &self.buffer.text(),
            self.buffer.caret(),
            blinking,
            &self.keywords,
        ) {
            Ok(rendered) => {
                self.view = rendered.markup;
                self.paren = rendered.paren;
            }
            Err(err) => warn!(%err, "render pass failed, keeping previous display"),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("buffer", &self.buffer)
            .field("focused", &self.focused)
            .field("pristine", &self.pristine)
            .field("paren", &self.paren)
            .finish()
    }
}
