use std::time::{Duration, Instant};

use super::{Message, Model, RepaintGuard, WELCOME, update};
use crate::config::{ConfigFlags, EditorConfig};
use crate::editor::Direction;
use crate::matcher::ParenOutcome;

fn type_str(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        model = update(model, Message::InsertChar(ch));
    }
    model
}

/// Config with the repaint window collapsed, so arrow moves never get
/// suppressed by wall-clock timing inside a test.
fn instant_config() -> EditorConfig {
    EditorConfig::from_flags(&ConfigFlags {
        repaint_window_ms: Some(0),
        ..ConfigFlags::default()
    })
}

// --- Welcome display ---

#[test]
fn test_model_starts_with_welcome() {
    let model = Model::default();
    assert_eq!(model.display(), WELCOME);
    assert!(model.is_pristine());
}

#[test]
fn test_focus_and_blur_keep_welcome() {
    let model = update(Model::default(), Message::Blur);
    assert_eq!(model.display(), WELCOME);
    let model = update(model, Message::Focus);
    assert_eq!(model.display(), WELCOME);
    assert!(model.is_pristine());
}

#[test]
fn test_first_insert_dismisses_welcome() {
    let model = update(Model::default(), Message::InsertChar('a'));
    assert!(!model.is_pristine());
    assert_eq!(
        model.display(),
        r#"<p>a<span id="caret" class="blinking"> </span></p>"#
    );
}

// --- Editing ---

#[test]
fn test_typing_builds_text_and_moves_caret() {
    let model = type_str(Model::default(), "(foo)");
    assert_eq!(model.buffer.text(), "(foo)");
    assert_eq!(model.buffer.caret(), 5);
}

#[test]
fn test_typing_balanced_parens_highlights_match() {
    let model = type_str(Model::default(), "(foo)");
    assert_eq!(model.paren(), Some(ParenOutcome::Matched));
    assert!(model.display().contains(r#"<span class="matched-paren">(</span>"#));
}

#[test]
fn test_typing_unbalanced_close_marks_bad() {
    let model = type_str(Model::default(), "foo)");
    assert_eq!(model.paren(), Some(ParenOutcome::Unbalanced));
    assert!(model.display().contains("bad-paren"));
}

#[test]
fn test_delete_back_updates_display() {
    let model = type_str(Model::default(), "ab");
    let model = update(model, Message::DeleteBack);
    assert_eq!(model.buffer.text(), "a");
    assert!(model.display().starts_with("<p>a<span"));
}

#[test]
fn test_indent_inserts_configured_width() {
    let model = update(Model::default(), Message::Indent);
    assert_eq!(model.buffer.text(), "  ");
    assert_eq!(model.buffer.caret(), 2);
}

#[test]
fn test_set_text_places_caret_at_end() {
    let model = update(Model::default(), Message::SetText("(x)".to_string()));
    assert_eq!(model.buffer.caret(), 3);
    assert_eq!(model.paren(), Some(ParenOutcome::Matched));
}

#[test]
fn test_newline_splits_paragraphs() {
    let model = type_str(Model::default(), "a\nb");
    assert!(model.display().starts_with("<p>a</p><p>b"));
}

// --- Focus styling ---

#[test]
fn test_blur_removes_blink_class() {
    let model = type_str(Model::default(), "a");
    let model = update(model, Message::Blur);
    assert!(model.display().contains(r#"<span id="caret"> </span>"#));
    assert!(!model.display().contains("blinking"));
}

#[test]
fn test_refocus_restores_blink_class() {
    let model = type_str(Model::default(), "a");
    let model = update(model, Message::Blur);
    let model = update(model, Message::Focus);
    assert!(model.display().contains("blinking"));
}

#[test]
fn test_no_blink_config_never_blinks() {
    let config = EditorConfig::from_flags(&ConfigFlags {
        no_blink: true,
        ..ConfigFlags::default()
    });
    let model = type_str(Model::new(config), "a");
    assert!(model.focused);
    assert!(!model.display().contains("blinking"));
}

// --- Caret movement ---

#[test]
fn test_arrow_move_repaints_with_open_window() {
    let model = type_str(Model::new(instant_config()), "ab");
    let model = update(model, Message::MoveCaret(Direction::Left));
    assert_eq!(model.buffer.caret(), 1);
    assert!(
        model
            .display()
            .contains(r#"<span id="caret" class="blinking">b</span>"#)
    );
}

#[test]
fn test_arrow_move_suppressed_inside_window() {
    let config = EditorConfig::from_flags(&ConfigFlags {
        repaint_window_ms: Some(60_000),
        ..ConfigFlags::default()
    });
    let model = type_str(Model::new(config), "abc");
    let model = update(model, Message::MoveCaret(Direction::Left));
    assert_eq!(model.buffer.caret(), 2, "first move lands");
    let model = update(model, Message::MoveCaret(Direction::Left));
    assert_eq!(model.buffer.caret(), 2, "repeat inside the window is dropped");
}

#[test]
fn test_set_caret_mid_token_wraps_char() {
    let model = type_str(Model::new(instant_config()), "(foo)");
    let model = update(model, Message::SetCaret(2));
    assert!(
        model
            .display()
            .contains(r#"(f<span id="caret" class="blinking">o</span>o)"#)
    );
    assert_eq!(model.paren(), None);
}

#[test]
fn test_home_and_end_travel_the_line() {
    let model = type_str(Model::new(instant_config()), "abc");
    let model = update(model, Message::MoveHome);
    assert_eq!(model.buffer.caret(), 0);
    let model = update(model, Message::MoveEnd);
    assert_eq!(model.buffer.caret(), 3);
}

// --- Custom keywords ---

#[test]
fn test_config_keywords_reach_the_classifier() {
    let config = EditorConfig::from_flags(&ConfigFlags {
        keywords: vec!["frob".to_string()],
        ..ConfigFlags::default()
    });
    let model = type_str(Model::new(config), "frob");
    assert!(model.display().contains(r#"<span class="keyword">frob"#));
}

// --- Repaint guard ---

#[test]
fn test_guard_allows_first_request() {
    let mut guard = RepaintGuard::new(Duration::from_millis(10));
    assert!(guard.allow(Instant::now()));
}

#[test]
fn test_guard_denies_inside_window_and_rearms_after() {
    let mut guard = RepaintGuard::new(Duration::from_millis(10));
    let start = Instant::now();
    assert!(guard.allow(start));
    assert!(!guard.allow(start + Duration::from_millis(5)));
    assert!(guard.allow(start + Duration::from_millis(15)));
}

#[test]
fn test_guard_with_zero_window_always_allows() {
    let mut guard = RepaintGuard::new(Duration::ZERO);
    let start = Instant::now();
    assert!(guard.allow(start));
    assert!(guard.allow(start));
}
