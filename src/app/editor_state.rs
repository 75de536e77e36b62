use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

const PROMPT_PLACEHOLDER: &str = "Let’s talk";

/// Prompt editor state
///
/// Thin wrapper around the textarea widget. The composer's prompt field is
/// the source of truth; the app re-syncs it from here after every edit and
/// pushes replacements back through `set_text`.
pub struct EditorState {
    pub textarea: TextArea<'static>,
}

impl EditorState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PROMPT_PLACEHOLDER);

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    /// The full editor contents, newline-joined
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the editor contents wholesale and park the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        let mut textarea: TextArea<'static> =
            TextArea::new(text.lines().map(String::from).collect());
        textarea.set_placeholder_text(PROMPT_PLACEHOLDER);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_is_empty() {
        let editor = EditorState::new();
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_text_after_insert() {
        let mut editor = EditorState::new();
        editor.textarea.insert_str("hello there");
        assert_eq!(editor.text(), "hello there");
    }

    #[test]
    fn test_set_text_replaces_wholesale() {
        let mut editor = EditorState::new();
        editor.textarea.insert_str("typed so far");

        editor.set_text("Got any movie recommendations?");

        assert_eq!(editor.text(), "Got any movie recommendations?");
    }

    #[test]
    fn test_set_text_cursor_lands_at_end() {
        let mut editor = EditorState::new();
        editor.set_text("abc");

        assert_eq!(editor.textarea.cursor(), (0, 3));
    }

    #[test]
    fn test_set_text_keeps_multiline_content() {
        let mut editor = EditorState::new();
        editor.set_text("line one\nline two");

        assert_eq!(editor.text(), "line one\nline two");
        assert_eq!(editor.textarea.cursor(), (1, 8));
    }
}
