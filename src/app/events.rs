use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::{App, Focus};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                super::mouse_click::handle_mouse(self, mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return; // Key was handled globally
        }

        // Not a global key, delegate to the focused component
        match self.focus {
            Focus::SuggestionList => self.handle_suggestion_list_key(key),
            Focus::PromptEditor => self.handle_prompt_editor_key(key),
            Focus::FilterChips => self.handle_filter_chips_key(key),
            Focus::ModelSelector => self.handle_model_selector_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit without composing anything
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Ctrl+Enter / Ctrl+S: Submit the composed intent and exit
        // Note: Some terminals don't deliver Ctrl+Enter as a distinct key,
        // so Ctrl+S is provided as a universal fallback.
        if (key.code == KeyCode::Enter || key.code == KeyCode::Char('s'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.submitted = true;
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: Cycle focus across the screen
        if key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::CONTROL) {
            self.focus = self.focus.next();
            return true;
        }
        if key.code == KeyCode::BackTab {
            self.focus = self.focus.previous();
            return true;
        }

        // q / Esc: Exit, but never while typing in the prompt editor
        if self.focus != Focus::PromptEditor
            && !key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            self.should_quit = true;
            return true;
        }

        false // Key not handled
    }

    /// Handle keys when the suggestion list is focused
    ///
    /// Enter and Space both activate the focused item, same as a click.
    /// Space is consumed here so it never leaks into the prompt editor.
    fn handle_suggestion_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.suggestions.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.suggestions.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.suggestions.cursor() {
                    self.activate_suggestion(index);
                }
            }
            _ => {}
        }
    }

    /// Handle keys when the prompt editor is focused
    fn handle_prompt_editor_key(&mut self, key: KeyEvent) {
        // ESC leaves the editor instead of quitting
        if key.code == KeyCode::Esc {
            self.focus = Focus::SuggestionList;
            return;
        }

        // Everything else goes to the textarea, then the composer's prompt
        // is re-synced so it always mirrors the editor contents
        self.editor.textarea.input(key);
        self.composer.set_prompt(self.editor.text());
    }

    /// Handle keys when the filter chip row is focused
    fn handle_filter_chips_key(&mut self, key: KeyEvent) {
        let chip_count = self.composer.filters().len();
        if chip_count == 0 {
            return;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.chip_cursor = self.chip_cursor.checked_sub(1).unwrap_or(chip_count - 1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.chip_cursor = (self.chip_cursor + 1) % chip_count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_chip(self.chip_cursor);
            }
            _ => {}
        }
    }

    /// Handle keys when the model selector is focused
    ///
    /// Cycling only ever lands on catalog members, so the selection
    /// invariant holds without any validation here.
    fn handle_model_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.composer.select_next_model();
            }
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.composer.select_previous_model();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.composer.select_next_model(),
            _ => {}
        }
    }

    /// Activate a suggestion item: replace the prompt wholesale
    ///
    /// Shared by the keyboard and pointer paths so both modalities produce
    /// the identical state change. An out-of-range index is a no-op.
    pub fn activate_suggestion(&mut self, index: usize) {
        let Some(text) = self.suggestions.get(index) else {
            log::debug!("Ignoring activation of out-of-range suggestion {index}");
            return;
        };
        let text = text.to_string();
        self.composer.set_prompt(text.clone());
        self.editor.set_text(&text);
    }

    /// Toggle the filter chip at a position
    ///
    /// Shared by the keyboard and pointer paths.
    pub fn toggle_chip(&mut self, index: usize) {
        self.composer.toggle_filter_at(index);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
