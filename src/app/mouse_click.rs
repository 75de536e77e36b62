//! Mouse click handling
//!
//! Maps click positions to the regions recorded during render and routes
//! them onto the same activation/toggle paths the keyboard uses, so the
//! resulting state change never depends on the input modality.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::layout::{Region, region_at};

use super::state::{App, Focus};

/// Handle a raw mouse event; only primary-button presses do anything
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        let region = region_at(&app.regions, mouse.column, mouse.row);
        handle_click(app, region);
    }
}

/// Handle a primary-button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::SuggestionItem(index)) => click_suggestion_item(app, index),
        Some(Region::PromptEditor) => {
            app.focus = Focus::PromptEditor;
        }
        Some(Region::FilterChip(index)) => click_filter_chip(app, index),
        Some(Region::ModelSelector) => click_model_selector(app),
        // Clicks on empty space change nothing
        None => {}
    }
}

fn click_suggestion_item(app: &mut App, index: usize) {
    app.focus = Focus::SuggestionList;
    app.suggestions.set_cursor(index);
    app.activate_suggestion(index);
}

fn click_filter_chip(app: &mut App, index: usize) {
    app.focus = Focus::FilterChips;
    if index < app.composer.filters().len() {
        app.chip_cursor = index;
    }
    app.toggle_chip(index);
}

fn click_model_selector(app: &mut App) {
    app.focus = Focus::ModelSelector;
    app.composer.select_next_model();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
