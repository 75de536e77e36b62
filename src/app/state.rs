use crate::composer::{ComposerState, Filter, FilterSet, ModelPicker};
use crate::config::Config;
use crate::intent::UserIntent;
use crate::layout::LayoutRegions;
use crate::suggestions::SuggestionList;

use super::editor_state::EditorState;

/// Which component has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SuggestionList,
    PromptEditor,
    FilterChips,
    ModelSelector,
}

impl Focus {
    /// Tab order across the screen, top to bottom
    pub fn next(self) -> Self {
        match self {
            Focus::SuggestionList => Focus::PromptEditor,
            Focus::PromptEditor => Focus::FilterChips,
            Focus::FilterChips => Focus::ModelSelector,
            Focus::ModelSelector => Focus::SuggestionList,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::SuggestionList => Focus::ModelSelector,
            Focus::PromptEditor => Focus::SuggestionList,
            Focus::FilterChips => Focus::PromptEditor,
            Focus::ModelSelector => Focus::FilterChips,
        }
    }
}

/// Application state
pub struct App {
    pub greeting: String,
    pub tagline: String,
    pub suggestions: SuggestionList,
    pub composer: ComposerState,
    pub editor: EditorState,
    pub focus: Focus,
    pub chip_cursor: usize,
    pub regions: LayoutRegions,
    pub should_quit: bool,
    pub submitted: bool,
}

impl App {
    /// Create a new App instance from loaded configuration
    pub fn new(config: &Config) -> Self {
        let filters = config
            .filters
            .iter()
            .map(|filter| Filter::new(&filter.name, filter.label(), filter.default))
            .collect();
        let composer = ComposerState::new(
            FilterSet::new(filters),
            ModelPicker::new(config.models.clone()),
        );

        Self {
            greeting: config.screen.greeting.clone(),
            tagline: config.screen.tagline.clone(),
            suggestions: SuggestionList::new(config.suggestions.clone()),
            composer,
            editor: EditorState::new(),
            focus: Focus::SuggestionList, // Start on the suggestion list
            chip_cursor: 0,
            regions: LayoutRegions::default(),
            should_quit: false,
            submitted: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The composed intent, present only when the user submitted
    pub fn intent(&self) -> Option<UserIntent> {
        self.submitted
            .then(|| UserIntent::snapshot(&self.composer))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
