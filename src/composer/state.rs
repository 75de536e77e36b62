use super::filters::FilterSet;
use super::models::ModelPicker;

/// The three-field record of the user's in-progress intent
///
/// Owns the prompt text, the filter set, and the model selection. All
/// mutation goes through the methods here; the rendering layer only ever
/// reads a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    prompt: String,
    filters: FilterSet,
    models: ModelPicker,
}

impl ComposerState {
    pub fn new(filters: FilterSet, models: ModelPicker) -> Self {
        Self {
            prompt: String::new(),
            filters,
            models,
        }
    }

    /// The current prompt text, raw and untrimmed
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn models(&self) -> &ModelPicker {
        &self.models
    }

    /// The currently selected model identifier
    pub fn model(&self) -> &str {
        self.models.selected()
    }

    /// Replace the prompt wholesale
    ///
    /// Any string is accepted, including empty. Suggestion activation and
    /// free-text edits both come through here; neither appends or merges.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Flip a named filter; unknown names are rejected as a no-op
    pub fn toggle_filter(&mut self, name: &str) -> bool {
        self.filters.toggle(name)
    }

    /// Flip the filter at a chip position; out-of-range is a no-op
    pub fn toggle_filter_at(&mut self, index: usize) -> bool {
        self.filters.toggle_at(index)
    }

    /// Select a model by identifier; non-members leave the selection alone
    pub fn select_model(&mut self, id: &str) -> bool {
        self.models.select(id)
    }

    pub fn select_next_model(&mut self) {
        self.models.select_next();
    }

    pub fn select_previous_model(&mut self) {
        self.models.select_previous();
    }
}
