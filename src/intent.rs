//! The composed outgoing intent
//!
//! Snapshot of the composer at the moment the user submits. Printing this as
//! JSON on stdout is the process boundary: dispatching it to an assistant
//! backend is the consumer's job, not this screen's.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::composer::ComposerState;

/// Prompt text, selected model, and active filters as one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIntent {
    pub prompt: String,
    pub model: String,
    pub filters: BTreeMap<String, bool>,
}

impl UserIntent {
    /// Capture the composer's current state
    pub fn snapshot(composer: &ComposerState) -> Self {
        let filters = composer
            .filters()
            .iter()
            .map(|filter| (filter.name.clone(), filter.active))
            .collect();
        Self {
            prompt: composer.prompt().to_string(),
            model: composer.model().to_string(),
            filters,
        }
    }
}
