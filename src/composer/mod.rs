//! Composer state: the user's in-progress intent
//!
//! Single source of truth for the three mutable fields of the front screen:
//! the prompt text, the filter chip set, and the model selection. Every field
//! transitions independently and unconditionally on its own action; there is
//! no sequencing dependency between them.

mod filters;
mod models;
mod state;

// Re-export public types
pub use filters::{Filter, FilterSet};
pub use models::ModelPicker;
pub use state::ComposerState;
