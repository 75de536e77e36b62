mod editor_state;
mod events;
mod mouse_click;
mod render;
mod state;

// Re-export public types
pub use editor_state::EditorState;
pub use state::{App, Focus};
