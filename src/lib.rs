//! nirmala - chat assistant front screen in the terminal
//!
//! A greeting panel, a list of suggested prompts, and a composer (free-text
//! prompt, filter chips, model picker). The screen's only job is to let the
//! user put together a single outgoing intent; dispatching that intent to an
//! assistant backend is left to whoever consumes the JSON printed on exit.

pub mod app;
pub mod composer;
pub mod config;
pub mod error;
pub mod intent;
pub mod layout;
pub mod suggestions;
