// Configuration type definitions

use serde::Deserialize;

/// Greeting panel copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            greeting: default_greeting(),
            tagline: default_tagline(),
        }
    }
}

/// One filter chip: a stable name, a display label, and its starting value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub default: bool,
}

impl FilterConfig {
    /// Display label, falling back to the filter name
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen: ScreenConfig::default(),
            suggestions: default_suggestions(),
            models: default_models(),
            filters: default_filters(),
        }
    }
}

fn default_greeting() -> String {
    "Hey, Nirmala is here!".to_string()
}

fn default_tagline() -> String {
    "Let me help you find clarity in seconds.".to_string()
}

fn default_suggestions() -> Vec<String> {
    [
        "What’s the weather like today?",
        "What’s trending on X (Twitter) right now?",
        "Summarize a document for me",
        "Help me write a polite email",
        "Got any movie recommendations?",
    ]
    .map(String::from)
    .to_vec()
}

fn default_models() -> Vec<String> {
    ["GPT 4.1 mini", "GPT 4.1", "GPT-4o", "GPT-4.1 Flash"]
        .map(String::from)
        .to_vec()
}

fn default_filters() -> Vec<FilterConfig> {
    vec![
        FilterConfig {
            name: "deep".to_string(),
            label: Some("Deep Think".to_string()),
            default: true,
        },
        FilterConfig {
            name: "search".to_string(),
            label: Some("Search".to_string()),
            default: false,
        },
    ]
}
