//! Menu prompts: fixed text or a function evaluated on every render.

use std::fmt;

/// Where a menu's prompt text comes from.
pub enum PromptSource {
    /// Fixed text
    Static(String),
    /// Called once per render
    Dynamic(Box<dyn Fn() -> String>),
}

impl PromptSource {
    /// Build a prompt from both possible inputs; the provider wins when present.
    pub fn resolve(prompt: impl Into<String>, provider: Option<Box<dyn Fn() -> String>>) -> Self {
        match provider {
            Some(f) => PromptSource::Dynamic(f),
            None => PromptSource::Static(prompt.into()),
        }
    }

    pub fn dynamic(f: impl Fn() -> String + 'static) -> Self {
        PromptSource::Dynamic(Box::new(f))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, PromptSource::Dynamic(_))
    }

    /// Current prompt text. Evaluates the provider for dynamic prompts.
    pub fn text(&self) -> String {
        match self {
            PromptSource::Static(text) => text.clone(),
            PromptSource::Dynamic(f) => f(),
        }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        PromptSource::Static(String::new())
    }
}

impl From<&str> for PromptSource {
    fn from(text: &str) -> Self {
        PromptSource::Static(text.to_string())
    }
}

impl From<String> for PromptSource {
    fn from(text: String) -> Self {
        PromptSource::Static(text)
    }
}

impl fmt::Debug for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSource::Static(text) => f.debug_tuple("Static").field(text).finish(),
            PromptSource::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Split prompt text into display lines.
///
/// `\r\n` and `\n\r` both collapse to a single break. An empty prompt has no
/// lines at all.
pub fn prompt_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.replace("\r\n", "\n")
        .replace("\n\r", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}
