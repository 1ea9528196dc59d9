//! Menu nodes
//!
//! A [`Menu`] owns its options (name → [`Action`]) and the per-render state
//! the renderer and the session need: the hotkey table, the selection cursor
//! and the size of the last printed block. Submenus are not stored here; the
//! [`MenuTree`](crate::tree::MenuTree) owns the parent/child relation.
//!
//! # Module Structure
//!
//! - `action` - the callback trait bound to options
//! - `hotkey` - mnemonic letter assignment
//! - `prompt` - static or generated prompt text

mod action;
pub mod hotkey;
mod prompt;

use std::collections::HashMap;
use std::fmt;

use crate::tree::MenuTree;

pub use action::{Action, WithTree};
pub use hotkey::{HotkeyTable, EXIT_KEY};
pub use prompt::{prompt_lines, PromptSource};

/// A named menu with ordered options.
pub struct Menu {
    name: String,
    prompt: PromptSource,
    /// Last text produced by a dynamic prompt
    rendered_prompt: String,
    options: HashMap<String, Box<dyn Action>>,
    /// Display and selection order; mirrors the keys of `options` except
    /// while an action is lent out to run
    order: Vec<String>,
    pub(crate) hotkeys: HotkeyTable,
    pub(crate) selection: usize,
    pub(crate) last_render_lines: usize,
    pub(crate) longest_line: usize,
}

impl Menu {
    /// Create a menu with a static prompt.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::with_prompt(name, PromptSource::Static(prompt.into()))
    }

    /// Create a menu whose prompt is generated on every render.
    pub fn with_prompt_fn(name: impl Into<String>, f: impl Fn() -> String + 'static) -> Self {
        Self::with_prompt(name, PromptSource::dynamic(f))
    }

    pub fn with_prompt(name: impl Into<String>, prompt: PromptSource) -> Self {
        Self {
            name: name.into(),
            prompt,
            rendered_prompt: String::new(),
            options: HashMap::new(),
            order: Vec::new(),
            hotkeys: HotkeyTable::new(),
            selection: 0,
            last_render_lines: 0,
            longest_line: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prompt as last shown.
    ///
    /// Static prompts return their text; dynamic prompts return whatever the
    /// provider produced on the most recent render (empty before the first).
    pub fn prompt(&self) -> &str {
        match &self.prompt {
            PromptSource::Static(text) => text,
            PromptSource::Dynamic(_) => &self.rendered_prompt,
        }
    }

    pub fn prompt_source(&self) -> &PromptSource {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<PromptSource>) {
        self.prompt = prompt.into();
        self.rendered_prompt.clear();
    }

    /// Evaluate the prompt for a render, caching dynamic output.
    pub(crate) fn resolve_prompt(&mut self) -> String {
        let text = self.prompt.text();
        if self.prompt.is_dynamic() {
            self.rendered_prompt = text.clone();
        }
        text
    }

    /// Bind `name` to `action`.
    ///
    /// An existing binding is replaced and the name moves to the end of the
    /// display order.
    pub fn add_option(&mut self, name: impl Into<String>, action: impl Action + 'static) {
        let name = name.into();
        self.order.retain(|n| n != &name);
        self.order.push(name.clone());
        self.options.insert(name, Box::new(action));
    }

    /// Bind `name` to a callback that can edit the tree while a session
    /// runs, e.g. to jump to another menu or change a prompt.
    pub fn add_tree_option(
        &mut self,
        name: impl Into<String>,
        f: impl FnMut(&mut MenuTree) + 'static,
    ) {
        self.add_option(name, WithTree(f));
    }

    /// Remove an option. Returns whether it existed.
    pub fn delete_option(&mut self, name: &str) -> bool {
        let before = self.order.len();
        self.order.retain(|n| n != name);
        self.options.remove(name);
        self.order.len() != before
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.order.iter().any(|n| n == name)
    }

    /// Option names in display order
    pub fn option_names(&self) -> &[String] {
        &self.order
    }

    pub fn option_count(&self) -> usize {
        self.order.len()
    }

    /// Lend out the action bound to `name` so it can run with the whole
    /// tree borrowed. The name keeps its place in the display order.
    pub(crate) fn take_action(&mut self, name: &str) -> Option<Box<dyn Action>> {
        self.options.remove(name)
    }

    /// Return a lent action, unless it was deleted or rebound meanwhile.
    pub(crate) fn restore_action(&mut self, name: &str, action: Box<dyn Action>) {
        if self.has_option(name) && !self.options.contains_key(name) {
            self.options.insert(name.to_string(), action);
        }
    }

    /// Index into `[options..., submenus...]` of the highlighted item
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Hotkeys from the most recent render
    pub fn hotkeys(&self) -> &HotkeyTable {
        &self.hotkeys
    }

    /// Terminal lines occupied by the last render, 0 if nothing to erase
    pub fn last_render_lines(&self) -> usize {
        self.last_render_lines
    }

    pub fn longest_line(&self) -> usize {
        self.longest_line
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("name", &self.name)
            .field("prompt", &self.prompt)
            .field("options", &self.order)
            .field("selection", &self.selection)
            .field("last_render_lines", &self.last_render_lines)
            .finish_non_exhaustive()
    }
}
