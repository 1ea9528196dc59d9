//! Mnemonic hotkey assignment.
//!
//! Every render clears the table and walks the menu's items in display
//! order, giving each one the first letter of its name that nobody else has
//! claimed yet. Letters are therefore only stable as long as the item list
//! does not change.

use std::collections::HashMap;

/// Reserved for leaving the session; never handed out as a hotkey.
pub const EXIT_KEY: char = 'X';

/// Case-fold a key the same way for assignment and lookup.
pub fn fold(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

/// Per-render map from an uppercase letter to the item index it triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyTable {
    keys: HashMap<char, usize>,
}

impl HotkeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Item index bound to `key`, compared case-insensitively.
    pub fn get(&self, key: char) -> Option<usize> {
        self.keys.get(&fold(key)).copied()
    }

    /// Iterate `(letter, index)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.keys.iter().map(|(k, v)| (*k, *v))
    }

    /// Claim a hotkey for `name` at position `index`.
    ///
    /// Returns the character as it appears in `name` (original case) so the
    /// caller can mark it, or `None` when every candidate is taken.
    pub fn assign(&mut self, name: &str, index: usize) -> Option<char> {
        for ch in name.chars() {
            let key = fold(ch);
            if key == EXIT_KEY {
                continue;
            }
            if let std::collections::hash_map::Entry::Vacant(slot) = self.keys.entry(key) {
                slot.insert(index);
                return Some(ch);
            }
        }
        None
    }
}
