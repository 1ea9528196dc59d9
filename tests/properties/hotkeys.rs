//! Property tests for hotkey assignment and option bookkeeping.

use std::collections::HashSet;

use proptest::prelude::*;

use menutree::menu::{hotkey, HotkeyTable, EXIT_KEY};
use menutree::Menu;

fn item_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every assigned letter is unique, never the exit key, taken
    /// from the item's own name, and maps back to that item.
    #[test]
    fn property_hotkeys_unique_and_never_exit(
        names in proptest::collection::vec(item_name(), 0..20),
    ) {
        let mut table = HotkeyTable::new();
        let mut seen = HashSet::new();

        for (index, name) in names.iter().enumerate() {
            if let Some(ch) = table.assign(name, index) {
                let key = hotkey::fold(ch);
                prop_assert_ne!(key, EXIT_KEY);
                prop_assert!(name.contains(ch));
                prop_assert!(seen.insert(key), "duplicate hotkey {:?}", key);
                prop_assert_eq!(table.get(ch), Some(index));
            }
        }
        prop_assert_eq!(table.len(), seen.len());
    }

    /// PROPERTY: An item only goes without a hotkey when every letter of its
    /// name is the exit key or already taken.
    #[test]
    fn property_unassigned_items_had_no_free_letter(
        names in proptest::collection::vec(item_name(), 0..20),
    ) {
        let mut table = HotkeyTable::new();
        for (index, name) in names.iter().enumerate() {
            let taken: HashSet<char> = table.iter().map(|(k, _)| k).collect();
            if table.assign(name, index).is_none() {
                for ch in name.chars() {
                    let key = hotkey::fold(ch);
                    prop_assert!(key == EXIT_KEY || taken.contains(&key));
                }
            }
        }
    }

    /// PROPERTY: Display order never holds duplicates and always matches
    /// the set of bound names.
    #[test]
    fn property_option_order_matches_bindings(
        ops in proptest::collection::vec((any::<bool>(), 0usize..6), 0..40),
    ) {
        let mut menu = Menu::new("Main", "");
        let mut expected: Vec<String> = Vec::new();

        for (add, n) in ops {
            let name = format!("opt{n}");
            if add {
                menu.add_option(name.clone(), || {});
                expected.retain(|e| e != &name);
                expected.push(name);
            } else {
                let existed = expected.contains(&name);
                expected.retain(|e| e != &name);
                prop_assert_eq!(menu.delete_option(&name), existed);
            }
        }

        prop_assert_eq!(menu.option_names(), expected.as_slice());
        for name in &expected {
            prop_assert!(menu.has_option(name));
        }
    }
}
