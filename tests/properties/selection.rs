//! Property tests for cursor movement.

use proptest::prelude::*;

use menutree::{DisplayOptions, Menu, MenuTree};

fn tree_with(options: usize, submenus: usize) -> MenuTree {
    let mut main = Menu::new("Main", "");
    for i in 0..options {
        main.add_option(format!("opt{i}"), || {});
    }
    let mut tree = MenuTree::with_options(main, DisplayOptions::plain());
    for i in 0..submenus {
        let id = tree.insert(Menu::new(format!("sub{i}"), ""));
        tree.add_submenu(tree.home(), id).unwrap();
    }
    tree
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any sequence of moves keeps the selection inside the item list
    /// (or at 0 when the list is empty).
    #[test]
    fn property_selection_stays_in_range(
        options in 0usize..6,
        submenus in 0usize..4,
        moves in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut tree = tree_with(options, submenus);
        let total = tree.item_count();

        for down in moves {
            if down {
                tree.select_next();
            } else {
                tree.select_previous();
            }
            let sel = tree.current_menu().selection();
            if total == 0 {
                prop_assert_eq!(sel, 0);
            } else {
                prop_assert!(sel < total);
            }
        }
    }

    /// PROPERTY: `total` moves down (or up) return to the starting item.
    #[test]
    fn property_full_cycle_returns_home(
        options in 1usize..6,
        submenus in 0usize..4,
        start in 0usize..10,
    ) {
        let mut tree = tree_with(options, submenus);
        let total = tree.item_count();
        for _ in 0..start % total {
            tree.select_next();
        }
        let before = tree.current_menu().selection();

        for _ in 0..total {
            tree.select_next();
        }
        prop_assert_eq!(tree.current_menu().selection(), before);

        for _ in 0..total {
            tree.select_previous();
        }
        prop_assert_eq!(tree.current_menu().selection(), before);
    }

    /// PROPERTY: Up undoes down.
    #[test]
    fn property_up_inverts_down(
        options in 1usize..6,
        submenus in 0usize..4,
        steps in 0usize..12,
    ) {
        let mut tree = tree_with(options, submenus);
        for _ in 0..steps {
            tree.select_next();
        }
        let before = tree.current_menu().selection();
        tree.select_next();
        tree.select_previous();
        prop_assert_eq!(tree.current_menu().selection(), before);
    }
}
