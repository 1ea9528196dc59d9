//! Moving around: selection, submenus, back.

use menutree::keys;

use crate::common::{run_keys, Fixture};
use crate::{assert_output_contains, assert_output_not_contains};

#[test]
fn down_walks_options_then_submenus_and_wraps() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::DOWN, keys::DOWN, keys::DOWN, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current_menu().selection(), 0);

    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::DOWN, keys::DOWN, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current_menu().selection(), 2);
    assert_output_contains!(run, ">[S]ub");
}

#[test]
fn up_from_first_item_wraps_to_last() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::UP, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current_menu().selection(), 2);
}

#[test]
fn enter_on_submenu_descends_and_records_previous() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::DOWN, keys::DOWN, keys::ENTER, keys::EXIT]);
    run.result.unwrap();

    assert_eq!(fx.tree.current(), fx.sub);
    assert_eq!(fx.tree.previous(), Some(fx.tree.home()));
    assert_eq!(fx.tree.name(), "Sub");
    assert_output_contains!(run, "Menu: Sub");
    assert_output_contains!(run, "back to Main");
    assert!(fx.calls().is_empty());
}

#[test]
fn right_arrow_acts_like_enter() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::UP, keys::RIGHT, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current(), fx.sub);
}

#[test]
fn hotkeys_are_case_insensitive() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[b"s", keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current(), fx.sub);

    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[b"S", keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current(), fx.sub);
}

#[test]
fn back_returns_home_and_clears_previous() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[b"s", keys::ESCAPE, keys::EXIT]);
    run.result.unwrap();

    assert_eq!(fx.tree.current(), fx.tree.home());
    assert_eq!(fx.tree.previous(), None);
}

#[test]
fn back_key_at_home_draws_nothing() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::LEFT, keys::ESCAPE, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(run.output.matches("Menu: Main").count(), 1);
    assert_output_not_contains!(run, "back to");
}

#[test]
fn back_from_grandchild_bounces_between_last_two_menus() {
    let mut fx = Fixture::new();
    let deep = fx.tree.insert(menutree::Menu::new("Deep", ""));
    fx.tree.add_submenu(fx.sub, deep).unwrap();

    // Main -> Sub -> Deep, back, back
    let run = run_keys(
        &mut fx.tree,
        &[b"s", b"d", keys::LEFT, keys::LEFT, keys::EXIT],
    );
    run.result.unwrap();

    assert_eq!(fx.tree.current(), deep);
    assert_eq!(fx.tree.previous(), Some(fx.sub));
}

#[test]
fn exit_letter_is_never_a_hotkey() {
    let mut fx = Fixture::new();
    let mut xeno = menutree::Menu::new("Xeno", "");
    xeno.add_option("xx", || {});
    let xeno = fx.tree.insert(xeno);
    fx.tree.add_submenu(fx.tree.home(), xeno).unwrap();

    // Xeno gets E, "xx" gets nothing
    let run = run_keys(&mut fx.tree, &[b"e", b"X", keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current(), xeno);
    assert_output_contains!(run, ">xx");
}

#[test]
fn lowercase_exit_ends_session_immediately() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::EXIT, keys::DOWN]);
    run.result.unwrap();
    assert_eq!(fx.tree.current_menu().selection(), 0);
}

#[test]
fn empty_menu_holds_selection_at_zero() {
    let mut fx = Fixture::new();
    fx.tree.change_menu(fx.sub).unwrap();
    fx.tree.current_menu_mut().delete_option("baz");
    assert_eq!(fx.tree.item_count(), 0);

    let run = run_keys(&mut fx.tree, &[keys::UP, keys::DOWN, keys::DOWN, keys::EXIT]);
    run.result.unwrap();
    assert_eq!(fx.tree.current_menu().selection(), 0);
}
