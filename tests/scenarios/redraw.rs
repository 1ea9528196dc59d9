//! In-place redraw bookkeeping and the rendered block itself.

use menutree::keys;

use crate::common::{run_keys, Fixture};
use crate::{assert_output_contains, assert_output_not_contains};

#[test]
fn first_render_is_a_framed_block() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::EXIT]);
    let text = run.text();
    run.result.unwrap();

    insta::assert_snapshot!(text.trim(), @r"
    ****************
      Menu: Main
       Pick one
      Options:
      >[f]oo
       [b]ar
      SubMenus:
       [S]ub

    **E[x]it********
    ");
}

#[test]
fn first_render_never_erases() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::EXIT]);
    run.result.unwrap();
    assert!(run.output.starts_with("\n****"));
}

#[test]
fn moving_selection_erases_exactly_the_previous_block() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::DOWN, keys::EXIT]);
    run.result.unwrap();

    // blank, rule, 8 content rows, footer
    assert_eq!(fx.tree.current_menu().last_render_lines(), 11);
    assert_output_contains!(run, "\u{1b}[11A\u{1b}[1G\u{1b}[J");
}

#[test]
fn entering_a_submenu_starts_a_fresh_block() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[b"s", keys::EXIT]);
    run.result.unwrap();
    assert_output_not_contains!(run, "\u{1b}[J");
}

#[test]
fn executing_replaces_footer_with_banner() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::ENTER, b" ", keys::EXIT]);
    run.result.unwrap();
    assert_output_contains!(run, "\u{1b}[2A\u{1b}[1G\u{1b}[J*** Executing foo... ***");
}

#[test]
fn toggle_off_appends_renders() {
    let mut fx = Fixture::new();
    let run = run_keys(
        &mut fx.tree,
        &[keys::TOGGLE, keys::DOWN, keys::DOWN, keys::EXIT],
    );
    run.result.unwrap();

    assert!(!fx.tree.redraw());
    assert_output_contains!(run, "redraw disabled\n");
    assert_output_not_contains!(run, "\u{1b}[J");
    assert_eq!(run.output.matches("Menu: Main").count(), 4);
}

#[test]
fn toggle_back_on_resumes_erasing() {
    let mut fx = Fixture::new();
    let run = run_keys(
        &mut fx.tree,
        &[keys::TOGGLE, keys::TOGGLE, keys::DOWN, keys::EXIT],
    );
    run.result.unwrap();

    assert!(fx.tree.redraw());
    let enabled = run.output.find("redraw enabled").expect("toggle message");
    assert!(run.output[enabled..].contains("\u{1b}[11A"));
}

#[test]
fn no_redraw_from_the_start() {
    let mut fx = Fixture::new();
    fx.tree.set_redraw(false);
    let run = run_keys(&mut fx.tree, &[keys::DOWN, keys::ENTER, b" ", keys::EXIT]);
    run.result.unwrap();
    assert_output_not_contains!(run, "\u{1b}[J");
    assert_eq!(fx.calls(), vec!["bar"]);
}

#[test]
fn exhausted_input_is_a_terminal_error_and_restores_cursor() {
    let mut fx = Fixture::new();
    let run = run_keys(&mut fx.tree, &[keys::DOWN]);
    assert!(matches!(run.result, Err(menutree::MenuError::Terminal(_))));
    assert!(run.output.ends_with("\u{1b}[?25h\n"));
}
