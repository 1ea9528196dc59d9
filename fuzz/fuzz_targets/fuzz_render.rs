#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::render::{frame, layout, Surroundings};
use menutree::{Menu, Theme};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First line names the menu, the rest is prompt, words become options
    let (name, prompt) = text.split_once('\n').unwrap_or((text, ""));
    let mut menu = Menu::new(name, prompt);
    for word in prompt.split_whitespace().take(16) {
        menu.add_option(word, || {});
    }
    let submenus: Vec<String> = name.split_whitespace().map(str::to_string).collect();

    for theme in [Theme::plain(), Theme::new(true, true)] {
        let lines = layout(
            &mut menu,
            Surroundings {
                submenus: &submenus,
                previous: Some(name),
            },
            &theme,
        );
        let _ = frame(&lines, menu.longest_line());
    }
});
