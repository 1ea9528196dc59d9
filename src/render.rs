//! Menu rendering.
//!
//! [`layout`] turns a menu into plain content lines, [`frame`] wraps them in
//! the starred border, and [`draw`] writes the block, first erasing the
//! previous one when redraw is on. Everything printed ends with a newline,
//! so `last_render_lines` is exactly the number of terminal rows to move up.

use std::borrow::Cow;
use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};
use unicode_width::UnicodeWidthStr;

use crate::menu::{prompt_lines, Menu};
use crate::theme::{borders, Icon, Theme};

/// Extra columns added to the widest line
const PADDING: usize = 2;

/// What the renderer needs to know about the menu's neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct Surroundings<'a> {
    /// Names of the menu's children, in order
    pub submenus: &'a [String],
    /// Target of the back key, if any
    pub previous: Option<&'a str>,
}

/// Build the content lines for `menu`.
///
/// Side effects: evaluates the prompt, reassigns every hotkey and updates
/// `longest_line`.
pub fn layout(menu: &mut Menu, around: Surroundings<'_>, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();
    menu.hotkeys.clear();

    lines.push(format!("Menu: {}", theme.bold(menu.name())));

    let prompt = menu.resolve_prompt();
    for line in prompt_lines(&prompt) {
        lines.push(format!(" {}", line));
    }

    let selection = menu.selection;
    let options = menu.option_names().to_vec();
    if !options.is_empty() {
        lines.push(theme.bold("Options:"));
    }
    for (i, name) in options.iter().enumerate() {
        let hotkey = menu.hotkeys.assign(name, i);
        lines.push(item_line(name, hotkey, i == selection, theme));
    }

    if !around.submenus.is_empty() {
        lines.push(theme.bold("SubMenus:"));
        for (i, name) in around.submenus.iter().enumerate() {
            let index = options.len() + i;
            let hotkey = menu.hotkeys.assign(name, index);
            lines.push(item_line(name, hotkey, index == selection, theme));
        }
    }

    lines.push(String::new());
    lines.push(footer(around.previous, theme));

    menu.longest_line = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + PADDING;
    lines
}

fn item_line(name: &str, hotkey: Option<char>, selected: bool, theme: &Theme) -> String {
    let label = match hotkey {
        Some(ch) => {
            let mut buf = [0u8; 4];
            let key: &str = ch.encode_utf8(&mut buf);
            name.replacen(key, &theme.underline(key), 1)
        }
        None => name.to_string(),
    };

    if selected {
        format!("{}{}", borders::CURSOR, theme.italic(&label))
    } else {
        format!(" {}", label)
    }
}

fn footer(previous: Option<&str>, theme: &Theme) -> String {
    match previous {
        Some(name) => format!(
            " {}/esc back to {}, E{}it ",
            theme.icon(Icon::Back),
            name,
            theme.underline("x")
        ),
        None => format!("E{}it", theme.underline("x")),
    }
}

/// Wrap content lines in the bordered block.
///
/// The block starts with a blank row and a rule of `width + 4` fill
/// characters; the final line is closed off with fill characters to the
/// same width.
pub fn frame(lines: &[String], width: usize) -> String {
    let fill = borders::FILL.to_string();
    let mut out = String::new();

    out.push('\n');
    out.push_str(&fill.repeat(width + 4));
    out.push('\n');

    let Some((last, body)) = lines.split_last() else {
        return out;
    };

    for line in body {
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(line);
        }
        out.push('\n');
    }

    out.push_str(&fill.repeat(2));
    out.push_str(last);
    out.push_str(&fill.repeat(width.saturating_sub(visible_width(last))));
    out.push_str(&fill.repeat(2));
    out.push('\n');
    out
}

/// Render `menu` to `out`, erasing its previous block first when `redraw`
/// is set and something was drawn before.
pub fn draw(
    out: &mut impl Write,
    menu: &mut Menu,
    around: Surroundings<'_>,
    theme: &Theme,
    redraw: bool,
) -> io::Result<()> {
    if redraw && menu.last_render_lines > 0 {
        erase(out, menu.last_render_lines)?;
    }

    let lines = layout(menu, around, theme);
    let block = frame(&lines, menu.longest_line);
    menu.last_render_lines = block.matches('\n').count();

    out.write_all(block.as_bytes())?;
    out.flush()
}

/// Move the cursor up `lines` rows and clear everything below it.
pub fn erase(out: &mut impl Write, lines: usize) -> io::Result<()> {
    let rows = lines.min(u16::MAX as usize) as u16;
    if rows == 0 {
        return Ok(());
    }
    out.queue(cursor::MoveUp(rows))?;
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    Ok(())
}

/// Pad `text` with `fill` on the right until it is `width` columns wide.
pub fn banner(text: &str, fill: char, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(text));
    let mut line = String::with_capacity(text.len() + pad);
    line.push_str(text);
    line.extend(std::iter::repeat(fill).take(pad));
    line
}

/// Display width ignoring ANSI escape sequences
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
