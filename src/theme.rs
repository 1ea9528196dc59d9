use crossterm::style::{Attribute, Stylize};

/// Glyphs and text styling for rendered menus.
///
/// All icons and fill characters must be sourced from this module.
pub mod icons {
    pub const UP_DOWN: &str = "↕";
    pub const BACK: &str = "←";
    pub const CHOOSE: &str = "→";
}

pub mod icons_ascii {
    pub const UP_DOWN: &str = "^v";
    pub const BACK: &str = "<-";
    pub const CHOOSE: &str = "->";
}

pub mod borders {
    /// Frame around the menu block and the executing banner
    pub const FILL: char = '*';
    /// Rules around action output
    pub const RULE: char = '-';
    /// Prefix of the selected line
    pub const CURSOR: &str = ">";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    UpDown,
    Back,
    Choose,
}

/// Styling collaborator used by the renderer.
///
/// With color enabled, text gets real terminal attributes. Without it the
/// text passes through untouched, except that underlined hotkeys are shown
/// in brackets so they stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
    unicode: bool,
}

impl Theme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    /// No attributes, ASCII glyphs
    pub fn plain() -> Self {
        Self::new(false, false)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn unicode(&self) -> bool {
        self.unicode
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }

    pub fn italic(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.italic())
        } else {
            text.to_string()
        }
    }

    /// Underline `text`. Ends with underline-off rather than a full reset,
    /// so an enclosing style (the selected line's italics) carries on.
    pub fn underline(&self, text: &str) -> String {
        if self.color {
            format!("{}{}{}", Attribute::Underlined, text, Attribute::NoUnderline)
        } else {
            format!("[{}]", text)
        }
    }

    pub fn icon(&self, icon: Icon) -> &'static str {
        match (self.unicode, icon) {
            (true, Icon::UpDown) => icons::UP_DOWN,
            (true, Icon::Back) => icons::BACK,
            (true, Icon::Choose) => icons::CHOOSE,
            (false, Icon::UpDown) => icons_ascii::UP_DOWN,
            (false, Icon::Back) => icons_ascii::BACK,
            (false, Icon::Choose) => icons_ascii::CHOOSE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true, true)
    }
}
