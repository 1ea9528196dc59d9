use crate::config::{ColorMode, Config};
use crate::terminal::{detect_capabilities, TerminalCapabilities};
use crate::theme::Theme;

/// Display settings after combining configuration with what the terminal
/// actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub redraw: bool,
    pub welcome: bool,
    pub color: bool,
    pub unicode: bool,
}

impl DisplayOptions {
    pub fn new(config: &Config) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, caps: TerminalCapabilities) -> Self {
        let display = &config.display;

        let color = match display.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            redraw: display.redraw,
            welcome: display.welcome,
            color,
            unicode: display.unicode && caps.supports_unicode,
        }
    }

    /// Fixed settings for tests and non-interactive hosts: no color, ASCII
    /// glyphs, no welcome screen, redraw on.
    pub fn plain() -> Self {
        Self {
            redraw: true,
            welcome: false,
            color: false,
            unicode: false,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.color, self.unicode)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
