//! menutree - nested, keyboard-driven menus for the terminal
//!
//! Build [`Menu`]s with named options bound to callbacks, link them into a
//! [`MenuTree`], and call [`MenuTree::display`]. The user moves with the
//! arrow keys, picks with Enter or a hotkey letter, goes back with Left/Esc
//! and leaves with `x`.
//!
//! ```no_run
//! use menutree::{Menu, MenuTree};
//!
//! let mut main = Menu::new("Main", "What now?");
//! main.add_option("hello", || println!("hello"));
//! let mut tree = MenuTree::new(main);
//!
//! let mut settings = Menu::new("Settings", "");
//! settings.add_option("reset", || println!("reset"));
//! let settings = tree.insert(settings);
//! tree.add_submenu(tree.home(), settings)?;
//!
//! tree.display()?;
//! # Ok::<(), menutree::MenuError>(())
//! ```
//!
//! Sessions can also run headless: [`Session`] takes any [`InputSource`]
//! and any `io::Write`, so [`ScriptedInput`] and a `Vec<u8>` are enough to
//! drive a whole run in tests.

pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;
pub mod terminal;
pub mod theme;
pub mod tree;

// Re-exports for convenience
pub use config::{ColorMode, Config};
pub use context::DisplayOptions;
pub use error::{MenuError, MenuResult};
pub use input::{keys, Command, InputSource, ScriptedInput, TtyInput};
pub use menu::{Action, Menu, PromptSource, WithTree};
pub use session::Session;
pub use theme::Theme;
pub use tree::{MenuId, MenuTree};
