//! Configuration module for menutree
//!
//! Settings are resolved in this order:
//! 1. Environment variables (MENUTREE_*, NO_COLOR)
//! 2. Explicit config file passed by the host
//! 3. User config (~/.config/menutree/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{ColorMode, Config, DisplayConfig};
