//! Error types for menutree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::tree::MenuId;

/// Result type alias for menutree operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menutree operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// The terminal could not be put into raw mode or a read failed.
    ///
    /// A session cannot continue without input, so this ends it.
    #[error("terminal input failed: {0}")]
    Terminal(#[source] std::io::Error),

    /// Writing the menu to the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A menu handle that this tree never issued
    #[error("unknown menu id {0}")]
    UnknownMenu(MenuId),

    /// Configuration file could not be read or parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
