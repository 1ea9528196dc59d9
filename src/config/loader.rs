//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MenuError, MenuResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| MenuError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, then the user config, then defaults
pub fn load_or_default(explicit: Option<&Path>) -> Config {
    if let Some(path) = explicit {
        match Config::load(path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => warn!("ignoring config: {}", e),
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            debug!("loading user config from {}", user_config.display());
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => warn!("ignoring config: {}", e),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// `~/.config/menutree/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("menutree").join("config.toml"))
}

/// Apply environment variable overrides (MENUTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_impl(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_impl(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(val) = get_env("MENUTREE_REDRAW") {
        config.display.redraw = parse_flag(&val);
    }

    if let Some(val) = get_env("MENUTREE_WELCOME") {
        config.display.welcome = parse_flag(&val);
    }

    if let Some(val) = get_env("MENUTREE_UNICODE") {
        config.display.unicode = parse_flag(&val);
    }

    if let Some(val) = get_env("MENUTREE_COLOR") {
        if let Some(mode) = ColorMode::parse(&val) {
            config.display.color = mode;
        }
    }

    // NO_COLOR wins over everything, including MENUTREE_COLOR.
    if get_env("NO_COLOR").is_some() {
        config.display.color = ColorMode::Never;
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    v != "false" && v != "0" && v != "no" && v != "off"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["display", "redraw", "welcome", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
