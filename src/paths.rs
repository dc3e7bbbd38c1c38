//! Filesystem locations for configuration, logs and persisted storage.

use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "shopup";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/shopup`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// What: Config directory for ShopUp (ensured to exist when possible).
///
/// Inputs:
/// - `override_dir`: Directory given on the command line, used as-is when present
///
/// Output:
/// - `override_dir`, else `$HOME/.config/shopup`, else `$XDG_CONFIG_HOME/shopup`.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        let _ = std::fs::create_dir_all(dir);
        return dir.to_path_buf();
    }
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist)
pub fn logs_dir(config: &Path) -> PathBuf {
    let dir = config.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default storage directory under config: `<config>/storage`. Created on first write.
#[must_use]
pub fn default_storage_dir(config: &Path) -> PathBuf {
    config.join("storage")
}

/// Settings file path: `<config>/settings.conf`.
#[must_use]
pub fn settings_path(config: &Path) -> PathBuf {
    config.join("settings.conf")
}
