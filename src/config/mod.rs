//! Runtime settings loaded from `settings.conf`.
//!
//! Missing file or keys fall back to defaults; invalid values keep the default and
//! are logged.

use std::path::{Path, PathBuf};

pub mod parsing;

use crate::search::{DEBOUNCE_MS, DROPDOWN_LIMIT, DROPDOWN_MIN_CHARS, SearchPolicy};
use crate::wishlist::WISHLIST_STORAGE_KEY;
use parsing::{parse_key_value, skip_comment_or_empty};

/// What: User-tunable settings.
///
/// Details:
/// - `storage_dir: None` means `<config_dir>/storage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
    /// Minimum query length before the dropdown searches.
    pub dropdown_min_chars: usize,
    /// Maximum products in the dropdown preview.
    pub dropdown_limit: usize,
    /// Storage key for the wishlist.
    pub wishlist_key: String,
    /// Directory for persisted storage files.
    pub storage_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            dropdown_min_chars: DROPDOWN_MIN_CHARS,
            dropdown_limit: DROPDOWN_LIMIT,
            wishlist_key: WISHLIST_STORAGE_KEY.to_string(),
            storage_dir: None,
        }
    }
}

impl Settings {
    /// What: Parse settings from `settings.conf` content.
    ///
    /// Inputs:
    /// - `content`: File content
    ///
    /// Output:
    /// - Settings with recognised keys applied over the defaults.
    ///
    /// Details:
    /// - Unknown keys are ignored (logged at debug).
    /// - Unparseable numbers and empty strings keep the default (logged at warn).
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::default();
        for line in content.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, val)) = parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "debounce_ms" | "search_debounce_ms" => {
                    set_number(&mut settings.debounce_ms, &key, &val);
                }
                "dropdown_min_chars" | "min_query_chars" => {
                    set_number(&mut settings.dropdown_min_chars, &key, &val);
                }
                "dropdown_limit" | "dropdown_results" => {
                    set_number(&mut settings.dropdown_limit, &key, &val);
                }
                "wishlist_key" => {
                    if val.is_empty() {
                        tracing::warn!(key = %key, "[Config] Empty wishlist key, keeping default");
                    } else {
                        settings.wishlist_key = val;
                    }
                }
                "storage_dir" => {
                    settings.storage_dir = (!val.is_empty()).then(|| PathBuf::from(val));
                }
                _ => {
                    tracing::debug!(key = %key, "[Config] Ignoring unknown setting");
                }
            }
        }
        settings
    }

    /// What: Load settings from a file, falling back to defaults.
    ///
    /// Inputs:
    /// - `path`: Path to `settings.conf`
    ///
    /// Output:
    /// - Parsed settings, or defaults when the file is missing or unreadable.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "[Config] Loaded settings");
                Self::parse(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "[Config] No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read settings, using defaults");
                Self::default()
            }
        }
    }

    /// Header dropdown policy derived from these settings.
    #[must_use]
    pub const fn dropdown_policy(&self) -> SearchPolicy {
        SearchPolicy::dropdown(self.dropdown_min_chars, self.dropdown_limit)
    }

    /// Storage directory, defaulting under `config_dir`.
    #[must_use]
    pub fn storage_dir_or_default(&self, config_dir: &Path) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| crate::paths::default_storage_dir(config_dir))
    }
}

fn set_number<T: std::str::FromStr>(slot: &mut T, key: &str, val: &str)
where
    T::Err: std::fmt::Display,
{
    match val.parse::<T>() {
        Ok(v) => *slot = v,
        Err(e) => {
            tracing::warn!(key = %key, value = %val, error = %e, "[Config] Invalid value, keeping default");
        }
    }
}
