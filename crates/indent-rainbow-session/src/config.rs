//! Configuration loading and parsing.
//!
//! The configuration lives in `indent-rainbow.toml` (or a path handed in by the host). Parsing is
//! lenient per key: a missing, ill-typed or out-of-range value falls back to its default and is
//! reported with a `config` target warning, so one bad entry never discards the rest. A file that
//! is not valid TOML at all yields the full default configuration.

use indent_rainbow::IgnorePatterns;
use indent_rainbow_lang::LanguageLists;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// File name looked up in the working directory and the platform config directory.
pub const CONFIG_FILE_NAME: &str = "indent-rainbow.toml";

/// Default debounce delay between the last edit and the analysis pass.
pub const DEFAULT_UPDATE_DELAY: Duration = Duration::from_millis(100);

/// Default frame palette, one translucent color per nesting level.
pub const DEFAULT_COLORS: [&str; 4] = [
    "rgba(255,255,64,0.07)",
    "rgba(127,255,127,0.07)",
    "rgba(255,127,255,0.07)",
    "rgba(79,236,236,0.07)",
];

/// Default width error color.
pub const DEFAULT_ERROR_COLOR: &str = "rgba(128,32,32,0.6)";

/// Default tab-mix color.
pub const DEFAULT_TABMIX_COLOR: &str = "rgba(128,32,96,0.6)";

/// How frame decorations are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    /// Filled background per indentation level.
    #[default]
    Classic,
    /// A thin left border per indentation level.
    Light,
}

/// Failure to read a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Effective indent-rainbow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Frame palette; never empty.
    pub colors: Vec<String>,
    /// Color of width errors.
    pub error_color: String,
    /// Color of tab-mix markers; empty disables tab-mix detection.
    pub tabmix_color: String,
    /// Ignore-line patterns, `/pattern/flags` or bare.
    pub ignore_line_patterns: Vec<String>,
    /// Languages decorated without error markers (`*` for all).
    pub ignore_error_languages: Vec<String>,
    /// If non-empty, the only languages decorated.
    pub included_languages: Vec<String>,
    /// Languages never decorated.
    pub excluded_languages: Vec<String>,
    /// Debounce delay; never zero.
    pub update_delay: Duration,
    /// Frame painting style.
    pub indicator_style: IndicatorStyle,
    /// Border width in pixels for [`IndicatorStyle::Light`].
    pub light_indicator_line_width: u32,
    /// Frame only the whitespace, not the trailing line content.
    pub color_on_whitespace_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            error_color: DEFAULT_ERROR_COLOR.to_string(),
            tabmix_color: DEFAULT_TABMIX_COLOR.to_string(),
            ignore_line_patterns: Vec::new(),
            ignore_error_languages: Vec::new(),
            included_languages: Vec::new(),
            excluded_languages: Vec::new(),
            update_delay: DEFAULT_UPDATE_DELAY,
            indicator_style: IndicatorStyle::default(),
            light_indicator_line_width: 1,
            color_on_whitespace_only: false,
        }
    }
}

impl Config {
    /// Parse configuration text, falling back to defaults key by key.
    pub fn from_toml_str(content: &str) -> Self {
        let table = match toml::from_str::<toml::Table>(content) {
            Ok(table) => table,
            Err(err) => {
                warn!(target: "config", error = %err, "config_parse_failed");
                return Self::default();
            }
        };

        let defaults = Self::default();
        let fields = Fields { table: &table };
        let update_delay_ms = fields.get(
            "update_delay",
            duration_millis(defaults.update_delay),
            |ms: &u64| *ms > 0,
        );

        Self {
            colors: fields.get("colors", defaults.colors, |c: &Vec<String>| !c.is_empty()),
            error_color: fields.get("error_color", defaults.error_color, |_| true),
            tabmix_color: fields.get("tabmix_color", defaults.tabmix_color, |_| true),
            ignore_line_patterns: fields.get(
                "ignore_line_patterns",
                defaults.ignore_line_patterns,
                |_| true,
            ),
            ignore_error_languages: fields.get(
                "ignore_error_languages",
                defaults.ignore_error_languages,
                |_| true,
            ),
            included_languages: fields.get(
                "included_languages",
                defaults.included_languages,
                |_| true,
            ),
            excluded_languages: fields.get(
                "excluded_languages",
                defaults.excluded_languages,
                |_| true,
            ),
            update_delay: Duration::from_millis(update_delay_ms),
            indicator_style: fields.get("indicator_style", defaults.indicator_style, |_| true),
            light_indicator_line_width: fields.get(
                "light_indicator_line_width",
                defaults.light_indicator_line_width,
                |width: &u32| *width > 0,
            ),
            color_on_whitespace_only: fields.get(
                "color_on_whitespace_only",
                defaults.color_on_whitespace_only,
                |_| true,
            ),
        }
    }

    /// Number of frame color groups.
    pub fn group_count(&self) -> usize {
        self.colors.len().max(1)
    }

    /// Whether tab-mix detection is enabled (a tab-mix color is configured).
    pub fn detects_tab_mix(&self) -> bool {
        !self.tabmix_color.is_empty()
    }

    /// Language lists for a [`indent_rainbow_lang::LanguagePolicyCache`].
    pub fn language_lists(&self) -> LanguageLists {
        LanguageLists::new(
            self.included_languages.iter().cloned(),
            self.excluded_languages.iter().cloned(),
            self.ignore_error_languages.iter().cloned(),
        )
    }

    /// Compile the ignore-line patterns, dropping (and logging) invalid ones.
    pub fn ignore_patterns(&self) -> IgnorePatterns {
        let (patterns, rejected) = IgnorePatterns::compile(&self.ignore_line_patterns);
        if !rejected.is_empty() {
            debug!(
                target: "config",
                rejected = rejected.len(),
                kept = patterns.patterns().len(),
                "ignore_patterns_compiled"
            );
        }
        patterns
    }
}

struct Fields<'a> {
    table: &'a toml::Table,
}

impl Fields<'_> {
    fn get<T, F>(&self, key: &str, default: T, valid: F) -> T
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let Some(value) = self.table.get(key) else {
            return default;
        };
        match value.clone().try_into::<T>() {
            Ok(parsed) if valid(&parsed) => parsed,
            _ => {
                warn!(target: "config", key, "config_value_ignored");
                default
            }
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Best-effort config path: `./indent-rainbow.toml`, else the platform config directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("indent-rainbow").join(CONFIG_FILE_NAME);
    }
    local
}

/// Load configuration from `path` (or [`discover`]). A missing file yields the defaults.
pub fn load_from(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(discover);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Config::from_toml_str(&content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(target: "config", path = %path.display(), "config_file_missing");
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Io { path, source }),
    }
}
