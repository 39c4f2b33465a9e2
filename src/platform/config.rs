// NameFinder - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::OutputFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for NameFinder configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/namefinder/ or %APPDATA%\NameFinder\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Use an explicit config directory (CLI `--config-dir`).
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Full path of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[dataset]` section.
    pub dataset: DatasetSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[dataset]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    /// Name list path. Relative paths are taken from the config directory.
    pub path: Option<String>,
    /// Drop blank lines when loading.
    pub skip_blank_lines: Option<bool>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// "text", "json" or "csv".
    pub format: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Name list path from `[dataset] path`, already made absolute
    /// against the config directory when it was relative.
    pub names_path: Option<PathBuf>,
    /// Drop blank lines when loading the name list.
    pub skip_blank_lines: bool,
    /// Default output format for search results.
    pub output_format: OutputFormat,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// problems. If the file does not exist, returns defaults with no
/// problems (first run). If the file cannot be read or parsed, returns
/// defaults plus the error.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut problems: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), problems);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            problems.push(ConfigError::Io {
                path: config_path,
                source: e,
            });
            return (AppConfig::default(), problems);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            problems.push(ConfigError::TomlParse {
                path: config_path,
                source: e,
            });
            return (AppConfig::default(), problems);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Dataset: path --
    if let Some(ref path) = raw.dataset.path {
        if path.trim().is_empty() {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[dataset] path".to_string(),
                value: path.clone(),
                expected: "a non-empty file path".to_string(),
            });
        } else {
            let path = PathBuf::from(path);
            config.names_path = Some(if path.is_absolute() {
                path
            } else {
                config_dir.join(path)
            });
        }
    }

    // -- Dataset: skip_blank_lines --
    if let Some(skip) = raw.dataset.skip_blank_lines {
        config.skip_blank_lines = skip;
    }

    // -- Output: format --
    if let Some(ref format) = raw.output.format {
        match OutputFormat::from_name(format) {
            Some(f) => config.output_format = f,
            None => problems.push(ConfigError::ValueOutOfRange {
                field: "[output] format".to_string(),
                value: format.clone(),
                expected: "text, json or csv".to_string(),
            }),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    if !problems.is_empty() {
        tracing::warn!(
            count = problems.len(),
            "Config validation produced warnings"
        );
    }

    (config, problems)
}
