//! Configuration module for `StudyCost`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application config directory
const DIR_VARIABLE: &str = "$STUDY_COST";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Backend API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the calculator API
    #[serde(default)]
    pub base_url: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Cost data JSON file; empty means the bundled table
    #[serde(default)]
    pub data_file: String,
    /// Directory for generated reports and downloaded PDFs
    #[serde(default)]
    pub reports_dir: String,
    /// Session file carrying answers between runs
    #[serde(default)]
    pub session_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Backend settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override API base URL
    pub base_url: Option<String>,
    /// Override cost data file
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override session file
    pub session_file: Option<String>,
}

/// Fill `target` from `default` when it is empty. Returns `true` if it changed.
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$STUDY_COST` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studycost`
    /// - macOS: `~/Library/Application Support/studycost`
    /// - Windows: `%APPDATA%\studycost`
    #[must_use]
    pub fn get_studycost_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studycost")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are updated,
    /// so upgrading picks up new settings without touching user choices.
    /// `paths.data_file` is left alone: empty there is meaningful.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let changed = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.api.base_url, &defaults.api.base_url),
            fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            fill_empty(&mut self.paths.session_file, &defaults.paths.session_file),
        ];
        changed.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only and are never saved. Only non-`None`
    /// values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     base_url: Some("http://localhost:8000/api".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file = Self::expand_variables(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
        if let Some(session_file) = &overrides.session_file {
            self.paths.session_file = Self::expand_variables(session_file);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_studycost_dir`](Self::get_studycost_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studycost_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$STUDY_COST` with the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studycost_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$STUDY_COST` is expanded in
    /// every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.session_file = Self::expand_variables(&config.paths.session_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the file exists: loads it, merges missing fields from defaults and
    ///   saves the merged result
    /// - First run: writes the defaults to the config file
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// The config directory is created if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `base_url`, `data_file`,
    /// `reports_dir`, `session_file`. Dashed spellings are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" | "base-url" => Some(self.api.base_url.clone()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "session_file" | "session-file" => Some(self.paths.session_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the level is not a valid level
    /// name, or `verbose` is not a boolean.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!("Invalid log level: '{value}'"));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "base_url" | "base-url" => self.api.base_url = value.to_string(),
            "data_file" | "data-file" => self.paths.data_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "session_file" | "session-file" => self.paths.session_file = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" | "base-url" => self.api.base_url.clone_from(&defaults.api.base_url),
            "data_file" | "data-file" => {
                self.paths.data_file.clone_from(&defaults.paths.data_file);
            }
            "reports_dir" | "reports-dir" => {
                self.paths.reports_dir.clone_from(&defaults.paths.reports_dir);
            }
            "session_file" | "session-file" => {
                self.paths
                    .session_file
                    .clone_from(&defaults.paths.session_file);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[api]")?;
        writeln!(f, "  base_url = \"{}\"", self.api.base_url)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  session_file = \"{}\"", self.paths.session_file)?;

        Ok(())
    }
}
