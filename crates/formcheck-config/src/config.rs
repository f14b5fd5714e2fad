// crates/formcheck-config/src/config.rs
// ============================================================================
// Module: formcheck Configuration
// Description: Configuration loading and validation for formcheck.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: formcheck-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown fields are rejected so typos never silently fall back to defaults.
//! Every section is optional; an empty file yields the defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use formcheck_core::FileConstraints;
use formcheck_core::FormBackend;
use formcheck_core::FormState;
use formcheck_core::Locale;
use formcheck_core::MessageResolver;
use formcheck_core::MissReporter;
use formcheck_core::PasswordPolicy;
use formcheck_core::PostalCountry;
use formcheck_core::build_form_state;
use formcheck_core::messages::NoopMissReporter;
use formcheck_core::messages::StderrMissReporter;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "formcheck.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "FORMCHECK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Smallest accepted password minimum length.
pub(crate) const MIN_PASSWORD_MIN_LENGTH: usize = 1;
/// Largest accepted password minimum length.
pub(crate) const MAX_PASSWORD_MIN_LENGTH: usize = 128;
/// Smallest accepted file size limit in megabytes.
pub(crate) const MIN_FILE_SIZE_MB: u64 = 1;
/// Largest accepted file size limit in megabytes.
pub(crate) const MAX_FILE_SIZE_MB: u64 = 1024;
/// Maximum number of allowed file types.
pub(crate) const MAX_ALLOWED_TYPES: usize = 64;
/// Maximum length of one allowed file type.
pub(crate) const MAX_MIME_TYPE_LENGTH: usize = 255;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// formcheck configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormcheckConfig {
    /// Message locale configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Resolver miss diagnostics.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    /// Form-state backend selection.
    #[serde(default)]
    pub form: FormConfig,
    /// Password policy.
    #[serde(default)]
    pub password: PasswordConfig,
    /// File upload limits.
    #[serde(default)]
    pub file: FileConfig,
    /// Postal code rules.
    #[serde(default)]
    pub postal: PostalConfig,
}

impl FormcheckConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Loads configuration, or returns defaults when nothing is configured.
    ///
    /// Defaults apply only when no path is given, [`CONFIG_ENV_VAR`] is unset,
    /// and no [`DEFAULT_CONFIG_NAME`] file exists in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a configured file fails to load.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if path.is_none()
            && env::var_os(CONFIG_ENV_VAR).is_none()
            && !Path::new(DEFAULT_CONFIG_NAME).exists()
        {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.password.validate()?;
        self.file.validate()?;
        Ok(())
    }

    /// Builds a message resolver wired to the configured miss diagnostics.
    #[must_use]
    pub fn message_resolver(&self) -> MessageResolver {
        MessageResolver::new(self.diagnostics.miss_reporter())
    }

    /// Builds the configured form-state backend.
    #[must_use]
    pub fn form_state(&self) -> Box<dyn FormState> {
        build_form_state(self.form.backend)
    }
}

/// Message locale configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Locale used when a caller does not name one.
    #[serde(default)]
    pub default: Locale,
}

/// Handling of resolver misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMessageMode {
    /// Discard misses.
    #[default]
    Silent,
    /// Emit one JSON line per miss to stderr.
    Stderr,
}

/// Resolver miss diagnostics configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Miss handling mode.
    #[serde(default)]
    pub missing_messages: MissingMessageMode,
}

impl DiagnosticsConfig {
    /// Returns the miss reporter for the configured mode.
    #[must_use]
    pub fn miss_reporter(&self) -> Arc<dyn MissReporter> {
        match self.missing_messages {
            MissingMessageMode::Silent => Arc::new(NoopMissReporter),
            MissingMessageMode::Stderr => Arc::new(StderrMissReporter),
        }
    }
}

/// Form-state backend configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    /// Backend selected at startup.
    #[serde(default)]
    pub backend: FormBackend,
}

/// Password policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordConfig {
    /// Minimum length in characters.
    #[serde(default = "default_password_min_length")]
    pub min_length: usize,
    /// Require an uppercase letter.
    #[serde(default = "default_require")]
    pub require_uppercase: bool,
    /// Require a lowercase letter.
    #[serde(default = "default_require")]
    pub require_lowercase: bool,
    /// Require a digit.
    #[serde(default = "default_require")]
    pub require_number: bool,
    /// Require a special character.
    #[serde(default = "default_require")]
    pub require_special: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: default_password_min_length(),
            require_uppercase: default_require(),
            require_lowercase: default_require(),
            require_number: default_require(),
            require_special: default_require(),
        }
    }
}

impl PasswordConfig {
    /// Validates password policy bounds.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PASSWORD_MIN_LENGTH ..= MAX_PASSWORD_MIN_LENGTH).contains(&self.min_length) {
            return Err(ConfigError::Invalid(format!(
                "password.min_length must be between {MIN_PASSWORD_MIN_LENGTH} and \
                 {MAX_PASSWORD_MIN_LENGTH}"
            )));
        }
        Ok(())
    }

    /// Converts to the rule-engine policy.
    #[must_use]
    pub const fn to_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_length,
            require_uppercase: self.require_uppercase,
            require_lowercase: self.require_lowercase,
            require_number: self.require_number,
            require_special: self.require_special,
        }
    }
}

/// File upload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Maximum file size in megabytes.
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
    /// Allowed MIME types; `type/*` matches a family. Empty allows all.
    #[serde(default)]
    pub allowed_types: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            allowed_types: Vec::new(),
        }
    }
}

impl FileConfig {
    /// Validates size bounds and the allowed type list.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FILE_SIZE_MB ..= MAX_FILE_SIZE_MB).contains(&self.max_size_mb) {
            return Err(ConfigError::Invalid(format!(
                "file.max_size_mb must be between {MIN_FILE_SIZE_MB} and {MAX_FILE_SIZE_MB}"
            )));
        }
        if self.allowed_types.len() > MAX_ALLOWED_TYPES {
            return Err(ConfigError::Invalid(format!(
                "file.allowed_types exceeds {MAX_ALLOWED_TYPES} entries"
            )));
        }
        let mut seen = BTreeSet::new();
        for mime_type in &self.allowed_types {
            validate_mime_type(mime_type)?;
            if !seen.insert(mime_type.trim().to_ascii_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "file.allowed_types contains duplicate entry: {mime_type}"
                )));
            }
        }
        Ok(())
    }

    /// Converts to the rule-engine constraints.
    #[must_use]
    pub fn to_constraints(&self) -> FileConstraints {
        FileConstraints {
            max_size_mb: self.max_size_mb,
            allowed_types: self.allowed_types.clone(),
        }
    }
}

/// Postal code configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PostalConfig {
    /// Country whose format applies by default.
    #[serde(default)]
    pub country: PostalCountry,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates one `type/subtype` entry (`type/*` allowed).
fn validate_mime_type(value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("file.allowed_types entries must be non-empty".to_string()));
    }
    if trimmed.len() > MAX_MIME_TYPE_LENGTH {
        return Err(ConfigError::Invalid(format!("file.allowed_types entry too long: {trimmed}")));
    }
    let valid = trimmed.split_once('/').is_some_and(|(head, tail)| {
        !head.is_empty() && !tail.is_empty() && !tail.contains('/') && head != "*"
    });
    if !valid {
        return Err(ConfigError::Invalid(format!(
            "file.allowed_types entry must be type/subtype: {trimmed}"
        )));
    }
    Ok(())
}

/// Default minimum password length.
const fn default_password_min_length() -> usize {
    formcheck_core::rules::DEFAULT_PASSWORD_MIN_LENGTH
}

/// Default password requirement flag.
const fn default_require() -> bool {
    true
}

/// Default file size limit in megabytes.
const fn default_max_size_mb() -> u64 {
    10
}
