//! Top-level debuget configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ObservabilityConfig, ThemeConfig};
use crate::errors::ConfigError;
use crate::models::Theme;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DEBUGET_*`, `NO_COLOR`)
/// 2. Project config (`debuget.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugetConfig {
    pub theme: ThemeConfig,
    pub observability: ObservabilityConfig,
}

impl DebugetConfig {
    /// Load configuration for `root`, reading overrides from the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration for `root` with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, env)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Effective theme after all layers.
    pub fn theme(&self) -> Theme {
        self.theme.effective()
    }

    fn merge_toml_file(config: &mut DebugetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DebugetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut DebugetConfig, other: &DebugetConfig) {
        if other.theme.emoji.is_some() {
            base.theme.emoji = other.theme.emoji;
        }
        if other.theme.colors.is_some() {
            base.theme.colors = other.theme.colors;
        }
        if other.theme.stack_depth.is_some() {
            base.theme.stack_depth = other.theme.stack_depth;
        }
        if other.theme.show_stack.is_some() {
            base.theme.show_stack = other.theme.show_stack;
        }
        if other.observability != ObservabilityConfig::default() {
            base.observability = other.observability.clone();
        }
    }

    /// Pattern: `DEBUGET_EMOJI`, `DEBUGET_STACK_DEPTH`, ...
    /// `NO_COLOR` set to any non-empty value turns colors off unless
    /// `DEBUGET_COLORS` says otherwise.
    fn apply_env_overrides<F>(config: &mut DebugetConfig, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.theme.colors = Some(false);
        }
        if let Some(val) = env("DEBUGET_EMOJI") {
            config.theme.emoji = Some(parse_bool("DEBUGET_EMOJI", &val)?);
        }
        if let Some(val) = env("DEBUGET_COLORS") {
            config.theme.colors = Some(parse_bool("DEBUGET_COLORS", &val)?);
        }
        if let Some(val) = env("DEBUGET_STACK_DEPTH") {
            let depth = val
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "DEBUGET_STACK_DEPTH".to_string(),
                    message: e.to_string(),
                })?;
            config.theme.stack_depth = Some(depth);
        }
        if let Some(val) = env("DEBUGET_SHOW_STACK") {
            config.theme.show_stack = Some(parse_bool("DEBUGET_SHOW_STACK", &val)?);
        }
        if let Some(val) = env(defaults::LOG_ENV_VAR) {
            config.observability.log_filter = val;
        }
        Ok(())
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
