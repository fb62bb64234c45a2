//! TOML-based application configuration.
//!
//! Stores:
//! - Where to fetch important updates from (base URL, timeout)
//! - How the assistant host polls for suggestions
//!
//! Configuration is stored at `~/.config/edupal/config.toml`. The backend
//! token is kept in the OS keyring, never here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Important-updates backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatesConfig {
    /// Portal API root, e.g. `https://portal.example.com/api`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Assistant host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_true")]
    pub auto_open_on_high_priority: bool,
    #[serde(default)]
    pub default_child_id: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/edupal/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub updates: UpdatesConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_poll_interval_secs() -> u64 {
    60
}
fn default_true() -> bool {
    true
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            auto_open_on_high_priority: true,
            default_child_id: None,
        }
    }
}

/// Returns `~/.config/edupal[-dev]/` based on EDUPAL_ENV.
///
/// Set EDUPAL_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("EDUPAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("edupal-dev")
    } else {
        base_dir.join("edupal")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn leaf_mut<'a>(
        root: &'a mut serde_json::Value,
        key: &str,
    ) -> Result<&'a mut serde_json::Value, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        for part in key.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(current)
    }

    /// Values `value` may stand for, given the field's current JSON shape.
    /// Optional fields serialize as null, so for those a number is tried
    /// before a string and the empty string clears the field.
    fn candidate_values(
        existing: &serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<Vec<serde_json::Value>, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let candidates = match existing {
            serde_json::Value::Bool(_) => vec![serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            )],
            serde_json::Value::Number(_) => vec![value
                .parse::<u64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?],
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                vec![serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?]
            }
            serde_json::Value::Null | serde_json::Value::String(_) if value.is_empty() => {
                vec![serde_json::Value::Null]
            }
            serde_json::Value::Null => {
                let mut candidates = Vec::new();
                if let Ok(n) = value.parse::<u64>() {
                    candidates.push(serde_json::Value::Number(n.into()));
                }
                candidates.push(serde_json::Value::String(value.into()));
                candidates
            }
            serde_json::Value::String(_) => vec![serde_json::Value::String(value.into())],
        };
        Ok(candidates)
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there when it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Returns error if key is unknown
    /// or the value does not fit the field.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        let mut scratch = json.clone();
        let candidates = Self::candidate_values(Self::leaf_mut(&mut scratch, key)?, key, value)?;

        let mut last_error = String::new();
        for candidate in candidates {
            let mut updated = json.clone();
            *Self::leaf_mut(&mut updated, key)? = candidate;
            match serde_json::from_value::<Config>(updated) {
                Ok(cfg) => {
                    *self = cfg;
                    return Ok(());
                }
                Err(e) => last_error = e.to_string(),
            }
        }

        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: last_error,
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.assistant.poll_interval_secs, 60);
        assert_eq!(parsed.updates.timeout_secs, 10);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [updates]
            base_url = "https://portal.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.updates.base_url.as_deref(),
            Some("https://portal.example.com/api")
        );
        assert_eq!(parsed.updates.timeout_secs, 10);
        assert!(parsed.assistant.auto_open_on_high_priority);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("assistant.poll_interval_secs").as_deref(), Some("60"));
        assert_eq!(cfg.get("assistant.auto_open_on_high_priority").as_deref(), Some("true"));
        assert_eq!(cfg.get("updates.base_url").as_deref(), Some("null"));
        assert!(cfg.get("assistant.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_number_bool_and_optional_fields() {
        let mut cfg = Config::default();
        cfg.set("assistant.poll_interval_secs", "30").unwrap();
        cfg.set("assistant.auto_open_on_high_priority", "false").unwrap();
        cfg.set("updates.base_url", "https://portal.example.com/api").unwrap();
        cfg.set("assistant.default_child_id", "12").unwrap();

        assert_eq!(cfg.assistant.poll_interval_secs, 30);
        assert!(!cfg.assistant.auto_open_on_high_priority);
        assert_eq!(
            cfg.updates.base_url.as_deref(),
            Some("https://portal.example.com/api")
        );
        assert_eq!(cfg.assistant.default_child_id, Some(12));
    }

    #[test]
    fn set_numeric_text_into_optional_string_field() {
        let mut cfg = Config::default();
        cfg.set("updates.base_url", "12345").unwrap();
        assert_eq!(cfg.updates.base_url.as_deref(), Some("12345"));
    }

    #[test]
    fn set_empty_string_clears_optional_field() {
        let mut cfg = Config::default();
        cfg.set("updates.base_url", "https://portal.example.com").unwrap();
        assert!(cfg.updates.base_url.is_some());
        cfg.set("updates.base_url", "").unwrap();
        assert_eq!(cfg.updates.base_url, None);
    }

    #[test]
    fn api_token_is_not_a_config_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("updates.api_token", "s3cr3t-token"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.get("updates.api_token").is_none());
    }

    #[test]
    fn legacy_token_in_file_is_dropped_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[updates]\nbase_url = \"https://portal.example.com\"\napi_token = \"s3cr3t-token\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        cfg.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("s3cr3t-token"));
        assert!(written.contains("https://portal.example.com"));
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("assistant.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("nope.timeout_secs", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("assistant.auto_open_on_high_priority", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("updates.timeout_secs", "-3"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("assistant.default_child_id", "abc"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.set("updates.timeout_secs", "3").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.updates.timeout_secs, 3);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "assistant = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
