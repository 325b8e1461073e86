//! Controller configuration
//!
//! Defaults can be overridden from a TOML or JSON file and then from
//! `NAVSTACK_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::errors::{NavError, Result};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "NAVSTACK_";

/// Default separator between entries in `describe()` output
pub const DEFAULT_SEPARATOR: &str = " > ";

/// Field names accepted by [`NavConfig::set_from_string`]
const KEYS: [&str; 3] = ["separator", "trace_transitions", "notify_on_noop"];

/// Configuration for a [`NavController`](crate::NavController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Join string used by `describe()`
    pub separator: String,
    /// Emit a debug event for every stack mutation
    pub trace_transitions: bool,
    /// Also notify observers when a call leaves the stack unchanged
    pub notify_on_noop: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            trace_transitions: true,
            notify_on_noop: false,
        }
    }
}

impl NavConfig {
    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavError::io(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(NavError::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply `NAVSTACK_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply `NAVSTACK_*` overrides from an arbitrary key/value source.
    ///
    /// Keys without the prefix are ignored and unknown prefixed keys are
    /// skipped with a warning. Either every override applies or, on error,
    /// `self` is left untouched.
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut merged = self.clone();
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let name = name.to_ascii_lowercase();
            if !KEYS.contains(&name.as_str()) {
                warn!(key = key.as_ref(), "ignoring unknown navstack override");
                continue;
            }
            merged.set_from_string(&name, value.as_ref())?;
        }
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    /// Set a single field by name.
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "separator" => self.separator = value.to_string(),
            "trace_transitions" => self.trace_transitions = parse_bool(key, value)?,
            "notify_on_noop" => self.notify_on_noop = parse_bool(key, value)?,
            other => return Err(NavError::config(format!("Unknown config key: {other}"))),
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(NavError::config("separator must not be empty"));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(NavError::config(format!(
            "Expected a boolean for {key}, got {value:?}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.separator, " > ");
        assert!(config.trace_transitions);
        assert!(!config.notify_on_noop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_toml_with_partial_fields() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "separator = \" | \"").unwrap();

        let config = NavConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.separator, " | ");
        assert!(config.trace_transitions);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"notify_on_noop": true}}"#).unwrap();

        let config = NavConfig::load_from_file(file.path()).unwrap();
        assert!(config.notify_on_noop);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert_matches!(
            NavConfig::load_from_file(file.path()),
            Err(NavError::Config { .. })
        );
    }

    #[test]
    fn test_load_rejects_empty_separator() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "separator = \"\"").unwrap();
        assert_matches!(
            NavConfig::load_from_file(file.path()),
            Err(NavError::Config { .. })
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert_matches!(
            NavConfig::load_from_file(Path::new("/nonexistent/navstack.toml")),
            Err(NavError::Io { .. })
        );
    }

    #[test]
    fn test_merge_with_vars() {
        let mut config = NavConfig::default();
        config
            .merge_with_vars([
                ("NAVSTACK_SEPARATOR", ", "),
                ("NAVSTACK_TRACE_TRANSITIONS", "off"),
                ("HOME", "/root"),
            ])
            .unwrap();

        assert_eq!(config.separator, ", ");
        assert!(!config.trace_transitions);
    }

    #[test]
    fn test_merge_with_vars_rejects_bad_values() {
        let mut config = NavConfig::default();
        assert_matches!(
            config.merge_with_vars([("NAVSTACK_NOTIFY_ON_NOOP", "maybe")]),
            Err(NavError::Config { .. })
        );
    }

    #[test]
    fn test_failed_merge_leaves_config_untouched() {
        let mut config = NavConfig::default();

        assert!(config
            .merge_with_vars([("NAVSTACK_SEPARATOR", "")])
            .is_err());
        assert_eq!(config, NavConfig::default());

        assert!(config
            .merge_with_vars([
                ("NAVSTACK_SEPARATOR", " | "),
                ("NAVSTACK_TRACE_TRANSITIONS", "sometimes"),
            ])
            .is_err());
        assert_eq!(config, NavConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_with_vars_skips_unknown_keys() {
        let mut config = NavConfig::default();
        config
            .merge_with_vars([("NAVSTACK_SEPARATOR", "|"), ("NAVSTACK_LOG", "debug")])
            .unwrap();
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn test_set_from_string_rejects_unknown_key() {
        let mut config = NavConfig::default();
        assert_matches!(
            config.set_from_string("depth", "3"),
            Err(NavError::Config { .. })
        );
    }
}
