//! Server settings
//!
//! Settings load from an optional JSON file in the user config directory and
//! can be overridden per-run through environment variables.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default API port
pub const DEFAULT_API_PORT: u16 = 2950;

/// Server runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Port the REST API listens on
    pub api_port: u16,
    /// Default log level when no env filter is set
    pub log_level: String,
    /// Emit JSON logs
    pub log_json: bool,
    /// Additionally write logs to this file
    pub log_file: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_port: DEFAULT_API_PORT,
            log_level: "info".to_string(),
            log_json: false,
            log_file: None,
        }
    }
}

impl ServerSettings {
    /// Settings file location under the user config directory
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signage-hub").join("settings.json"))
    }

    /// Load settings: file first, then environment overrides
    ///
    /// A missing or unreadable file falls back to defaults; a malformed file
    /// is reported and ignored.
    pub fn load() -> Self {
        let mut settings: Self = Self::settings_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| match serde_json::from_str(&contents) {
                Ok(settings) => Some(settings),
                Err(err) => {
                    tracing::warn!(%err, "settings file malformed, using defaults");
                    None
                }
            })
            .unwrap_or_default();

        settings.apply_env();
        settings
    }

    /// Persist settings to the config directory
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::settings_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        fs::write(path, json)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    // Lookup is injected so tests never touch process-global env vars.
    fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(port) = get("SIGNAGE_PORT") {
            match port.parse() {
                Ok(port) => self.api_port = port,
                Err(_) => tracing::warn!(%port, "SIGNAGE_PORT is not a valid port, ignoring"),
            }
        }
        if let Some(level) = get("SIGNAGE_LOG") {
            self.log_level = level;
        }
        if let Some(format) = get("SIGNAGE_LOG_FORMAT") {
            self.log_json = format.eq_ignore_ascii_case("json");
        }
        if let Some(path) = get("SIGNAGE_LOG_FILE") {
            self.log_file = Some(PathBuf::from(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.api_port, DEFAULT_API_PORT);
        assert_eq!(settings.log_level, "info");
        assert!(!settings.log_json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: ServerSettings = serde_json::from_str(r#"{ "api_port": 8080 }"#).unwrap();
        assert_eq!(settings.api_port, 8080);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let mut settings = ServerSettings::default();
        settings.apply_overrides(|name| match name {
            "SIGNAGE_PORT" => Some("9000".to_string()),
            "SIGNAGE_LOG" => Some("debug".to_string()),
            "SIGNAGE_LOG_FORMAT" => Some("json".to_string()),
            "SIGNAGE_LOG_FILE" => Some("/tmp/signage-hub.log".to_string()),
            _ => None,
        });

        assert_eq!(settings.api_port, 9000);
        assert_eq!(settings.log_level, "debug");
        assert!(settings.log_json);
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/signage-hub.log")));
    }

    #[test]
    fn test_bad_port_override_is_ignored() {
        let mut settings = ServerSettings::default();
        settings.apply_overrides(|name| (name == "SIGNAGE_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(settings.api_port, DEFAULT_API_PORT);
    }

    #[test]
    fn test_load_layers_file_and_env() {
        // Exercises the full load path; without overrides the result holds
        // whatever the file had, so only structural properties are asserted.
        let settings = ServerSettings::load();
        assert!(!settings.log_level.is_empty());
    }
}
