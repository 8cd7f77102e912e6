use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the notes (`projects/`, `TIME.md`)
    pub root: PathBuf,
    /// Project documents directory, relative to `root`
    pub projects_dir: String,
    /// Index document inside the projects directory that is never scanned
    pub index_file: String,
    /// Hours log, relative to `root`
    pub time_file: String,
    /// Pinned "today"; the local calendar date is used when absent
    pub today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            projects_dir: "projects".to_string(),
            index_file: "INDEX.md".to_string(),
            time_file: "TIME.md".to_string(),
            today: None,
        }
    }
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config at {}: {e}", path.display());
                Config::default()
            }),
            _ => Config::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply `REMINDER_*` overrides from the given lookup
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("REMINDER_ROOT") {
            self.root = PathBuf::from(root);
        }

        if let Some(date) = lookup("REMINDER_DATE") {
            match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
                Ok(d) => self.today = Some(d),
                Err(e) => log::warn!("Ignoring REMINDER_DATE={date:?}: {e}"),
            }
        }
    }

    /// Get the configuration file path, if a home or XDG directory is known
    fn config_path() -> Option<PathBuf> {
        // Use XDG config directory standard or fallback to ~/.config
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg_config) => PathBuf::from(xdg_config),
            Err(_) => dirs::home_dir()?.join(".config"),
        };

        Some(config_dir.join("chief-reminder").join("config.json"))
    }

    pub fn projects_path(&self) -> PathBuf {
        self.root.join(&self.projects_dir)
    }

    pub fn time_path(&self) -> PathBuf {
        self.root.join(&self.time_file)
    }

    /// The date the reminder is computed for
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.projects_path(), PathBuf::from("./projects"));
        assert_eq!(config.time_path(), PathBuf::from("./TIME.md"));
        assert_eq!(config.index_file, "INDEX.md");
        assert!(config.today.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"root": "/srv/notes"}"#).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/notes"));
        assert_eq!(config.projects_dir, "projects");
        assert_eq!(config.time_file, "TIME.md");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            root: PathBuf::from("/tmp/notes"),
            today: NaiveDate::from_ymd_opt(2026, 10, 16),
            ..Default::default()
        };

        let serialized = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("REMINDER_ROOT", "/data/chief"),
            ("REMINDER_DATE", "2026-10-16"),
        ]));

        assert_eq!(config.root, PathBuf::from("/data/chief"));
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn test_invalid_date_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[("REMINDER_DATE", "2026-13-40")]));
        assert!(config.today.is_none());
    }
}
