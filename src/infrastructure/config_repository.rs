use crate::domain::entities::PageConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct ConfigRepository {
    config_path: PathBuf,
}

impl ConfigRepository {
    pub fn new() -> Self {
        let config_dir = if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".config").join("recipe-page")
        } else {
            PathBuf::from(".")
        };

        Self::with_path(config_dir.join("config.json"))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn load(&self) -> Result<PageConfig> {
        if !self.config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", self.config_path);
            return Ok(PageConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .context("Failed to read config file")?;

        let config = serde_json::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Loads the config, logging and falling back to defaults on failure. A
    /// missing file is created with the defaults so it can be edited.
    pub fn load_or_default(&self) -> PageConfig {
        if !self.config_path.exists() {
            let config = PageConfig::default();
            match self.save(&config) {
                Ok(()) => tracing::info!("Wrote default config to {:?}", self.config_path),
                Err(e) => tracing::warn!("{:#}", e),
            }
            return config;
        }

        self.load().unwrap_or_else(|e| {
            tracing::warn!("{:#}, using default config", e);
            PageConfig::default()
        })
    }

    pub fn save(&self, config: &PageConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(&self.config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }
}

impl Default for ConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ThemeMode;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("recipe-page-{}-{}", name, std::process::id()))
            .join("config.json")
    }

    #[test]
    fn missing_file_yields_defaults() {
        let repository = ConfigRepository::with_path(scratch_path("missing"));
        assert_eq!(repository.load().unwrap(), PageConfig::default());
    }

    #[test]
    fn first_run_writes_default_file() {
        let path = scratch_path("first-run");
        let repository = ConfigRepository::with_path(path.clone());

        assert_eq!(repository.load_or_default(), PageConfig::default());
        assert!(path.exists());
        assert_eq!(repository.load().unwrap(), PageConfig::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn saved_config_loads_back() {
        let path = scratch_path("saved");
        let repository = ConfigRepository::with_path(path.clone());
        let config = PageConfig {
            theme: ThemeMode::Light,
            initial_query: "?page=2".to_string(),
            highlight_ms: 900,
            ..PageConfig::default()
        };

        repository.save(&config).unwrap();
        assert_eq!(repository.load().unwrap(), config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "card_stagger_ms": 50 }"#).unwrap();

        let config = ConfigRepository::with_path(path.clone()).load().unwrap();
        assert_eq!(config.card_stagger_ms, 50);
        assert_eq!(config.card_transition_ms, 400);
        assert_eq!(config.filters, PageConfig::default().filters);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_falls_back() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let repository = ConfigRepository::with_path(path.clone());
        assert!(repository.load().is_err());
        assert_eq!(repository.load_or_default(), PageConfig::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
