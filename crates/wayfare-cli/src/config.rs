// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "wayfare";
const DEFAULT_DEMO_SEED: u64 = 20_26;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub trip_path: Option<String>,
    pub demo_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_markup: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_markup: Some(true),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("WAYFARE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set WAYFARE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [data] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(trip_path) = &self.data.trip_path
            && trip_path.contains("://")
        {
            bail!(
                "data.trip_path in {} looks like a URI, expected a filesystem path: {trip_path:?}",
                path.display()
            );
        }
        Ok(())
    }

    pub fn trip_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data.trip_path {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = env::var_os("WAYFARE_TRIP_PATH") {
            return Ok(PathBuf::from(path));
        }

        let data_root = dirs::data_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [data].trip_path or WAYFARE_TRIP_PATH")
        })?;
        Ok(data_root.join(APP_NAME).join("trip.json"))
    }

    pub fn demo_seed(&self) -> u64 {
        self.data.demo_seed.unwrap_or(DEFAULT_DEMO_SEED)
    }

    pub fn show_markup(&self) -> bool {
        self.ui.show_markup.unwrap_or(true)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# wayfare config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# Optional. Default is platform data dir (for example ~/.local/share/wayfare/trip.json)\n# trip_path = \"/absolute/path/to/trip.json\"\ndemo_seed = {}\n\n[ui]\nshow_markup = true\n",
            path.display(),
            DEFAULT_DEMO_SEED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert!(config.show_markup());
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nshow_markup = false\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[data] and [ui]"));
        Ok(())
    }

    #[test]
    fn versioned_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[data]\ntrip_path = \"/trips/summer.json\"\ndemo_seed = 9\n[ui]\nshow_markup = false\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.trip_path()?, PathBuf::from("/trips/summer.json"));
        assert_eq!(config.demo_seed(), 9);
        assert!(!config.show_markup());
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn trip_path_rejects_uri_style_value() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[data]\ntrip_path = \"https://evil.example/trip.json\"\n",
        )?;
        let error = Config::load(&path).expect_err("URI trip_path should fail validation");
        assert!(error.to_string().contains("looks like a URI"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("WAYFARE_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("WAYFARE_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("WAYFARE_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn trip_path_prefers_config_over_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[data]\ntrip_path = \"/explicit/from-config.json\"\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("WAYFARE_TRIP_PATH", "/from/env.json");
        }
        let config = Config::load(&path)?;
        let resolved = config.trip_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("WAYFARE_TRIP_PATH");
        }
        assert_eq!(resolved, PathBuf::from("/explicit/from-config.json"));
        Ok(())
    }

    #[test]
    fn trip_path_uses_env_override_when_config_value_missing() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("WAYFARE_TRIP_PATH", "/from/env-only.json");
        }
        let config = Config::load(&path)?;
        let resolved = config.trip_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("WAYFARE_TRIP_PATH");
        }
        assert_eq!(resolved, PathBuf::from("/from/env-only.json"));
        Ok(())
    }

    #[test]
    fn trip_path_defaults_to_trip_json_when_unset() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) = write_config("version = 1\n")?;
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("WAYFARE_TRIP_PATH");
        }
        let config = Config::load(&path)?;
        let resolved = config.trip_path()?;
        assert!(resolved.ends_with("trip.json"), "got {}", resolved.display());
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[data]"));
        assert!(example.contains("[ui]"));
        Ok(())
    }
}
