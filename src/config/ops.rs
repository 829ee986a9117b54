use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{Settings, DEFAULT_SETTINGS_NAME};

impl Settings {
    /// Directory holding all settings files.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("open-terminal"))
    }

    /// Path of the settings file called `name`; an empty name means the default.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path(name: &str) -> Result<PathBuf> {
        let name = if name.is_empty() { DEFAULT_SETTINGS_NAME } else { name };
        Ok(Self::dir()?.join(name))
    }

    /// Load the settings file called `name`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load(name: &str) -> Result<Self> {
        Self::load_from(&Self::path(name)?)
    }

    /// Load settings from an explicit file path.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings at {}", path.display()))?;
        Ok(settings)
    }

    /// Write these settings to the file called `name`.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save(&self, name: &str) -> Result<()> {
        self.save_to(&Self::path(name)?)
    }

    /// Write these settings to an explicit file path.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Get a setting by key; `envs.NAME` addresses a single variable.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "emulator" => Ok(self.emulator.clone().unwrap_or_default()),
            "arguments" => Ok(self.arguments.clone().unwrap_or_default()),
            "missing_directory" => Ok(self.missing_directory.to_string()),
            "path_merge" => Ok(self.path_merge.to_string()),
            _ => match key.strip_prefix("envs.") {
                Some(var) if !var.is_empty() => Ok(self.envs.get(var).cloned().unwrap_or_default()),
                _ => anyhow::bail!("Unknown settings key: {key}"),
            },
        }
    }

    /// Set a setting by key. An empty value clears optional settings.
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a value of the wrong kind.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "emulator" => {
                self.emulator = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "arguments" => {
                shell_words::split(value)
                    .with_context(|| format!("Invalid arguments: {value}"))?;
                self.arguments = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "missing_directory" => self.missing_directory = value.parse()?,
            "path_merge" => self.path_merge = value.parse()?,
            _ => match key.strip_prefix("envs.") {
                Some(var) if !var.is_empty() => {
                    if value.is_empty() {
                        self.envs.remove(var);
                    } else {
                        self.envs.insert(var.to_string(), value.to_string());
                    }
                }
                _ => anyhow::bail!("Unknown settings key: {key}"),
            },
        }
        Ok(())
    }
}
