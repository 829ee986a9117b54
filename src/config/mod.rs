mod ops;


use serde::{Deserialize, Serialize};

use crate::emulator;
use crate::env::{Environment, PathMerge};
use crate::resolve::MissingDirectory;

/// Settings file read when no name is given; the counterpart of the editor
/// plugin's `Terminal.sublime-settings`.
pub const DEFAULT_SETTINGS_NAME: &str = "Terminal.toml";

/// User settings for launching the terminal, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emulator executable, e.g. "alacritty" or "/usr/bin/kitty"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulator: Option<String>,
    /// Extra arguments in shell syntax, e.g. "--title 'dev shell'"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// What to do when the target directory does not exist.
    pub missing_directory: MissingDirectory,
    /// How `envs.PATH` is combined with the inherited `PATH`.
    pub path_merge: PathMerge,
    /// Variables set on top of the inherited environment.
    #[serde(skip_serializing_if = "Environment::is_empty")]
    pub envs: Environment,
}

impl Settings {
    /// The configured emulator, or the platform default when unset or blank.
    #[must_use]
    pub fn emulator(&self) -> &str {
        self.emulator
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| emulator::default_emulator())
    }

    /// The configured argument string, empty when unset.
    #[must_use]
    pub fn arguments(&self) -> &str {
        self.arguments.as_deref().unwrap_or_default()
    }
}
