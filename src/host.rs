use anyhow::Result;
use std::path::PathBuf;

use crate::config::Settings;
use crate::env::{self, Environment};
use crate::launch::{Launch, LaunchError};

/// What the launcher needs from the editor it runs inside.
pub trait Host {
    /// Path of the file in the active view, if it has been saved.
    fn active_file(&self) -> Option<PathBuf>;

    /// Top-level folders open in the current window.
    fn open_folders(&self) -> Vec<PathBuf>;

    /// Load the settings file called `name` (empty for the default one).
    ///
    /// # Errors
    ///
    /// Fails when the settings exist but cannot be read.
    fn load_settings(&self, name: &str) -> Result<Settings>;

    /// Tell the user something went wrong.
    fn show_error(&self, message: &str);

    /// The environment a new terminal inherits.
    fn environment(&self) -> Environment {
        env::snapshot()
    }

    /// The user's home directory.
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Start the emulator.
    ///
    /// # Errors
    ///
    /// Fails when the process cannot be started.
    fn spawn(&self, launch: &Launch) -> Result<(), LaunchError> {
        launch.spawn()
    }
}

/// A [`Host`] backed by command-line flags, settings files under
/// [`Settings::dir`] and stderr.
#[derive(Debug, Clone, Default)]
pub struct CliHost {
    /// The file being edited, if any.
    pub active_file: Option<PathBuf>,
    /// Folders open in the editor.
    pub open_folders: Vec<PathBuf>,
}

impl Host for CliHost {
    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn open_folders(&self) -> Vec<PathBuf> {
        self.open_folders.clone()
    }

    fn load_settings(&self, name: &str) -> Result<Settings> {
        Settings::load(name)
    }

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }
}
