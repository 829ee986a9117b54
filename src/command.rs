use std::path::PathBuf;

use crate::config::{Settings, DEFAULT_SETTINGS_NAME};
use crate::emulator;
use crate::env;
use crate::host::Host;
use crate::launch::Launch;
use crate::resolve::{self, Candidates, ResolveError};


/// Arguments of a single "open terminal" request.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Directory (or file) to open the terminal in.
    pub path: Option<PathBuf>,
    /// Settings file to use; empty for [`DEFAULT_SETTINGS_NAME`].
    pub settings_name: String,
    /// Sidebar selection when invoked from the sidebar context menu.
    pub sidebar: Option<Vec<PathBuf>>,
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The emulator was started in this directory.
    Launched(PathBuf),
    /// No usable directory; nothing was started.
    Skipped,
    /// Something failed and the user has been told.
    Failed,
}

/// The "open terminal here" command.
pub struct OpenTerminal<H> {
    host: H,
}

impl<H: Host> OpenTerminal<H> {
    /// Wrap `host`.
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The host this command talks to.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Whether the command should be offered in a menu.
    /// From the sidebar it only makes sense for exactly one selected item.
    #[must_use]
    pub fn is_visible(sidebar: Option<&[PathBuf]>) -> bool {
        sidebar.is_none_or(|items| items.len() == 1)
    }

    /// Work out the directory a terminal would open in.
    ///
    /// # Errors
    ///
    /// See [`resolve::resolve`].
    pub fn resolve_directory(
        &self,
        invocation: &Invocation,
        settings: &Settings,
    ) -> Result<PathBuf, ResolveError> {
        let candidates = Candidates {
            explicit: invocation.path.clone(),
            sidebar: invocation.sidebar.clone(),
            active_file: self.host.active_file(),
            open_folders: self.host.open_folders(),
        };
        resolve::resolve(
            &candidates,
            settings.missing_directory,
            self.host.home_dir().as_deref(),
        )
    }

    /// Open a terminal. Failures are logged and shown to the user, never returned.
    pub fn run(&self, invocation: &Invocation) -> Outcome {
        let settings_name = if invocation.settings_name.is_empty() {
            DEFAULT_SETTINGS_NAME
        } else {
            invocation.settings_name.as_str()
        };
        let settings = match self.host.load_settings(settings_name) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e:#}");
                self.host.show_error(&format!("Error loading terminal settings!\n\n{e:#}"));
                return Outcome::Failed;
            }
        };

        let dir = match self.resolve_directory(invocation, &settings) {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!("{e}");
                return Outcome::Skipped;
            }
        };
        log::debug!("Opening terminal in {}", dir.display());

        let envs = env::merge(self.host.environment(), &settings.envs, settings.path_merge);
        let emulator = settings.emulator();
        match emulator::locate(emulator, &envs, &dir) {
            Some(found) => log::debug!("Emulator {emulator} found at {}", found.display()),
            None => log::debug!("Emulator {emulator} not found on PATH"),
        }

        let attempted = match Launch::new(emulator, settings.arguments(), dir.clone(), envs) {
            Ok(launch) => match self.host.spawn(&launch) {
                Ok(()) => return Outcome::Launched(dir),
                Err(e) => {
                    log::debug!("{e}");
                    launch.command_line()
                }
            },
            Err(e) => {
                log::debug!("{e}");
                format!("{emulator} {}", settings.arguments())
            }
        };

        log::error!("Error open terminal : {attempted:?}");
        self.host.show_error(&error_message(settings_name));
        Outcome::Failed
    }
}

/// Text shown when the emulator could not be started.
#[must_use]
pub fn error_message(settings_name: &str) -> String {
    format!(
        "Error open terminal emulator!\n\
         \n\
         Set the 'emulator' property in '{settings_name}' to your preferred emulator:\n\
         \n\
         \x20   open-terminal config set emulator <program> --settings {settings_name}"
    )
}
