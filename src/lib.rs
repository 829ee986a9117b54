//! Open a terminal emulator in the directory you are working in.
//!
//! The directory comes from a sidebar selection, an explicit path, the
//! workspace folder of the active file, or the home directory, in that order.
//! Extra environment variables from the settings file are merged into the
//! inherited environment before the emulator is spawned.

/// The "open terminal" command itself.
pub mod command;
/// Settings files.
pub mod config;
/// Default emulators per platform.
pub mod emulator;
/// Environment snapshots and merging.
pub mod env;
/// The editor-facing capability interface.
pub mod host;
/// Spawning the emulator process.
pub mod launch;
/// Choosing the working directory.
pub mod resolve;

pub use command::{Invocation, OpenTerminal, Outcome};
pub use config::Settings;
pub use host::{CliHost, Host};
