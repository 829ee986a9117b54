use std::path::{Path, PathBuf};

use crate::env::{Environment, PATH_KEY};

/// Emulator used when none is configured, per `std::env::consts::OS`.
const DEFAULT_EMULATORS: &[(&str, &str)] = &[
    ("windows", "cmd"),
    ("macos",   "zsh"),
    ("linux",   "xterm"),
];

/// Fallback for platforms missing from the table above.
const FALLBACK_EMULATOR: &str = "xterm";

/// The default emulator for the running platform.
#[must_use]
pub fn default_emulator() -> &'static str {
    default_emulator_for(std::env::consts::OS)
}

/// The default emulator for `os`, named as in `std::env::consts::OS`.
#[must_use]
pub fn default_emulator_for(os: &str) -> &'static str {
    DEFAULT_EMULATORS
        .iter()
        .find(|&&(name, _)| name == os)
        .map_or(FALLBACK_EMULATOR, |&(_, program)| program)
}

/// Look `program` up on the `PATH` of `env`, as the spawned process would.
/// Only used for diagnostics; the spawn itself is the authority.
#[must_use]
pub fn locate(program: &str, env: &Environment, cwd: &Path) -> Option<PathBuf> {
    let paths = env
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(PATH_KEY))
        .map(|(_, v)| v.as_str());
    which::which_in(program, paths, cwd).ok()
}
