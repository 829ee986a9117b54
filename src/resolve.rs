use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// What to do when the chosen path does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDirectory {
    /// Open the terminal in the home directory instead.
    #[default]
    Home,
    /// Log the problem and do not open anything.
    Abort,
}

impl fmt::Display for MissingDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for MissingDirectory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "abort" => Ok(Self::Abort),
            _ => anyhow::bail!("Invalid missing_directory value: {s} (expected \"home\" or \"abort\")"),
        }
    }
}

/// Why no working directory could be chosen.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The chosen path is neither a directory nor a file inside one.
    #[error("'{}' is not a directory!", .0.display())]
    NotADirectory(PathBuf),
    /// A fallback to the home directory was needed but it is unknown.
    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

/// The inputs a working directory can be chosen from.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    /// Path passed explicitly by the caller.
    pub explicit: Option<PathBuf>,
    /// Items selected in the editor's sidebar, if invoked from there.
    pub sidebar: Option<Vec<PathBuf>>,
    /// The file open in the active editor view.
    pub active_file: Option<PathBuf>,
    /// Top-level folders open in the editor window.
    pub open_folders: Vec<PathBuf>,
}

impl Candidates {
    /// Pick the highest-priority candidate without touching the filesystem.
    /// `None` means the home directory should be used.
    #[must_use]
    pub fn pick(&self) -> Option<PathBuf> {
        if let Some(first) = self.sidebar.as_deref().and_then(<[PathBuf]>::first) {
            return Some(first.clone());
        }
        if let Some(explicit) = self.explicit.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return Some(explicit.clone());
        }
        self.active_file
            .as_deref()
            .map(|file| workspace_folder(file, &self.open_folders))
    }
}

/// The most specific open folder containing `file`, or its parent directory.
///
/// When several folders contain the file the lexicographically greatest one
/// wins, which for nested folders is the deepest.
#[must_use]
pub fn workspace_folder(file: &Path, open_folders: &[PathBuf]) -> PathBuf {
    open_folders
        .iter()
        .filter(|folder| file.starts_with(folder))
        .max_by(|a, b| a.as_os_str().cmp(b.as_os_str()))
        .cloned()
        .unwrap_or_else(|| parent_of(file))
}

/// Choose the working directory for a new terminal.
///
/// # Errors
///
/// Returns [`ResolveError::NotADirectory`] when the chosen path does not
/// exist and `policy` is [`MissingDirectory::Abort`], and
/// [`ResolveError::NoHomeDirectory`] when a home fallback is needed but
/// `home` is `None`.
pub fn resolve(
    candidates: &Candidates,
    policy: MissingDirectory,
    home: Option<&Path>,
) -> Result<PathBuf, ResolveError> {
    let Some(path) = candidates.pick() else {
        log::debug!("No candidate path, using home directory");
        return home.map(Path::to_path_buf).ok_or(ResolveError::NoHomeDirectory);
    };
    normalize(path, policy, home)
}

/// Turn `path` into an existing directory: files become their parent, and
/// missing paths are handled according to `policy`.
///
/// # Errors
///
/// See [`resolve`].
pub fn normalize(
    path: PathBuf,
    policy: MissingDirectory,
    home: Option<&Path>,
) -> Result<PathBuf, ResolveError> {
    if path.is_dir() {
        return Ok(path);
    }
    if path.is_file() {
        let parent = parent_of(&path);
        if parent.is_dir() {
            log::debug!("{} is a file, using {}", path.display(), parent.display());
            return Ok(parent);
        }
    }
    match policy {
        MissingDirectory::Home => {
            log::debug!("{} does not exist, using home directory", path.display());
            home.map(Path::to_path_buf).ok_or(ResolveError::NoHomeDirectory)
        }
        MissingDirectory::Abort => Err(ResolveError::NotADirectory(path)),
    }
}

fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
