use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;


/// A set of environment variables, keyed by name.
pub type Environment = BTreeMap<String, String>;

/// Name of the variable holding the executable search path.
pub const PATH_KEY: &str = "PATH";

/// Separator between entries of the search path on this platform.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
/// Separator between entries of the search path on this platform.
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// How the overlay's `PATH` is combined with the inherited one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMerge {
    /// Overlay entries first, then inherited ones; repeated entries dropped.
    #[default]
    Dedup,
    /// Overlay entries followed by inherited ones, repeats kept.
    Concat,
}

impl fmt::Display for PathMerge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dedup => write!(f, "dedup"),
            Self::Concat => write!(f, "concat"),
        }
    }
}

impl FromStr for PathMerge {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dedup" => Ok(Self::Dedup),
            "concat" => Ok(Self::Concat),
            _ => anyhow::bail!("Invalid path_merge value: {s} (expected \"dedup\" or \"concat\")"),
        }
    }
}

/// Snapshot the environment of the current process.
/// Variables whose name or value is not valid UTF-8 are skipped here;
/// [`crate::launch::Launch::command`] passes them to the child unchanged.
#[must_use]
pub fn snapshot() -> Environment {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Merge `overlay` on top of `base`.
///
/// Overlay values replace base values, except for `PATH`, which becomes the
/// overlay's entries followed by the base's. An empty overlay returns `base`
/// untouched.
#[must_use]
pub fn merge(base: Environment, overlay: &Environment, strategy: PathMerge) -> Environment {
    if overlay.is_empty() {
        return base;
    }

    let base_path_key = path_key(&base).map(str::to_owned);
    let overlay_path_key = path_key(overlay).map(str::to_owned);
    let base_path = base_path_key
        .as_deref()
        .and_then(|k| base.get(k))
        .cloned()
        .unwrap_or_default();

    let mut merged = base;
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }

    // Without a PATH in the overlay the inherited one is kept as is.
    let Some(key) = overlay_path_key else {
        return merged;
    };
    if let Some(old) = base_path_key.filter(|old| *old != key) {
        merged.remove(&old);
    }
    let joined = join_paths(&overlay[&key], &base_path, strategy);
    merged.insert(key, joined);
    merged
}

/// Join two search paths, `front` taking lookup priority over `back`.
#[must_use]
pub fn join_paths(front: &str, back: &str, strategy: PathMerge) -> String {
    let entries = split_path(front).chain(split_path(back));
    let mut kept: Vec<&str> = Vec::new();
    for entry in entries {
        if strategy == PathMerge::Dedup && kept.contains(&entry) {
            continue;
        }
        kept.push(entry);
    }
    kept.join(PATH_SEPARATOR.to_string().as_str())
}

fn split_path(value: &str) -> impl Iterator<Item = &str> {
    value.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
}

/// Find the spelling of the `PATH` variable used in `env`.
/// Windows names are case-insensitive (`Path` is common there).
fn path_key(env: &Environment) -> Option<&str> {
    env.keys()
        .map(String::as_str)
        .find(|k| if cfg!(windows) { k.eq_ignore_ascii_case(PATH_KEY) } else { *k == PATH_KEY })
}
