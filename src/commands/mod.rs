pub mod config;
pub mod open;
pub mod visible;

use std::path::PathBuf;

/// Sidebar selection as seen by the library: `None` unless the command came
/// from the sidebar, which `--from-sidebar` states even with nothing selected.
pub fn sidebar_selection(from_sidebar: bool, items: Vec<PathBuf>) -> Option<Vec<PathBuf>> {
    (from_sidebar || !items.is_empty()).then_some(items)
}
