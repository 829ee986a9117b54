use open_terminal::{CliHost, OpenTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use super::sidebar_selection;

/// Print whether the command should be shown; exit status 1 when hidden.
pub fn cmd_visible(from_sidebar: bool, sidebar: Vec<PathBuf>) -> ExitCode {
    let visible = is_visible(from_sidebar, sidebar);
    println!("{visible}");
    if visible { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn is_visible(from_sidebar: bool, sidebar: Vec<PathBuf>) -> bool {
    let selection = sidebar_selection(from_sidebar, sidebar);
    OpenTerminal::<CliHost>::is_visible(selection.as_deref())
}
