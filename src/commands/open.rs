use anyhow::Result;
use clap::Args;
use open_terminal::{CliHost, Invocation, OpenTerminal, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args)]
pub struct OpenArgs {
    /// Directory (or a file inside it) to open the terminal in
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Settings file name under the config directory
    #[arg(long, default_value = "")]
    settings: String,

    /// Item selected in the editor sidebar (repeatable)
    #[arg(long = "sidebar", value_name = "PATH")]
    sidebar: Vec<PathBuf>,

    /// Invoked from the sidebar menu, even if nothing is selected
    #[arg(long)]
    from_sidebar: bool,

    /// File open in the active editor view
    #[arg(long, value_name = "FILE")]
    active_file: Option<PathBuf>,

    /// Top-level folder open in the editor (repeatable)
    #[arg(long = "folder", value_name = "DIR")]
    folders: Vec<PathBuf>,

    /// Print the resolved directory and exit without opening anything
    #[arg(long)]
    print_dir: bool,
}

pub fn cmd_open(args: OpenArgs) -> Result<ExitCode> {
    let host = CliHost {
        active_file: args.active_file,
        open_folders: args.folders,
    };
    let invocation = Invocation {
        path: args.path,
        settings_name: args.settings,
        sidebar: super::sidebar_selection(args.from_sidebar, args.sidebar),
    };
    let command = OpenTerminal::new(host);

    if args.print_dir {
        let settings = open_terminal::Settings::load(&invocation.settings_name)?;
        let dir = command.resolve_directory(&invocation, &settings)?;
        println!("{}", dir.display());
        return Ok(ExitCode::SUCCESS);
    }

    match command.run(&invocation) {
        Outcome::Launched(dir) => {
            eprintln!("Opened terminal in {}", dir.display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Skipped | Outcome::Failed => Ok(ExitCode::FAILURE),
    }
}
