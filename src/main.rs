//! Command-line entry point for `open-terminal`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::{config::ConfigAction, open::OpenArgs};

#[derive(Parser)]
#[command(name = "open-terminal", about = "Open a terminal emulator in the directory you are working in")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a terminal in the resolved working directory
    Open(OpenArgs),

    /// Report whether the command applies to a sidebar selection
    Visible {
        /// Items selected in the editor sidebar
        #[arg(long = "sidebar", value_name = "PATH")]
        sidebar: Vec<std::path::PathBuf>,

        /// Invoked from the sidebar menu, even if nothing is selected
        #[arg(long)]
        from_sidebar: bool,
    },

    /// Manage terminal settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,

        /// Settings file name under the config directory
        #[arg(long, global = true, default_value = "")]
        settings: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open(args) => commands::open::cmd_open(args),
        Commands::Visible { sidebar, from_sidebar } => {
            Ok(commands::visible::cmd_visible(from_sidebar, sidebar))
        }
        Commands::Config { action, settings } => {
            commands::config::cmd_config(action, &settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
