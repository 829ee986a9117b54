use anyhow::{bail, Result};
use clap::Subcommand;
use open_terminal::config::Settings;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the settings file, the emulator that would be launched, and its contents
    Show,
    /// Print the settings file path
    Path,
    /// Write a settings file with default values
    Init {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Set a value (e.g. emulator alacritty, envs.PATH /opt/bin); empty clears it
    Set { key: String, value: String },
    /// Get a value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction, name: &str) -> Result<()> {
    let path = Settings::path(name)?;
    match action {
        ConfigAction::Show => {
            let settings = Settings::load_from(&path)?;
            print!("{}", render_show(&path, &settings)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to replace it)", path.display());
            }
            Settings::default().save_to(&path)?;
            println!("Wrote default settings to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load_from(&path)?;
            settings.set_value(&key, &value)?;
            settings.save_to(&path)?;
            if value.is_empty() {
                println!("Cleared {key}");
            } else {
                println!("Set {key} = {value}");
            }
        }
        ConfigAction::Get { key } => {
            let settings = Settings::load_from(&path)?;
            println!("{}", settings.get_value(&key)?);
        }
    }
    Ok(())
}

/// Header comments naming the file and the effective emulator, then the TOML.
fn render_show(path: &Path, settings: &Settings) -> Result<String> {
    let mut out = String::new();
    let origin = if path.exists() { "" } else { " (not created yet)" };
    writeln!(out, "# {}{origin}", path.display())?;
    let source = if settings.emulator.as_deref().is_some_and(|e| !e.trim().is_empty()) {
        "configured"
    } else {
        "platform default"
    };
    writeln!(out, "# emulator: {} ({source})", settings.emulator())?;
    out.push_str(&toml::to_string_pretty(settings)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_reports_default_emulator() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Terminal.toml");
        let out = render_show(&path, &Settings::default()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), format!("# {} (not created yet)", path.display()));
        assert_eq!(
            lines.next().unwrap(),
            format!("# emulator: {} (platform default)", open_terminal::emulator::default_emulator())
        );
    }

    #[test]
    fn test_show_reports_configured_emulator() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Terminal.toml");
        let mut settings = Settings::default();
        settings.set_value("emulator", "kitty").unwrap();
        settings.save_to(&path).unwrap();

        let out = render_show(&path, &settings).unwrap();
        assert!(out.starts_with(&format!("# {}\n# emulator: kitty (configured)\n", path.display())));
        assert!(out.contains("emulator = \"kitty\""));
    }
}
