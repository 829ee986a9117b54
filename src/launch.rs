use std::path::PathBuf;
use std::process::Command;

use crate::env::Environment;

/// Why the emulator could not be started.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The `arguments` setting is not valid shell syntax.
    #[error("Invalid emulator arguments {arguments:?}: {source}")]
    Arguments {
        /// The raw argument string.
        arguments: String,
        /// What the shell-word parser objected to.
        source: shell_words::ParseError,
    },
    /// The operating system refused to start the process.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        /// The emulator executable.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A fully prepared emulator launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    /// Executable name or path.
    pub program: String,
    /// Arguments passed after the program.
    pub args: Vec<String>,
    /// Working directory of the new process.
    pub cwd: PathBuf,
    /// The environment of the new process; see [`Launch::command`].
    pub env: Environment,
}

impl Launch {
    /// Build a launch from the emulator name and its shell-style argument string.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Arguments`] if `arguments` has unbalanced quotes
    /// or a trailing escape.
    pub fn new(
        program: &str,
        arguments: &str,
        cwd: PathBuf,
        env: Environment,
    ) -> Result<Self, LaunchError> {
        let args = shell_words::split(arguments).map_err(|source| LaunchError::Arguments {
            arguments: arguments.to_string(),
            source,
        })?;
        Ok(Self {
            program: program.to_string(),
            args,
            cwd,
            env,
        })
    }

    /// The command line, quoted so it can be pasted into a shell.
    #[must_use]
    pub fn command_line(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }

    /// The process to start, without starting it.
    ///
    /// The child sees exactly the variables in `env`, plus any inherited
    /// variables whose name or value is not UTF-8 (those cannot be held in
    /// an [`Environment`] and are passed through untouched).
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.cwd);
        for (key, value) in std::env::vars_os() {
            let representable = key.to_str().is_some() && value.to_str().is_some();
            let kept = key.to_str().is_some_and(|k| self.env.contains_key(k));
            if representable && !kept {
                command.env_remove(&key);
            }
        }
        command.envs(&self.env);
        command
    }

    /// Start the process and forget about it.
    /// Standard streams are inherited and the child is never waited on.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Spawn`] if the process could not be started.
    pub fn spawn(&self) -> Result<(), LaunchError> {
        self.command()
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(program: &str, arguments: &str) -> Result<Launch, LaunchError> {
        Launch::new(program, arguments, PathBuf::from("."), Environment::new())
    }

    #[test]
    fn test_arguments_split_like_a_shell() {
        let l = launch("alacritty", r#"--title "My Term" -o 'font.size=12'"#).unwrap();
        assert_eq!(l.args, ["--title", "My Term", "-o", "font.size=12"]);
    }

    #[test]
    fn test_empty_arguments() {
        assert!(launch("xterm", "").unwrap().args.is_empty());
        assert!(launch("xterm", "   ").unwrap().args.is_empty());
    }

    #[test]
    fn test_unbalanced_quotes_rejected() {
        let err = launch("xterm", r#"-T "oops"#).unwrap_err();
        assert!(matches!(err, LaunchError::Arguments { .. }));
    }

    #[test]
    fn test_command_line_quotes_tokens() {
        let l = launch("wezterm", r#"start --class "dev box""#).unwrap();
        assert_eq!(l.command_line(), "wezterm start --class 'dev box'");
    }

    #[test]
    fn test_spawn_missing_program_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let l = Launch::new(
            "surely-not-a-terminal-emulator",
            "",
            tmp.path().to_path_buf(),
            Environment::new(),
        )
        .unwrap();
        let err = l.spawn().unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { ref program, .. } if program == "surely-not-a-terminal-emulator"));
    }

    #[test]
    fn test_command_drops_variables_missing_from_env() {
        std::env::set_var("OPEN_TERMINAL_DROPPED", "1");
        let mut env = Environment::new();
        env.insert("OPEN_TERMINAL_KEPT".into(), "yes".into());
        let command = Launch::new("xterm", "", PathBuf::from("."), env).unwrap().command();

        let envs: Vec<_> = command.get_envs().collect();
        assert!(envs.contains(&(
            std::ffi::OsStr::new("OPEN_TERMINAL_KEPT"),
            Some(std::ffi::OsStr::new("yes"))
        )));
        assert!(envs.contains(&(std::ffi::OsStr::new("OPEN_TERMINAL_DROPPED"), None)));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_variables_reach_the_child() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let value = OsStr::from_bytes(b"caf\xe9");
        std::env::set_var("OPEN_TERMINAL_LATIN1", value);
        assert!(!crate::env::snapshot().contains_key("OPEN_TERMINAL_LATIN1"));

        let mut env = crate::env::snapshot();
        env.insert("OPEN_TERMINAL_KEPT".into(), "yes".into());
        let launch = Launch::new(
            "sh",
            r#"-c 'printf %s "$OPEN_TERMINAL_LATIN1"'"#,
            PathBuf::from("."),
            env,
        )
        .unwrap();
        let output = launch.command().output().unwrap();
        assert_eq!(output.stdout, value.as_bytes());
    }
}
