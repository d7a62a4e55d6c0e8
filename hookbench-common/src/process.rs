//! Captured execution of external commands
//!
//! Every child process is run to completion with stdout and stderr captured as
//! lossy UTF-8 text. Non-zero exits are returned as data; only a failure to spawn
//! the process surfaces as an error.

use std::io;
use std::process::{Command, Output};
use tracing::debug;

/// Exit status and captured text of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code rendered for display, `signal` when there is none
    pub fn exit_code_display(&self) -> String {
        match self.exit_code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run a command to completion and capture its output.
///
/// Blocks until the child exits. The caller decides what a non-zero exit means.
pub fn capture(command: &mut Command) -> io::Result<CommandOutput> {
    let rendered = describe(command);
    debug!("Running: {}", rendered);

    let output: CommandOutput = command.output()?.into();

    debug!(
        command = %rendered,
        exit_code = %output.exit_code_display(),
        "Command finished"
    );
    Ok(output)
}

/// Render a command as `program arg1 arg2` for messages and logs.
pub fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_joins_program_and_args() {
        let mut command = Command::new("git");
        command.arg("diff").arg("--cached");
        assert_eq!(describe(&command), "git diff --cached");
    }

    #[test]
    fn test_describe_program_only() {
        let command = Command::new("lefthook");
        assert_eq!(describe(&command), "lefthook");
    }

    #[test]
    fn test_success_requires_zero_exit() {
        let ok = CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        let failed = CommandOutput {
            exit_code: Some(1),
            ..Default::default()
        };
        let signalled = CommandOutput::default();

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }

    #[test]
    fn test_exit_code_display() {
        let failed = CommandOutput {
            exit_code: Some(3),
            ..Default::default()
        };
        assert_eq!(failed.exit_code_display(), "3");
        assert_eq!(CommandOutput::default().exit_code_display(), "signal");
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_reports_non_zero_exit_as_data() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo out; echo err >&2; exit 4"]);

        let output = capture(&mut command).unwrap();

        assert_eq!(output.exit_code, Some(4));
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }

    #[test]
    fn test_capture_missing_program_is_error() {
        let mut command = Command::new("hookbench-definitely-not-a-real-program");
        let result = capture(&mut command);
        assert!(result.is_err());
    }
}
