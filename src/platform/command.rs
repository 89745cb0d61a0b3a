//! External command execution.
//!
//! Everything that touches the OS goes through [`CommandRunner`], so the
//! rest of the crate can be driven by a scripted runner in tests.
//!
//! # Graceful Degradation
//!
//! - Spawn failures (tool not installed, not executable) are returned as
//!   `io::Error` for the caller to classify
//! - Non-UTF8 output: converted lossily
//! - Killed children (no exit code): reported as unsuccessful with `code: None`
//!
//! No function in this module will panic.

use log::{debug, warn};
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl NetCommand {
    pub fn new(program: &'static str, args: &[&str]) -> Self {
        NetCommand {
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for NetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a command whose output was not captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        CommandStatus {
            success: code == 0,
            code: Some(code),
        }
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        CommandStatus {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Exit status plus stdout and stderr as one block of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: CommandStatus,
    pub text: String,
}

/// Runs external commands.
pub trait CommandRunner {
    /// Run to completion with inherited stdio and report the exit status.
    fn status(&self, command: &NetCommand) -> io::Result<CommandStatus>;

    /// Run to completion and capture stdout followed by stderr.
    fn output(&self, command: &NetCommand) -> io::Result<CommandOutput>;
}

/// Runs commands on the host with `std::process::Command`.
///
/// Blocks until the child exits; no timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn status(&self, command: &NetCommand) -> io::Result<CommandStatus> {
        debug!("running `{}`", command);

        let status = Command::new(command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .status()
            .inspect_err(|e| warn!("could not start `{}`: {}", command, e))?;

        let status = CommandStatus::from(status);
        debug!("`{}` exited with {:?}", command, status.code);
        Ok(status)
    }

    fn output(&self, command: &NetCommand) -> io::Result<CommandOutput> {
        debug!("capturing `{}`", command);

        let output = Command::new(command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .inspect_err(|e| warn!("could not start `{}`: {}", command, e))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let status = CommandStatus::from(output.status);
        debug!(
            "`{}` exited with {:?} ({} bytes of output)",
            command,
            status.code,
            text.len()
        );

        Ok(CommandOutput { status, text })
    }
}
