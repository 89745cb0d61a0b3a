//! mac-changer library
//!
//! Changes the hardware (MAC) address of a Linux network interface through
//! the system's network tools and checks that the change took effect.
//!
//! The flow is linear:
//! validate the requested address, read the current one, take the
//! interface down, set the new address, bring it up, read it back, compare.
//!
//! # Example
//!
//! ```no_run
//! use mac_changer::cli::output::Console;
//! use mac_changer::platform::SystemRunner;
//! use mac_changer::{ChangeRequest, Config, MacChanger};
//! use std::sync::atomic::AtomicBool;
//!
//! let interrupted = AtomicBool::new(false);
//! let changer = MacChanger::new(SystemRunner::new(), Config::default(), &interrupted);
//! let mut console = Console::stdio(false, false);
//! let request = ChangeRequest::new("eth0", "00:11:22:33:44:55");
//!
//! match changer.run(&request, &mut console) {
//!     Ok(outcome) => println!("verified: {}", outcome.is_verified()),
//!     Err(e) => eprintln!("[-] {}", e),
//! }
//! ```

pub mod cli;
pub mod engine;
pub mod mac;
pub mod platform;
pub mod signal;
pub mod version;

use cli::args::Args;
use platform::NetTool;
use std::fmt;
use std::io;
use thiserror::Error;

// Re-exports for public API
pub use engine::orchestrator::MacChanger;
pub use engine::result::ChangeOutcome;

/// The three reconfiguration steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    /// Interface administratively down
    Down,
    /// Hardware address written
    SetAddress,
    /// Interface administratively up
    Up,
}

impl MutationStep {
    pub const ALL: [MutationStep; 3] = [
        MutationStep::Down,
        MutationStep::SetAddress,
        MutationStep::Up,
    ];
}

impl fmt::Display for MutationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationStep::Down => write!(f, "interface down"),
            MutationStep::SetAddress => write!(f, "set hardware address"),
            MutationStep::Up => write!(f, "interface up"),
        }
    }
}

/// Error types for mac-changer operations.
///
/// Argument errors are reported by clap before any of these can occur.
#[derive(Debug, Error)]
pub enum MacChangerError {
    /// Requested address is not `xx:xx:xx:xx:xx:xx`
    #[error("Invalid MAC address format. Use format: xx:xx:xx:xx:xx:xx")]
    InvalidFormat { mac: String },

    /// Current address could not be read
    #[error("Could not find MAC address for interface {interface}")]
    Lookup { interface: String },

    /// One of the reconfiguration commands failed or could not be started
    #[error("Failed to change MAC address")]
    Mutation {
        step: MutationStep,
        command: String,
        code: Option<i32>,
        #[source]
        source: Option<io::Error>,
    },

    /// SIGINT received
    #[error("Program terminated by user")]
    Interrupted,

    /// Anything else, including caught panics
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl MacChangerError {
    /// Process exit code for this error.
    ///
    /// Interruption and unexpected faults exit cleanly after printing.
    pub fn exit_code(&self) -> u8 {
        match self {
            MacChangerError::InvalidFormat { .. }
            | MacChangerError::Lookup { .. }
            | MacChangerError::Mutation { .. } => 1,
            MacChangerError::Interrupted | MacChangerError::Unexpected(_) => 0,
        }
    }

    /// Whether the message belongs on stderr rather than stdout.
    pub fn is_fatal(&self) -> bool {
        self.exit_code() != 0
    }
}

/// What to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub interface: String,
    pub mac: String,
}

impl ChangeRequest {
    pub fn new(interface: impl Into<String>, mac: impl Into<String>) -> Self {
        ChangeRequest {
            interface: interface.into(),
            mac: mac.into(),
        }
    }

    /// Build the request from command line arguments
    pub fn from_args(args: &Args) -> Self {
        ChangeRequest::new(args.interface.clone(), args.mac.clone())
    }
}

/// How to change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tool used for status and reconfiguration
    pub tool: NetTool,
    /// Suppress banner and informational lines
    pub quiet: bool,
    /// Colorize status prefixes
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tool: NetTool::default(),
            quiet: false,
            color: false,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments.
    ///
    /// `stdout_is_terminal` decides color when `--no-color` is absent.
    pub fn from_args(args: &Args, stdout_is_terminal: bool) -> Self {
        Config {
            tool: args.tool,
            quiet: args.quiet,
            color: stdout_is_terminal && !args.no_color,
        }
    }
}
