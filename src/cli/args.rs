//! Command line arguments.
//!
//! `--interface` and `--mac` are required and must not be empty; clap rejects
//! a missing or empty option, or any positional argument, with a usage
//! message on stderr and exit code 2.

use crate::platform::NetTool;
use crate::version::LONG_VERSION;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};

/// Parsed command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mac-changer",
    version,
    long_version = LONG_VERSION,
    about = "Change the MAC address of a network interface",
    after_help = "EXAMPLES:\n    mac-changer -i eth0 -m 00:11:22:33:44:55\n    mac-changer --interface wlan0 --mac AA:BB:CC:DD:EE:FF --tool ip\n\n\
                  Changing the address requires root privileges and briefly takes the interface down."
)]
pub struct Args {
    /// Network interface to modify (e.g., eth0, wlan0)
    #[arg(short = 'i', long, value_name = "INTERFACE", value_parser = NonEmptyStringValueParser::new())]
    pub interface: String,

    /// New MAC address (format: xx:xx:xx:xx:xx:xx)
    #[arg(short = 'm', long, value_name = "NEW_MAC", value_parser = NonEmptyStringValueParser::new())]
    pub mac: String,

    /// Network tool used to read and change the interface
    #[arg(short = 't', long, value_enum, default_value_t = NetTool::Ifconfig)]
    pub tool: NetTool,

    /// Do not print the banner or informational lines
    #[arg(short = 'q', long, action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Enable debug log level
    #[arg(short = 'v', long, alias = "debug", action = ArgAction::SetTrue)]
    pub verbose: bool,
}
