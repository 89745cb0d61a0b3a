//! Platform abstraction layer.
//!
//! Provides consistent interfaces for:
//! - Running external commands (real or scripted)
//! - Building `ifconfig` / `ip` command lines
//! - Reading and changing an interface's hardware address

pub mod command;
pub mod interface;
pub mod tools;

pub use command::{CommandOutput, CommandRunner, CommandStatus, NetCommand, SystemRunner};
pub use tools::NetTool;
