//! Reading and changing an interface's hardware address.
//!
//! # Graceful Degradation
//!
//! - Status command fails, cannot be started, or prints no address:
//!   [`read_current_mac`] returns `None`
//! - Any reconfiguration command fails: [`apply_mac`] stops immediately and
//!   returns `MacChangerError::Mutation` naming the step
//! - SIGINT seen after any reconfiguration command: [`apply_mac`] stops and
//!   returns `MacChangerError::Interrupted`, whatever that command's status
//!
//! An interface left down by a failed `set address` step is not brought
//! back up.

use super::command::{CommandRunner, NetCommand};
use super::tools::NetTool;
use crate::mac::find_mac_like;
use crate::{MacChangerError, MutationStep};
use log::{debug, error};
use std::sync::atomic::{AtomicBool, Ordering};

/// Current hardware address of `interface`, as printed by the tool.
///
/// The address is taken from the first MAC-shaped run of text in the
/// combined output, case preserved. Never fails; all problems yield `None`.
pub fn read_current_mac<R: CommandRunner + ?Sized>(
    runner: &R,
    tool: NetTool,
    interface: &str,
) -> Option<String> {
    let command = tool.status_command(interface);

    let output = match runner.output(&command) {
        Ok(output) => output,
        Err(e) => {
            debug!("`{}` could not be started: {}", command, e);
            return None;
        }
    };

    if !output.status.success {
        debug!("`{}` exited with {:?}", command, output.status.code);
        return None;
    }

    let mac = find_mac_like(&output.text).map(|m| m.to_string());
    if mac.is_none() {
        debug!("no hardware address in output of `{}`", command);
    }
    mac
}

/// Command for one reconfiguration step
pub fn step_command(tool: NetTool, step: MutationStep, interface: &str, mac: &str) -> NetCommand {
    match step {
        MutationStep::Down => tool.down_command(interface),
        MutationStep::SetAddress => tool.set_address_command(interface, mac),
        MutationStep::Up => tool.up_command(interface),
    }
}

/// Take `interface` down, set its address to `mac`, bring it up.
///
/// `mac` should already have passed [`crate::mac::is_valid_mac`].
/// `interrupted` is checked after each command, before its status.
pub fn apply_mac<R: CommandRunner + ?Sized>(
    runner: &R,
    tool: NetTool,
    interface: &str,
    mac: &str,
    interrupted: &AtomicBool,
) -> Result<(), MacChangerError> {
    for step in MutationStep::ALL {
        let command = step_command(tool, step, interface, mac);

        let status = runner.status(&command);
        if interrupted.load(Ordering::SeqCst) {
            debug!("interrupted during {} step", step);
            return Err(MacChangerError::Interrupted);
        }

        match status {
            Ok(status) if status.success => {}
            Ok(status) => {
                error!("{} step failed: `{}` exited with {:?}", step, command, status.code);
                return Err(MacChangerError::Mutation {
                    step,
                    command: command.to_string(),
                    code: status.code,
                    source: None,
                });
            }
            Err(e) => {
                error!("{} step failed: `{}` could not be started: {}", step, command, e);
                return Err(MacChangerError::Mutation {
                    step,
                    command: command.to_string(),
                    code: None,
                    source: Some(e),
                });
            }
        }
    }

    Ok(())
}
