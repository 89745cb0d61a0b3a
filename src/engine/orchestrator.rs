//! Change execution orchestrator.
//!
//! Runs one change request through a fixed sequence:
//! validate format, read current address, reconfigure, read back, compare.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Invalid address: Returns InvalidFormat before any command runs
//! - Unreadable interface: Returns Lookup; nothing is reconfigured
//! - Failed reconfiguration: Returns Mutation; no rollback is attempted
//! - Unreadable or different address afterwards: Returns Mismatch (not an error)
//! - SIGINT: Returns Interrupted as soon as the running command exits
//! - Panics: Caught via std::panic::catch_unwind in [`guarded`] and
//!   `run_guarded`, converted to Unexpected
//!
//! Commands are not retried and have no timeout.

use crate::cli::output::Console;
use crate::engine::result::ChangeOutcome;
use crate::mac::is_valid_mac;
use crate::platform::interface::{apply_mac, read_current_mac};
use crate::platform::CommandRunner;
use crate::{ChangeRequest, Config, MacChangerError};
use log::{debug, info};
use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

/// Applies change requests with a command runner.
pub struct MacChanger<'a, R: CommandRunner> {
    runner: R,
    config: Config,
    interrupted: &'a AtomicBool,
}

impl<'a, R: CommandRunner> MacChanger<'a, R> {
    /// `interrupted` is polled after every external command.
    pub fn new(runner: R, config: Config, interrupted: &'a AtomicBool) -> Self {
        MacChanger {
            runner,
            config,
            interrupted,
        }
    }

    /// Consume the changer and return its runner
    pub fn into_runner(self) -> R {
        self.runner
    }

    fn check_interrupt(&self) -> Result<(), MacChangerError> {
        if self.interrupted.load(Ordering::SeqCst) {
            debug!("interrupt flag set");
            return Err(MacChangerError::Interrupted);
        }
        Ok(())
    }

    /// Run the full sequence, printing progress to `console`.
    ///
    /// The current address is printed as soon as it is known, so it is
    /// visible even if reconfiguration fails afterwards.
    pub fn run<O: Write, E: Write>(
        &self,
        request: &ChangeRequest,
        console: &mut Console<O, E>,
    ) -> Result<ChangeOutcome, MacChangerError> {
        let tool = self.config.tool;
        let interface = request.interface.as_str();
        debug!("changing {} to {} using {}", interface, request.mac, tool);

        self.check_interrupt()?;

        if !is_valid_mac(&request.mac) {
            return Err(MacChangerError::InvalidFormat {
                mac: request.mac.clone(),
            });
        }

        // The flag is checked before the result: an interrupted child
        // usually exits non-zero and must not be reported as a lookup error.
        let previous = read_current_mac(&self.runner, tool, interface);
        self.check_interrupt()?;
        let previous = previous.ok_or_else(|| MacChangerError::Lookup {
            interface: interface.to_string(),
        })?;

        console.current_mac(&previous);

        apply_mac(&self.runner, tool, interface, &request.mac, self.interrupted)?;

        let observed = read_current_mac(&self.runner, tool, interface);
        self.check_interrupt()?;

        let outcome = ChangeOutcome::evaluate(interface, previous, &request.mac, observed);
        if outcome.is_verified() {
            info!("{} changed from {} to {}", interface, outcome.previous(), request.mac);
        } else {
            info!("{} did not report {} after the change", interface, request.mac);
        }

        console.report_outcome(&outcome);
        Ok(outcome)
    }

    /// [`run`](Self::run), with panics turned into `Unexpected`.
    pub fn run_guarded<O: Write, E: Write>(
        &self,
        request: &ChangeRequest,
        console: &mut Console<O, E>,
    ) -> Result<ChangeOutcome, MacChangerError> {
        guarded(|| self.run(request, console))
    }
}

/// Run `f`, turning a panic into `Unexpected`.
///
/// Used for everything printed after argument parsing, banner included.
pub fn guarded<T, F>(f: F) -> Result<T, MacChangerError>
where
    F: FnOnce() -> Result<T, MacChangerError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(MacChangerError::Unexpected(panic_message(payload.as_ref()))),
    }
}

/// Text carried by a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
