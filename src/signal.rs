//! SIGINT handling.
//!
//! Ctrl-C sets a process-wide flag instead of killing the process. The
//! running child shares the terminal's process group, receives the same
//! signal, and exits on its own; the orchestrator then sees the flag and
//! stops with `MacChangerError::Interrupted`.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_sigint(_signum: libc::c_int) {
    // Only async-signal-safe work here.
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler.
pub fn install_interrupt_handler() -> io::Result<()> {
    let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;

    // SAFETY: the handler only stores to an atomic.
    let previous = unsafe { libc::signal(libc::SIGINT, handler) };
    if previous == libc::SIG_ERR {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

/// Flag set by the handler.
pub fn interrupt_flag() -> &'static AtomicBool {
    &INTERRUPTED
}
