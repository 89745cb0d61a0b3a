//! Terminal output for mac-changer.
//!
//! Status lines carry a fixed prefix: `[*]` for information, `[+]` for
//! success and `[-]` for failure. Fatal errors go to stderr, everything else
//! to stdout.
//!
//! # Graceful Degradation
//!
//! - Write failures (closed pipe, full disk) are ignored; output is
//!   best-effort and never changes the exit status
//! - Color is only emitted when requested

use crate::engine::result::ChangeOutcome;
use crate::version::get_build_info;
use crate::MacChangerError;
use std::io::{self, Stderr, Stdout, Write};

/// Writes prefixed status lines to an output and an error stream.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
    quiet: bool,
}

impl Console<Stdout, Stderr> {
    /// Console on the process's stdout and stderr
    pub fn stdio(color: bool, quiet: bool) -> Self {
        Console::new(io::stdout(), io::stderr(), color, quiet)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: bool, quiet: bool) -> Self {
        Console {
            out,
            err,
            color,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn cyan(&self, text: &str) -> String {
        self.colorize(text, "36")
    }

    /// `[*]` line on stdout, dropped in quiet mode
    pub fn info(&mut self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = self.cyan("[*]");
        let _ = writeln!(self.out, "{} {}", prefix, message);
    }

    /// `[+]` line on stdout
    pub fn success(&mut self, message: &str) {
        let prefix = self.green("[+]");
        let _ = writeln!(self.out, "{} {}", prefix, message);
    }

    /// `[-]` line on stdout
    pub fn failure(&mut self, message: &str) {
        let prefix = self.red("[-]");
        let _ = writeln!(self.out, "{} {}", prefix, message);
    }

    /// `[-]` line on stderr
    pub fn fatal(&mut self, message: &str) {
        let prefix = self.red("[-]");
        let _ = writeln!(self.err, "{} {}", prefix, message);
    }

    /// Program name, version, and a pointer to `--help`
    pub fn banner(&mut self) {
        let info = get_build_info();
        self.info(&info.to_string());
        self.info("Use --help for more information\n");
    }

    /// Current address, before anything is changed
    pub fn current_mac(&mut self, mac: &str) {
        self.success(&format!("Current MAC address: {}", mac));
    }

    /// Final verification result
    pub fn report_outcome(&mut self, outcome: &ChangeOutcome) {
        match outcome {
            ChangeOutcome::Verified { current, .. } => {
                self.success(&format!("MAC address successfully changed to {}", current));
            }
            ChangeOutcome::Mismatch { .. } => {
                self.failure("MAC address change verification failed");
            }
        }
    }

    /// Error that ended the flow
    pub fn report_error(&mut self, error: &MacChangerError) {
        match error {
            MacChangerError::Interrupted => {
                // Start on a fresh line after the terminal's `^C`.
                let _ = writeln!(self.out);
                self.failure(&error.to_string());
            }
            e if e.is_fatal() => self.fatal(&e.to_string()),
            e => self.failure(&e.to_string()),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Consume the console and return its streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
