//! mac-changer CLI entry point
//!
//! Changes the MAC address of a network interface and verifies the result.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use mac_changer::cli::args::Args;
use mac_changer::cli::output::Console;
use mac_changer::platform::SystemRunner;
use mac_changer::signal::{install_interrupt_handler, interrupt_flag};
use mac_changer::engine::orchestrator::guarded;
use mac_changer::{ChangeRequest, Config, MacChanger};

use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit 2 on stderr; --help and --version exit 0 on stdout
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    init_logging(args.verbose);

    // Panics are reported as a one-line error by the orchestrator
    std::panic::set_hook(Box::new(|info| debug!("{}", info)));

    if let Err(e) = setup_signals() {
        warn!("{:#}", e);
    }

    let config = Config::from_args(&args, std::io::stdout().is_terminal());
    let request = ChangeRequest::from_args(&args);
    let mut console = Console::stdio(config.color, config.quiet);
    let changer = MacChanger::new(SystemRunner::new(), config, interrupt_flag());

    let result = guarded(|| {
        console.banner();
        changer.run(&request, &mut console)
    });
    let code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            console.report_error(&e);
            ExitCode::from(e.exit_code())
        }
    };

    if let Err(e) = finish(&mut console) {
        debug!("{:#}", e);
    }

    code
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .format_timestamp_secs()
    .init();
}

fn setup_signals() -> Result<()> {
    install_interrupt_handler().context("could not install SIGINT handler")?;
    debug!("SIGINT handler installed");
    Ok(())
}

fn finish<O: std::io::Write, E: std::io::Write>(console: &mut Console<O, E>) -> Result<()> {
    console.flush().context("could not flush output")
}
