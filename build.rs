//! Build script for mac-changer.
//!
//! Captures git, date and toolchain metadata for `--version` output.
//! Every variable is always emitted so the crate can read them with `env!`.

use std::env;
use std::process::Command;

fn main() {
    // Tell cargo to re-run this script if it changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=MAC_CHANGER_TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    println!(
        "cargo:rustc-env=MAC_CHANGER_GIT_HASH={}",
        get_git_hash().unwrap_or_else(|| "unknown".to_string())
    );

    println!(
        "cargo:rustc-env=MAC_CHANGER_BUILD_DATE={}",
        get_build_date().unwrap_or_else(|| "unknown".to_string())
    );

    println!(
        "cargo:rustc-env=MAC_CHANGER_RUSTC_VERSION={}",
        get_rustc_version().unwrap_or_else(|| "unknown".to_string())
    );
}

/// Run a command and return its trimmed stdout on success
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .filter(|s| !s.is_empty())
}

/// Get the current git commit hash (short form)
fn get_git_hash() -> Option<String> {
    command_stdout("git", &["rev-parse", "--short", "HEAD"])
}

/// Get the current build date in ISO 8601 format
fn get_build_date() -> Option<String> {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

/// Get the rustc version
fn get_rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    // Parse "rustc 1.75.0 (..." -> "1.75.0"
    command_stdout(&rustc, &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
}
