//! Version and build information.
//!
//! `--version` prints the full build metadata; the banner shows only the
//! version and commit.

use std::fmt;

/// Multi-line text shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCommit: ",
    env!("MAC_CHANGER_GIT_HASH"),
    "\nBuilt: ",
    env!("MAC_CHANGER_BUILD_DATE"),
    "\nTarget: ",
    env!("MAC_CHANGER_TARGET"),
    "\nRustc: ",
    env!("MAC_CHANGER_RUSTC_VERSION"),
);

/// Build information shown in the banner
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mac-changer {}", self.version)?;

        if let Some(commit) = self.commit {
            write!(f, " ({})", commit)?;
        }

        Ok(())
    }
}

/// `build.rs` writes "unknown" when it cannot determine a value.
fn known(value: &'static str) -> Option<&'static str> {
    if value.is_empty() || value == "unknown" {
        None
    } else {
        Some(value)
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: known(env!("MAC_CHANGER_GIT_HASH")),
    }
}
