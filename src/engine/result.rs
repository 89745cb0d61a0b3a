//! Outcome of a completed change.

/// How a change ended once every command succeeded.
///
/// Both variants exit zero; a mismatch is reported, not treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Re-read address equals the requested one
    Verified {
        interface: String,
        previous: String,
        current: String,
    },
    /// Re-read address differs from the requested one, or could not be read
    Mismatch {
        interface: String,
        previous: String,
        requested: String,
        observed: Option<String>,
    },
}

impl ChangeOutcome {
    /// Compare the re-read address with the request.
    ///
    /// Plain string equality: `AA:BB:..` and `aa:bb:..` differ.
    pub fn evaluate(
        interface: &str,
        previous: String,
        requested: &str,
        observed: Option<String>,
    ) -> Self {
        match observed {
            Some(current) if current == requested => ChangeOutcome::Verified {
                interface: interface.to_string(),
                previous,
                current,
            },
            observed => ChangeOutcome::Mismatch {
                interface: interface.to_string(),
                previous,
                requested: requested.to_string(),
                observed,
            },
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, ChangeOutcome::Verified { .. })
    }

    /// Address the interface had before the change
    pub fn previous(&self) -> &str {
        match self {
            ChangeOutcome::Verified { previous, .. } | ChangeOutcome::Mismatch { previous, .. } => {
                previous
            }
        }
    }
}
