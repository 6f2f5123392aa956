//! Instance-wide logger settings

use serde::{Deserialize, Serialize};

/// Flags that apply to every logging method installed on a
/// [`Logger`](crate::Logger).
///
/// Configs are commonly written as JSON, so the wire format is camelCase
/// (`allowForceNoThrow`). Absent fields default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerSettings {
    /// Show output from verbose-only methods.
    pub verbose: bool,

    /// Silence every method, verbose or not.
    pub quiet: bool,

    /// Permit the `force` flag to downgrade throwing methods to plain
    /// logging.
    pub allow_force_no_throw: bool,

    /// Request that throwing methods not escalate. Honored only when
    /// `allow_force_no_throw` is also set.
    pub force: bool,
}

impl LoggerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_allow_force_no_throw(mut self, allow: bool) -> Self {
        self.allow_force_no_throw = allow;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
