//! Identifiers correlating the log lines of one dispatch call.

use std::fmt;

/// ULID generated once per `dispatch` call and attached to its tracing span,
/// so nested component dispatches can be told apart from their parent.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct DispatchId(ulid::Ulid);

impl DispatchId {
    #[must_use]
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
