//! Error types surfaced by the dispatcher.
//!
//! Two failure kinds matter to callers:
//!
//! - [`RouterError::InvalidArgument`] - the caller handed over a malformed
//!   configuration or call argument. Detected synchronously at the offending call.
//! - [`RouterError::NotFound`] - a name could not be resolved to a constructible
//!   target, or the target lacks the requested action. Raised during the
//!   `creating` / `dispatching` phases and propagated through every enclosing
//!   component dispatch.
//!
//! The `Display` output of both is exactly the carried message, so transport
//! layers can forward it as-is (`Could not find App\Controller\TestController::lolAction`).

use thiserror::Error;

/// Separator between a target identifier and an action in diagnostics.
const ACTION_SEPARATOR: &str = "::";

/// Errors produced while configuring a router or dispatching a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Malformed configuration or call argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// A target or action could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// The resolved action ran and reported a failure of its own.
    #[error("{message}")]
    ActionFailed {
        /// Identifier of the target the action belongs to
        target: String,
        /// Action method name
        action: String,
        /// Failure message reported by the action
        message: String,
    },
}

impl RouterError {
    /// Build an [`RouterError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RouterError::InvalidArgument(message.into())
    }

    /// `Could not find <identifier>`
    #[must_use]
    pub fn missing_target(identifier: &str) -> Self {
        RouterError::NotFound(format!("Could not find {identifier}"))
    }

    /// `Could not find <identifier>::<action>`
    #[must_use]
    pub fn missing_action(identifier: &str, action: &str) -> Self {
        RouterError::NotFound(format!(
            "Could not find {identifier}{ACTION_SEPARATOR}{action}"
        ))
    }

    /// Wrap a failure reported by a controller action.
    #[must_use]
    pub fn action_failed(target: &str, action: &str, message: impl Into<String>) -> Self {
        RouterError::ActionFailed {
            target: target.to_string(),
            action: action.to_string(),
            message: message.into(),
        }
    }

    /// True for [`RouterError::NotFound`]; transport adapters map it to a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouterError::NotFound(_))
    }

    /// True for [`RouterError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RouterError::InvalidArgument(_))
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = RouterError> = std::result::Result<T, E>;
