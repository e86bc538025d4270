//! Action-name policies installed as `dispatching` listeners.

use crate::error::RouterError;
use crate::events::ControllerDispatchEvent;
use crate::router::{Router, INDEX_NAME};
use tracing::debug;

/// Suffix of every path-derived action method
pub const ACTION_SUFFIX: &str = "Action";

/// `lowercase(segment or "index") + "Action"`, ASCII letters only
#[must_use]
pub fn path_action_name(segment: Option<&str>) -> String {
    let mut action = segment.unwrap_or(INDEX_NAME).to_ascii_lowercase();
    action.push_str(ACTION_SUFFIX);
    action
}

/// `lowercase(verb)`, ASCII letters only
#[must_use]
pub fn verb_action_name(verb: &str) -> String {
    verb.to_ascii_lowercase()
}

fn ensure_action(event: &mut ControllerDispatchEvent, action: String) -> Result<(), RouterError> {
    if !event.controller().has_action(&action) {
        return Err(RouterError::missing_action(event.controller().class(), &action));
    }
    debug!(
        class = %event.controller().class(),
        action = %action,
        "Action resolved"
    );
    event.set_action(action);
    Ok(())
}

/// Mvc policy: pop the first remaining segment as the action name.
///
/// # Errors
///
/// [`RouterError::NotFound`] when the controller has no such action.
pub fn action_from_path(
    _router: &Router,
    event: &mut ControllerDispatchEvent,
) -> Result<(), RouterError> {
    let segment = if event.url().is_empty() {
        None
    } else {
        Some(event.url_mut().remove(0))
    };
    let action = path_action_name(segment.as_deref());
    ensure_action(event, action)
}

/// Rest policy: the request verb is the action name; the path is left untouched.
///
/// # Errors
///
/// [`RouterError::NotFound`] when the controller has no such action.
pub fn action_from_verb(
    _router: &Router,
    event: &mut ControllerDispatchEvent,
) -> Result<(), RouterError> {
    let action = verb_action_name(event.verb());
    ensure_action(event, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_action_name() {
        assert_eq!(path_action_name(None), "indexAction");
        assert_eq!(path_action_name(Some("wot")), "wotAction");
        assert_eq!(path_action_name(Some("EditUser")), "edituserAction");
        assert_eq!(path_action_name(Some("İx")), "İxAction");
        assert_eq!(path_action_name(Some("ÉDIT")), "ÉditAction");
    }

    #[test]
    fn test_verb_action_name() {
        assert_eq!(verb_action_name("PUT"), "put");
        assert_eq!(verb_action_name("delete"), "delete");
        assert_eq!(verb_action_name("PURGÉ"), "purgÉ");
    }
}
