use crate::controller::{Controller, ControllerHandle};
use crate::error::RouterError;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Controller that answers every known action with a description of the call.
///
/// Used by config-built routers and the CLI, where no business logic exists:
///
/// ```json
/// { "controller": "App\\Controller\\TestController", "action": "lolAction", "args": ["1"] }
/// ```
#[derive(Debug, Clone)]
pub struct EchoController {
    class: String,
    actions: BTreeSet<String>,
}

impl EchoController {
    #[must_use]
    pub fn new<I, S>(class: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class: class.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn into_handle(self) -> ControllerHandle {
        Arc::new(self)
    }
}

impl Controller for EchoController {
    fn class(&self) -> &str {
        &self.class
    }

    fn has_action(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    fn invoke(&self, action: &str, args: &[String]) -> Result<Value, RouterError> {
        if !self.has_action(action) {
            return Err(RouterError::missing_action(&self.class, action));
        }
        Ok(json!({
            "controller": self.class,
            "action": action,
            "args": args,
        }))
    }
}
