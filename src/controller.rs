//! # Controllers
//!
//! A controller is the terminal, business-logic-bearing target at the end of
//! the pipeline. The router only needs three capabilities from it: its
//! identifier (for diagnostics), an existence check for an action, and a way
//! to invoke that action with the remaining path segments as positional
//! arguments.
//!
//! [`ActionController`] covers the common case of a controller assembled from
//! closures:
//!
//! ```rust
//! use segrouter::controller::{ActionController, Controller};
//! use serde_json::json;
//!
//! let users = ActionController::new("App\\Controller\\UsersController")
//!     .with_action("showAction", |args| Ok(json!({ "id": args.first() })));
//!
//! assert!(users.has_action("showAction"));
//! assert_eq!(users.invoke("showAction", &["7".to_string()]).unwrap(), json!({ "id": "7" }));
//! ```

use crate::error::RouterError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Capability the dispatch pipeline requires from a resolved controller.
pub trait Controller: Send + Sync {
    /// Fully-qualified identifier, e.g. `App\Controller\TestController`
    fn class(&self) -> &str;

    /// Whether `action` can be invoked on this controller
    fn has_action(&self, action: &str) -> bool;

    /// Invoke `action` with `args` as positional arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the action reports. Implementations should
    /// return [`RouterError::missing_action`] for unknown actions.
    fn invoke(&self, action: &str, args: &[String]) -> Result<Value, RouterError>;
}

impl fmt::Debug for dyn Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("class", &self.class())
            .finish()
    }
}

/// Shared handle to an instantiated controller
pub type ControllerHandle = Arc<dyn Controller>;

/// Action body: receives the positional arguments, returns the action result
pub type ActionFn = Arc<dyn Fn(&[String]) -> Result<Value, RouterError> + Send + Sync>;

/// Controller assembled from named closures.
#[derive(Clone)]
pub struct ActionController {
    class: String,
    actions: BTreeMap<String, ActionFn>,
}

impl ActionController {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            actions: BTreeMap::new(),
        }
    }

    /// Add (or replace) an action method
    #[must_use]
    pub fn with_action<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&[String]) -> Result<Value, RouterError> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(action));
        self
    }

    /// Names of every registered action, sorted
    #[must_use]
    pub fn actions(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Wrap into a [`ControllerHandle`]
    #[must_use]
    pub fn into_handle(self) -> ControllerHandle {
        Arc::new(self)
    }
}

impl Controller for ActionController {
    fn class(&self) -> &str {
        &self.class
    }

    fn has_action(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    fn invoke(&self, action: &str, args: &[String]) -> Result<Value, RouterError> {
        let body = self
            .actions
            .get(action)
            .ok_or_else(|| RouterError::missing_action(&self.class, action))?;
        body(args)
    }
}

impl fmt::Debug for ActionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionController")
            .field("class", &self.class)
            .field("actions", &self.actions())
            .finish()
    }
}
