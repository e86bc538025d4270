//! # segrouter
//!
//! **segrouter** is an embeddable request-path dispatcher. Given a
//! slash-delimited path it resolves and invokes exactly one application
//! handler, optionally delegating to a nested router ("component") when the
//! first segment matches a registered key.
//!
//! ## Overview
//!
//! Every dispatch call runs a fixed six-phase lifecycle on the router's event
//! bus. The default behaviour of each phase is just a listener installed at
//! construction, so any phase can be replaced or extended by registering
//! listeners of your own. Three flavors share the same engine:
//!
//! - **Base** - naming and invocation defaults, no action policy
//! - **Mvc** - action taken from the path (`/user/edit/3` → `UserController::editAction("3")`)
//! - **Rest** - action taken from the request verb (`PUT /user/3` → `UserController::put("3")`)
//!
//! ## Architecture
//!
//! - **[`path`]** - tokenizer turning a raw path into segments
//! - **[`events`]** - event bus, typed event keys, lifecycle event values
//! - **[`router`]** - dispatch engine and the shared lifecycle pipeline
//! - **[`policy`]** - default resolution listeners per flavor
//! - **[`controller`]** - the capability a resolved handler must provide
//! - **[`registry`]** - name → factory lookup used to instantiate targets
//! - **[`config`]** - YAML router trees
//! - **[`logging`]** - `tracing-subscriber` setup driven by `SEGR_LOG_*`
//! - **[`cli`]** - the `segrouter` binary
//!
//! ### Dispatch Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Router
//!     participant Bus as EventBus
//!     participant Nested as Nested Router
//!     participant Ctrl as Controller
//!
//!     Caller->>Router: dispatch("/admin/users/3", "get")
//!     Router->>Router: tokenize → [admin, users, 3]
//!     alt first segment is a component key
//!         Router->>Bus: component creating / create / created
//!         Router->>Bus: component dispatching / dispatch
//!         Bus->>Nested: dispatch([users, 3], verb)
//!         Nested-->>Bus: result
//!         Router->>Bus: component dispatched
//!     else controller
//!         Router->>Bus: controller creating / create / created
//!         Router->>Bus: controller dispatching (resolve action)
//!         Router->>Bus: controller dispatch
//!         Bus->>Ctrl: invoke(action, remaining segments)
//!         Ctrl-->>Bus: result
//!         Router->>Bus: controller dispatched
//!     end
//!     Router-->>Caller: Result<Value, RouterError>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use segrouter::controller::ActionController;
//! use segrouter::router::Router;
//! use serde_json::json;
//!
//! let mut router = Router::rest().with_controller_prefix("Api");
//! router.register_controller("Api\\UserController", || {
//!     ActionController::new("Api\\UserController")
//!         .with_action("put", |args| Ok(json!({ "updated": args[0] })))
//!         .into_handle()
//! });
//!
//! let result = router.dispatch_with_verb("/user/3", "PUT").unwrap();
//! assert_eq!(result, json!({ "updated": "3" }));
//!
//! let err = router.dispatch("/user/3").unwrap_err();
//! assert_eq!(err.to_string(), "Could not find Api\\UserController::get");
//! ```
//!
//! ## Failure Semantics
//!
//! Resolution failures surface as [`RouterError::NotFound`] with messages of
//! the form `Could not find <identifier>` or `Could not find <identifier>::<action>`.
//! A failure in any phase aborts the whole call, including every enclosing
//! component dispatch; nothing is retried or partially recovered.

pub mod cli;
pub mod config;
pub mod controller;
pub mod echo;
pub mod error;
pub mod events;
pub mod ids;
pub mod logging;
pub mod path;
pub mod policy;
pub mod registry;
pub mod router;

pub use controller::{ActionController, Controller, ControllerHandle};
pub use error::RouterError;
pub use events::{ComponentEvents, ControllerEvents, EventKey};
pub use path::{tokenize, PathInput};
pub use router::{ComponentTarget, Flavor, Router, RouterHandle};
