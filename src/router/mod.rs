//! # Router Module
//!
//! The router resolves a slash-delimited path to exactly one target and
//! invokes it.
//!
//! ## Overview
//!
//! 1. **Tokenize**: the path is split into non-empty segments (see [`crate::path`]).
//!    No segments means the `index` controller.
//! 2. **Branch**: if the first segment is a key of the component registry, the
//!    rest of the path is handed to that nested router. Otherwise the first
//!    segment names a controller.
//! 3. **Lifecycle**: either branch runs six events on this router's bus -
//!    `creating`, `create`, `created`, `dispatching`, `dispatch`, `dispatched`.
//!
//! ## Flavors
//!
//! | Flavor | Controller action                           | Nested routers receive        |
//! |--------|---------------------------------------------|-------------------------------|
//! | `Base` | none (register a `dispatching` listener)    | remaining path, default verb  |
//! | `Mvc`  | `<first remaining segment>Action`, default `indexAction` | remaining path, default verb |
//! | `Rest` | lower-cased verb (`get`, `put`, ...)        | remaining path and the verb   |
//!
//! ## Example
//!
//! ```rust
//! use segrouter::controller::ActionController;
//! use segrouter::router::Router;
//! use serde_json::json;
//!
//! let router = Router::mvc()
//!     .with_controller_prefix("Shop")
//!     .with_controller("Shop\\CartController", || {
//!         ActionController::new("Shop\\CartController")
//!             .with_action("addAction", |args| Ok(json!({ "added": args })))
//!             .into_handle()
//!     });
//!
//! let result = router.dispatch("/cart/add/42?qty=1").unwrap();
//! assert_eq!(result, json!({ "added": ["42"] }));
//! ```
//!
//! ## Nesting
//!
//! Components re-enter the nested router with the remaining segments on the
//! same thread. A router graph that routes back to itself is not detected.

mod core;
mod flavor;
mod lifecycle;

pub use core::{
    ComponentTarget, Router, RouterHandle, DEFAULT_CONTROLLER_PREFIX, DEFAULT_VERB, INDEX_NAME,
};
pub use flavor::Flavor;
pub use lifecycle::Phase;
