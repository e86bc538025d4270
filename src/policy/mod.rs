//! # Resolution Policies
//!
//! Default listeners bound at construction. Each is a plain function that
//! matches the listener signature, so a consumer can re-register any of them
//! after `clear_listeners` or combine them with its own.
//!
//! | Event                     | Base | Mvc | Rest |
//! |---------------------------|------|-----|------|
//! | controller `creating`     | [`controller_creating`] | same | same |
//! | controller `create`       | [`controller_create`]   | same | same |
//! | controller `dispatching`  | -    | [`action_from_path`] | [`action_from_verb`] |
//! | controller `dispatch`     | [`controller_dispatch`] | same | same |
//! | component `creating`      | [`component_creating`]  | same | same |
//! | component `create`        | [`component_create`]    | same | same |
//! | component `dispatch`      | [`component_dispatch`]  | same | [`component_dispatch_with_verb`] |

mod action;
mod defaults;
mod naming;

pub use action::{
    action_from_path, action_from_verb, path_action_name, verb_action_name, ACTION_SUFFIX,
};
pub use defaults::{
    component_create, component_creating, component_dispatch, component_dispatch_with_verb,
    controller_create, controller_creating, controller_dispatch,
};
pub use naming::{
    capitalize, ControllerNaming, RouteTable, SuffixNaming, CONTROLLER_SUFFIX,
    NAMESPACE_SEPARATOR,
};

use crate::events::{ComponentEvents, ControllerEvents};
use crate::router::{Flavor, Router};
use tracing::debug;

/// Register the default listeners of `router.flavor()`.
pub fn install_defaults(router: &mut Router) {
    router.on(ControllerEvents::CREATING, controller_creating);
    router.on(ControllerEvents::CREATE, controller_create);
    router.on(ControllerEvents::DISPATCH, controller_dispatch);
    router.on(ComponentEvents::CREATING, component_creating);
    router.on(ComponentEvents::CREATE, component_create);
    router.on(ComponentEvents::DISPATCH, component_dispatch);

    match router.flavor() {
        Flavor::Base => {}
        Flavor::Mvc => {
            router.on(ControllerEvents::DISPATCHING, action_from_path);
        }
        Flavor::Rest => {
            router.on(ControllerEvents::DISPATCHING, action_from_verb);
            router.remove_all_listeners(ComponentEvents::DISPATCH);
            router.on(ComponentEvents::DISPATCH, component_dispatch_with_verb);
        }
    }
    debug!(flavor = %router.flavor(), "Default listeners installed");
}
