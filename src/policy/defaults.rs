//! Flavor-independent resolution listeners: naming, instantiation, invocation.

use crate::controller::ControllerHandle;
use crate::error::RouterError;
use crate::events::{ComponentDispatchEvent, ControllerDispatchEvent, CreateEvent, CreatingEvent};
use crate::path::SegmentVec;
use crate::router::{Router, RouterHandle};
use tracing::debug;

/// Controller `creating`: build the identifier with the router's naming policy
/// and require that it is registered.
pub fn controller_creating(router: &Router, event: &mut CreatingEvent) -> Result<(), RouterError> {
    let class = router
        .naming()
        .resolve(router.controller_prefix(), event.name());
    if !router.controllers().contains(&class) {
        return Err(RouterError::missing_target(&class));
    }
    event.set_class(class);
    Ok(())
}

/// Controller `create`: instantiate from the controller registry unless a
/// previous listener already supplied an instance.
pub fn controller_create(
    router: &Router,
    event: &mut CreateEvent<ControllerHandle>,
) -> Result<(), RouterError> {
    if event.has_instance() {
        return Ok(());
    }
    match router.controllers().instantiate(event.class()) {
        Some(controller) => {
            event.set_instance(controller);
            Ok(())
        }
        None => Err(RouterError::missing_target(event.class())),
    }
}

/// Controller `dispatch`: invoke the resolved action with the remaining path.
pub fn controller_dispatch(
    _router: &Router,
    event: &mut ControllerDispatchEvent,
) -> Result<(), RouterError> {
    let Some(action) = event.action() else {
        return Err(RouterError::NotFound(format!(
            "Could not find an action for {}",
            event.controller().class()
        )));
    };
    debug!(
        class = %event.controller().class(),
        action = %action,
        args = event.url().len(),
        "Invoking action"
    );
    let result = event.controller().invoke(action, event.url())?;
    event.set_result(result);
    Ok(())
}

/// Component `creating`: the registry descriptor is the identifier.
pub fn component_creating(_router: &Router, event: &mut CreatingEvent) -> Result<(), RouterError> {
    let class = event.name().to_string();
    event.set_class(class);
    Ok(())
}

/// Component `create`: build the nested router from its factory unless an
/// instance is already present.
pub fn component_create(
    router: &Router,
    event: &mut CreateEvent<RouterHandle>,
) -> Result<(), RouterError> {
    if event.has_instance() {
        return Ok(());
    }
    match router.component_factories().instantiate(event.class()) {
        Some(component) => {
            event.set_instance(component);
            Ok(())
        }
        None => Err(RouterError::missing_target(event.class())),
    }
}

/// Component `dispatch`: re-enter the nested router with the remaining path
/// and the default verb.
pub fn component_dispatch(
    _router: &Router,
    event: &mut ComponentDispatchEvent,
) -> Result<(), RouterError> {
    let url = SegmentVec::from(event.url());
    let result = event.component().dispatch(url)?;
    event.set_result(result);
    Ok(())
}

/// Rest replacement for [`component_dispatch`]: the current verb is threaded
/// into the nested router.
pub fn component_dispatch_with_verb(
    _router: &Router,
    event: &mut ComponentDispatchEvent,
) -> Result<(), RouterError> {
    let url = SegmentVec::from(event.url());
    let result = event.component().dispatch_with_verb(url, event.verb())?;
    event.set_result(result);
    Ok(())
}
