//! # Events Module
//!
//! The router drives every dispatch through six named events per target kind.
//! Each event carries a mutable value object that listeners read and fill in:
//!
//! | Phase         | Event value                   | Listener contract                          |
//! |---------------|-------------------------------|--------------------------------------------|
//! | `creating`    | [`CreatingEvent`]             | set `class` from `name`                    |
//! | `create`      | [`CreateEvent`]               | set `instance` from `class`                |
//! | `created`     | [`CreatedEvent`]              | observe only                               |
//! | `dispatching` | [`ControllerDispatchEvent`] / [`ComponentDispatchEvent`] | resolve the action, adjust the remaining path |
//! | `dispatch`    | same value                    | invoke, store the result                   |
//! | `dispatched`  | same value                    | observe the result                         |
//!
//! Event names follow `segrouter.router.<kind>.<phase>` and are exposed as typed
//! [`EventKey`] constants on [`ControllerEvents`] and [`ComponentEvents`]. The
//! key's type parameter ties a name to the event value its listeners receive,
//! so a listener for `ControllerEvents::CREATING` is statically handed a
//! `&mut CreatingEvent`.
//!
//! ```rust
//! use segrouter::events::ControllerEvents;
//! use segrouter::router::Router;
//!
//! let mut router = Router::mvc();
//! router.on(ControllerEvents::CREATING, |_router, event| {
//!     if event.name() == "home" {
//!         event.set_class("App\\Controller\\LandingController");
//!     }
//!     Ok(())
//! });
//! ```

mod bus;
mod lifecycle;

pub use bus::{EventBus, EventName, Listener};
pub use lifecycle::{
    ComponentCreatedEvent, ComponentDispatchEvent, ControllerCreatedEvent,
    ControllerDispatchEvent, CreateEvent, CreatedEvent, CreatingEvent,
};

use crate::controller::ControllerHandle;
use crate::router::RouterHandle;
use std::fmt;
use std::marker::PhantomData;

/// Stable event identifier bound to the type of value its listeners receive.
pub struct EventKey<E> {
    name: &'static str,
    _event: PhantomData<fn(&mut E)>,
}

impl<E> EventKey<E> {
    /// Declare a key. Two keys with the same name must carry the same event type;
    /// emitting an event whose list holds a listener of another type fails with
    /// [`RouterError::InvalidArgument`](crate::error::RouterError::InvalidArgument).
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _event: PhantomData,
        }
    }

    /// The string identifier used for external listener registration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E> Clone for EventKey<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EventKey<E> {}

impl<E> PartialEq for EventKey<E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<E> Eq for EventKey<E> {}

impl<E> fmt::Debug for EventKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventKey").field(&self.name).finish()
    }
}

impl<E> fmt::Display for EventKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Events fired while resolving and invoking a controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerEvents;

impl ControllerEvents {
    pub const CREATING: EventKey<CreatingEvent> =
        EventKey::new("segrouter.router.controller.creating");
    pub const CREATE: EventKey<CreateEvent<ControllerHandle>> =
        EventKey::new("segrouter.router.controller.create");
    pub const CREATED: EventKey<ControllerCreatedEvent> =
        EventKey::new("segrouter.router.controller.created");
    pub const DISPATCHING: EventKey<ControllerDispatchEvent> =
        EventKey::new("segrouter.router.controller.dispatching");
    pub const DISPATCH: EventKey<ControllerDispatchEvent> =
        EventKey::new("segrouter.router.controller.dispatch");
    pub const DISPATCHED: EventKey<ControllerDispatchEvent> =
        EventKey::new("segrouter.router.controller.dispatched");
}

/// Events fired while resolving and re-entering a nested router.
#[derive(Debug, Clone, Copy)]
pub struct ComponentEvents;

impl ComponentEvents {
    pub const CREATING: EventKey<CreatingEvent> =
        EventKey::new("segrouter.router.component.creating");
    pub const CREATE: EventKey<CreateEvent<RouterHandle>> =
        EventKey::new("segrouter.router.component.create");
    pub const CREATED: EventKey<ComponentCreatedEvent> =
        EventKey::new("segrouter.router.component.created");
    pub const DISPATCHING: EventKey<ComponentDispatchEvent> =
        EventKey::new("segrouter.router.component.dispatching");
    pub const DISPATCH: EventKey<ComponentDispatchEvent> =
        EventKey::new("segrouter.router.component.dispatch");
    pub const DISPATCHED: EventKey<ComponentDispatchEvent> =
        EventKey::new("segrouter.router.component.dispatched");
}
