//! The six-phase resolution pipeline, shared by controllers and components.
//!
//! `creating → create → created → dispatching → dispatch → dispatched`
//!
//! Phases run strictly in order. The first failing phase aborts the call and
//! the error travels unchanged to the original caller, through any enclosing
//! component dispatch.

use super::core::{Router, RouterHandle};
use crate::controller::ControllerHandle;
use crate::error::RouterError;
use crate::events::{
    ComponentDispatchEvent, ComponentEvents, ControllerDispatchEvent, ControllerEvents,
    CreateEvent, CreatedEvent, CreatingEvent, EventKey,
};
use crate::path::SegmentVec;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Position of a dispatch call in the lifecycle.
///
/// `Done` and `Failed` are terminal. A failing call moves to `Failed`; the
/// phase it was in at that moment is logged as `failed_phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    NameResolving,
    Instantiating,
    Created,
    ActionResolving,
    Invoking,
    Done,
    Failed,
}

impl Phase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::NameResolving => "creating",
            Phase::Instantiating => "create",
            Phase::Created => "created",
            Phase::ActionResolving => "dispatching",
            Phase::Invoking => "dispatch",
            Phase::Done => "done",
            Phase::Failed => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-kind half of the pipeline: which events to fire and how to build
/// the dispatch event from a freshly created target.
pub(crate) trait TargetKind {
    type Instance: Clone + 'static;
    type Dispatch: 'static;

    const KIND: &'static str;
    const CREATING: EventKey<CreatingEvent>;
    const CREATE: EventKey<CreateEvent<Self::Instance>>;
    const CREATED: EventKey<CreatedEvent<Self::Instance>>;
    const DISPATCHING: EventKey<Self::Dispatch>;
    const DISPATCH: EventKey<Self::Dispatch>;
    const DISPATCHED: EventKey<Self::Dispatch>;

    fn dispatch_event(instance: Self::Instance, url: SegmentVec, verb: &str) -> Self::Dispatch;

    fn take_result(event: &mut Self::Dispatch) -> Option<Value>;
}

pub(crate) struct ControllerKind;

impl TargetKind for ControllerKind {
    type Instance = ControllerHandle;
    type Dispatch = ControllerDispatchEvent;

    const KIND: &'static str = "controller";
    const CREATING: EventKey<CreatingEvent> = ControllerEvents::CREATING;
    const CREATE: EventKey<CreateEvent<ControllerHandle>> = ControllerEvents::CREATE;
    const CREATED: EventKey<CreatedEvent<ControllerHandle>> = ControllerEvents::CREATED;
    const DISPATCHING: EventKey<ControllerDispatchEvent> = ControllerEvents::DISPATCHING;
    const DISPATCH: EventKey<ControllerDispatchEvent> = ControllerEvents::DISPATCH;
    const DISPATCHED: EventKey<ControllerDispatchEvent> = ControllerEvents::DISPATCHED;

    fn dispatch_event(instance: ControllerHandle, url: SegmentVec, verb: &str) -> Self::Dispatch {
        ControllerDispatchEvent::new(instance, url, verb)
    }

    fn take_result(event: &mut Self::Dispatch) -> Option<Value> {
        event.take_result()
    }
}

pub(crate) struct ComponentKind;

impl TargetKind for ComponentKind {
    type Instance = RouterHandle;
    type Dispatch = ComponentDispatchEvent;

    const KIND: &'static str = "component";
    const CREATING: EventKey<CreatingEvent> = ComponentEvents::CREATING;
    const CREATE: EventKey<CreateEvent<RouterHandle>> = ComponentEvents::CREATE;
    const CREATED: EventKey<CreatedEvent<RouterHandle>> = ComponentEvents::CREATED;
    const DISPATCHING: EventKey<ComponentDispatchEvent> = ComponentEvents::DISPATCHING;
    const DISPATCH: EventKey<ComponentDispatchEvent> = ComponentEvents::DISPATCH;
    const DISPATCHED: EventKey<ComponentDispatchEvent> = ComponentEvents::DISPATCHED;

    fn dispatch_event(instance: RouterHandle, url: SegmentVec, verb: &str) -> Self::Dispatch {
        ComponentDispatchEvent::new(instance, url, verb)
    }

    fn take_result(event: &mut Self::Dispatch) -> Option<Value> {
        event.take_result()
    }
}

impl Router {
    /// Resolve `name` to a target of kind `K` and run it.
    ///
    /// `prebuilt` pre-fills the `create` event for registry entries that
    /// already hold an instance.
    pub(crate) fn run_lifecycle<K: TargetKind>(
        &self,
        name: String,
        prebuilt: Option<K::Instance>,
        url: SegmentVec,
        verb: &str,
    ) -> Result<Value, RouterError> {
        let mut phase = Phase::Idle;
        let outcome = self.drive::<K>(&mut phase, name, prebuilt, url, verb);
        if let Err(err) = &outcome {
            let failed_at = std::mem::replace(&mut phase, Phase::Failed);
            debug!(
                kind = K::KIND,
                phase = %phase,
                failed_phase = %failed_at,
                error = %err,
                "Lifecycle aborted"
            );
        }
        outcome
    }

    fn drive<K: TargetKind>(
        &self,
        phase: &mut Phase,
        name: String,
        prebuilt: Option<K::Instance>,
        url: SegmentVec,
        verb: &str,
    ) -> Result<Value, RouterError> {
        *phase = Phase::NameResolving;
        let mut creating = CreatingEvent::new(name);
        self.emit(K::CREATING, &mut creating)?;
        if !creating.has_class() {
            return Err(RouterError::missing_target(creating.name()));
        }
        let class = creating.into_class();
        debug!(kind = K::KIND, class = %class, "Target resolved");

        *phase = Phase::Instantiating;
        let mut create = CreateEvent::new(class);
        if let Some(instance) = prebuilt {
            create.set_instance(instance);
        }
        self.emit(K::CREATE, &mut create)?;
        let instance = match create.take_instance() {
            Some(instance) => instance,
            None => return Err(RouterError::missing_target(create.class())),
        };

        *phase = Phase::Created;
        let mut created = CreatedEvent::new(instance.clone());
        self.emit(K::CREATED, &mut created)?;

        *phase = Phase::ActionResolving;
        let mut dispatch = K::dispatch_event(instance, url, verb);
        self.emit(K::DISPATCHING, &mut dispatch)?;

        *phase = Phase::Invoking;
        self.emit(K::DISPATCH, &mut dispatch)?;
        self.emit(K::DISPATCHED, &mut dispatch)?;

        *phase = Phase::Done;
        debug!(kind = K::KIND, "Lifecycle complete");
        Ok(K::take_result(&mut dispatch).unwrap_or(Value::Null))
    }
}
