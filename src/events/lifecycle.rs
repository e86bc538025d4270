//! Value objects threaded through one lifecycle phase at a time.
//!
//! Each dispatch call builds fresh values, so two concurrent calls never share one.

use crate::controller::ControllerHandle;
use crate::path::SegmentVec;
use crate::router::RouterHandle;
use serde_json::Value;
use std::fmt;

/// Carried by the `creating` phase: turn a `name` into a `class` identifier.
///
/// `name` is fixed at construction; `class` starts empty and must be filled
/// by a listener, otherwise resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatingEvent {
    name: String,
    class: String,
}

impl CreatingEvent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
        }
    }

    /// The segment (controllers) or registry descriptor (components) being resolved
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = class.into();
        self
    }

    /// Whether a listener has resolved the class
    #[must_use]
    pub fn has_class(&self) -> bool {
        !self.class.is_empty()
    }

    #[must_use]
    pub fn into_class(self) -> String {
        self.class
    }
}

/// Carried by the `create` phase: consumes `class`, produces `instance`.
pub struct CreateEvent<T> {
    class: String,
    instance: Option<T>,
}

impl<T> CreateEvent<T> {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            instance: None,
        }
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn instance(&self) -> Option<&T> {
        self.instance.as_ref()
    }

    #[must_use]
    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    pub fn set_instance(&mut self, instance: T) -> &mut Self {
        self.instance = Some(instance);
        self
    }

    pub fn take_instance(&mut self) -> Option<T> {
        self.instance.take()
    }
}

impl<T> fmt::Debug for CreateEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateEvent")
            .field("class", &self.class)
            .field("has_instance", &self.instance.is_some())
            .finish()
    }
}

/// Announcement fired once a target exists. Carries no output slot.
pub struct CreatedEvent<T> {
    target: T,
}

impl<T> CreatedEvent<T> {
    #[must_use]
    pub fn new(target: T) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T> fmt::Debug for CreatedEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedEvent").finish_non_exhaustive()
    }
}

pub type ControllerCreatedEvent = CreatedEvent<ControllerHandle>;
pub type ComponentCreatedEvent = CreatedEvent<RouterHandle>;

impl ControllerCreatedEvent {
    #[must_use]
    pub fn controller(&self) -> &ControllerHandle {
        &self.target
    }
}

impl ComponentCreatedEvent {
    #[must_use]
    pub fn component(&self) -> &RouterHandle {
        &self.target
    }
}

fn collect_segments<I, S>(url: I) -> SegmentVec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    url.into_iter().map(Into::into).collect()
}

/// Threaded through `dispatching`, `dispatch` and `dispatched` for controllers.
///
/// `dispatching` resolves `action` (and may shorten `url`), `dispatch` invokes
/// the action with `url` as positional arguments and stores `result`,
/// `dispatched` observes the outcome.
#[derive(Debug, Clone)]
pub struct ControllerDispatchEvent {
    controller: ControllerHandle,
    url: SegmentVec,
    action: Option<String>,
    verb: String,
    result: Option<Value>,
}

impl ControllerDispatchEvent {
    #[must_use]
    pub fn new(controller: ControllerHandle, url: SegmentVec, verb: impl Into<String>) -> Self {
        Self {
            controller,
            url,
            action: None,
            verb: verb.into(),
            result: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &ControllerHandle {
        &self.controller
    }

    /// Remaining path segments after the controller name
    #[must_use]
    pub fn url(&self) -> &[String] {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut SegmentVec {
        &mut self.url
    }

    pub fn set_url<I, S>(&mut self, url: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url = collect_segments(url);
        self
    }

    /// Resolved action method name, once `dispatching` ran
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.action = Some(action.into());
        self
    }

    /// Lower-cased request verb of this dispatch call
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Value returned by the action, once `dispatch` ran
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, result: Value) -> &mut Self {
        self.result = Some(result);
        self
    }

    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}

/// Threaded through `dispatching`, `dispatch` and `dispatched` for components.
///
/// The nested router is re-entered with `url` as-is; it is not re-tokenized.
#[derive(Debug, Clone)]
pub struct ComponentDispatchEvent {
    component: RouterHandle,
    url: SegmentVec,
    verb: String,
    result: Option<Value>,
}

impl ComponentDispatchEvent {
    #[must_use]
    pub fn new(component: RouterHandle, url: SegmentVec, verb: impl Into<String>) -> Self {
        Self {
            component,
            url,
            verb: verb.into(),
            result: None,
        }
    }

    #[must_use]
    pub fn component(&self) -> &RouterHandle {
        &self.component
    }

    #[must_use]
    pub fn url(&self) -> &[String] {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut SegmentVec {
        &mut self.url
    }

    pub fn set_url<I, S>(&mut self, url: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url = collect_segments(url);
        self
    }

    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, result: Value) -> &mut Self {
        self.result = Some(result);
        self
    }

    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }
}
