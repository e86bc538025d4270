use super::flavor::Flavor;
use super::lifecycle::{ComponentKind, ControllerKind};
use crate::controller::ControllerHandle;
use crate::error::RouterError;
use crate::events::{EventBus, EventKey, EventName};
use crate::ids::DispatchId;
use crate::path::{PathInput, SegmentVec};
use crate::policy::{self, ControllerNaming, SuffixNaming};
use crate::registry::FactoryRegistry;
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span, info, warn};

/// Verb used when the caller does not supply one
pub const DEFAULT_VERB: &str = "get";

/// Handler name used when the path has no segments
pub const INDEX_NAME: &str = "index";

/// Controller prefix used until `set_controller_prefix` is called
pub const DEFAULT_CONTROLLER_PREFIX: &str = "App\\Controller";

/// Shared handle to a router, used for nested components
pub type RouterHandle = Arc<Router>;

/// What a component registry key points at.
#[derive(Clone)]
pub enum ComponentTarget {
    /// Identifier resolved through the component factories
    Named(String),
    /// Pre-built nested router
    Instance(RouterHandle),
}

impl ComponentTarget {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        ComponentTarget::Named(name.into())
    }
}

impl From<&str> for ComponentTarget {
    fn from(name: &str) -> Self {
        ComponentTarget::Named(name.to_string())
    }
}

impl From<String> for ComponentTarget {
    fn from(name: String) -> Self {
        ComponentTarget::Named(name)
    }
}

impl From<RouterHandle> for ComponentTarget {
    fn from(router: RouterHandle) -> Self {
        ComponentTarget::Instance(router)
    }
}

impl From<Router> for ComponentTarget {
    fn from(router: Router) -> Self {
        ComponentTarget::Instance(Arc::new(router))
    }
}

impl fmt::Debug for ComponentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentTarget::Named(name) => f.debug_tuple("Named").field(name).finish(),
            ComponentTarget::Instance(router) => f
                .debug_tuple("Instance")
                .field(&router.flavor())
                .finish(),
        }
    }
}

/// Event-driven path dispatcher.
///
/// A dispatch call tokenizes the path, then either hands the remainder to a
/// nested router (first segment is a component key) or resolves a controller
/// by naming convention. Both branches run the same six-phase lifecycle on
/// this router's [`EventBus`]; every phase can be replaced by registering
/// listeners.
///
/// Configuration (`set_*`, `register_*`, `on`) takes `&mut self` while
/// dispatching takes `&self`, so the component registry and controller prefix
/// are read-only for the duration of any dispatch call.
pub struct Router {
    flavor: Flavor,
    components: HashMap<String, ComponentTarget>,
    controller_prefix: String,
    naming: Arc<dyn ControllerNaming>,
    controllers: FactoryRegistry<ControllerHandle>,
    component_factories: FactoryRegistry<RouterHandle>,
    events: EventBus<Router>,
}

impl Router {
    /// Create a router with the default listeners of `flavor` installed.
    #[must_use]
    pub fn new(flavor: Flavor) -> Self {
        let mut router = Router {
            flavor,
            components: HashMap::new(),
            controller_prefix: DEFAULT_CONTROLLER_PREFIX.to_string(),
            naming: Arc::new(SuffixNaming),
            controllers: FactoryRegistry::new(),
            component_factories: FactoryRegistry::new(),
            events: EventBus::new(),
        };
        policy::install_defaults(&mut router);
        router
    }

    #[must_use]
    pub fn base() -> Self {
        Self::new(Flavor::Base)
    }

    #[must_use]
    pub fn mvc() -> Self {
        Self::new(Flavor::Mvc)
    }

    #[must_use]
    pub fn rest() -> Self {
        Self::new(Flavor::Rest)
    }

    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Component registry: first segment → target
    #[must_use]
    pub fn components(&self) -> &HashMap<String, ComponentTarget> {
        &self.components
    }

    /// Replace the component registry wholesale.
    pub fn set_components<I, K, V>(&mut self, components: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ComponentTarget>,
    {
        self.components = components
            .into_iter()
            .map(|(key, target)| (key.into(), target.into()))
            .collect();
        debug!(
            total_components = self.components.len(),
            "Component registry replaced"
        );
    }

    /// Builder form of [`Router::set_components`]
    #[must_use]
    pub fn with_components<I, K, V>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ComponentTarget>,
    {
        self.set_components(components);
        self
    }

    #[must_use]
    pub fn controller_prefix(&self) -> &str {
        &self.controller_prefix
    }

    pub fn set_controller_prefix(&mut self, prefix: impl Into<String>) {
        self.controller_prefix = prefix.into();
    }

    /// Builder form of [`Router::set_controller_prefix`]
    #[must_use]
    pub fn with_controller_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_controller_prefix(prefix);
        self
    }

    /// Naming policy used by the default controller `creating` listener
    #[must_use]
    pub fn naming(&self) -> &dyn ControllerNaming {
        self.naming.as_ref()
    }

    pub fn set_naming<N: ControllerNaming + 'static>(&mut self, naming: N) {
        self.naming = Arc::new(naming);
    }

    /// Controller factories, keyed by fully-qualified identifier
    #[must_use]
    pub fn controllers(&self) -> &FactoryRegistry<ControllerHandle> {
        &self.controllers
    }

    /// Make `class` constructible by the default controller listeners.
    pub fn register_controller<F>(&mut self, class: impl Into<String>, factory: F)
    where
        F: Fn() -> ControllerHandle + Send + Sync + 'static,
    {
        self.controllers.register(class, factory);
    }

    /// Builder form of [`Router::register_controller`]
    #[must_use]
    pub fn with_controller<F>(mut self, class: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> ControllerHandle + Send + Sync + 'static,
    {
        self.register_controller(class, factory);
        self
    }

    /// Nested router factories, keyed by the descriptor stored in the component registry
    #[must_use]
    pub fn component_factories(&self) -> &FactoryRegistry<RouterHandle> {
        &self.component_factories
    }

    pub fn register_component_factory<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> RouterHandle + Send + Sync + 'static,
    {
        self.component_factories.register(name, factory);
    }

    /// Append a listener for `key`. Listeners run after the flavor defaults
    /// unless those were removed first.
    pub fn on<E, F>(&mut self, key: EventKey<E>, listener: F)
    where
        E: 'static,
        F: Fn(&Router, &mut E) -> Result<(), RouterError> + Send + Sync + 'static,
    {
        self.events.on(key, listener);
    }

    /// Drop every listener registered for one event.
    pub fn remove_all_listeners(&mut self, event: impl EventName) {
        self.events.remove_all(event.event_name());
    }

    /// Drop every listener of every event, defaults included.
    pub fn clear_listeners(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn listener_count(&self, event: impl EventName) -> usize {
        self.events.listener_count(event.event_name())
    }

    /// Run the listeners of one phase against `event`.
    ///
    /// # Errors
    ///
    /// The first error returned by a listener.
    pub fn emit<E: 'static>(&self, key: EventKey<E>, event: &mut E) -> Result<(), RouterError> {
        self.events.emit(self, key, event)
    }

    /// Dispatch `path` with the default verb (`get`).
    ///
    /// # Errors
    ///
    /// - [`RouterError::NotFound`] when no target or action could be resolved
    /// - any error raised by a listener or by the invoked action
    pub fn dispatch(&self, path: impl Into<PathInput>) -> Result<Value, RouterError> {
        self.dispatch_with_verb(path, DEFAULT_VERB)
    }

    /// Dispatch `path` with an HTTP method as the verb.
    ///
    /// # Errors
    ///
    /// Same as [`Router::dispatch`].
    pub fn dispatch_with_method(
        &self,
        path: impl Into<PathInput>,
        method: &Method,
    ) -> Result<Value, RouterError> {
        self.dispatch_with_verb(path, method.as_str())
    }

    /// Dispatch `path` with an explicit verb.
    ///
    /// Returns the value produced by the invoked action; the same value is
    /// also visible to `dispatched` listeners.
    ///
    /// # Errors
    ///
    /// Same as [`Router::dispatch`].
    pub fn dispatch_with_verb(
        &self,
        path: impl Into<PathInput>,
        verb: &str,
    ) -> Result<Value, RouterError> {
        let verb = verb.to_ascii_lowercase();
        let dispatch_id = DispatchId::new();
        let span = debug_span!(
            "dispatch",
            dispatch_id = %dispatch_id,
            verb = %verb,
            flavor = %self.flavor
        );
        let _entered = span.enter();

        let result = match path.into().into_segments() {
            None => {
                debug!(name = INDEX_NAME, "Blank path - routing to index controller");
                self.run_lifecycle::<ControllerKind>(
                    INDEX_NAME.to_string(),
                    None,
                    SegmentVec::new(),
                    &verb,
                )
            }
            Some(mut segments) => {
                let node = segments.remove(0);
                match self.components.get(&node) {
                    Some(ComponentTarget::Named(descriptor)) => {
                        debug!(
                            segment = %node,
                            descriptor = %descriptor,
                            remaining = segments.len(),
                            "Component matched"
                        );
                        self.run_lifecycle::<ComponentKind>(
                            descriptor.clone(),
                            None,
                            segments,
                            &verb,
                        )
                    }
                    Some(ComponentTarget::Instance(router)) => {
                        debug!(
                            segment = %node,
                            remaining = segments.len(),
                            "Component instance matched"
                        );
                        let prebuilt = Arc::clone(router);
                        self.run_lifecycle::<ComponentKind>(node, Some(prebuilt), segments, &verb)
                    }
                    None => {
                        debug!(
                            segment = %node,
                            remaining = segments.len(),
                            "No component matched - resolving controller"
                        );
                        self.run_lifecycle::<ControllerKind>(node, None, segments, &verb)
                    }
                }
            }
        };

        match &result {
            Ok(_) => info!(dispatch_id = %dispatch_id, "Dispatch complete"),
            Err(err) => warn!(dispatch_id = %dispatch_id, error = %err, "Dispatch failed"),
        }
        result
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components: Vec<&str> = self.components.keys().map(String::as_str).collect();
        components.sort_unstable();
        f.debug_struct("Router")
            .field("flavor", &self.flavor)
            .field("controller_prefix", &self.controller_prefix)
            .field("components", &components)
            .field("controllers", &self.controllers)
            .field("component_factories", &self.component_factories)
            .field("events", &self.events)
            .finish()
    }
}
