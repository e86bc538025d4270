use super::EventKey;
use crate::error::RouterError;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{trace, warn};

/// A listener receives the emitting context (the router) and the event being
/// threaded through the current phase. Returning an error aborts the phase.
pub type Listener<C, E> = Arc<dyn Fn(&C, &mut E) -> Result<(), RouterError> + Send + Sync>;

/// Anything that names an event: a typed [`EventKey`] or a plain string.
pub trait EventName {
    /// The stable string identifier of the event
    fn event_name(&self) -> &str;
}

impl<E> EventName for EventKey<E> {
    fn event_name(&self) -> &str {
        self.name()
    }
}

impl EventName for &str {
    fn event_name(&self) -> &str {
        self
    }
}

impl EventName for String {
    fn event_name(&self) -> &str {
        self.as_str()
    }
}

/// Synchronous publish/subscribe bus with string-keyed, ordered listener lists.
///
/// - `on` appends to the event's list
/// - `emit` runs every listener in registration order against the same event
///   value, so later listeners observe earlier mutations; the first error stops
///   the emission and is returned to the caller
/// - a listener registered through a key of another event type is an
///   `InvalidArgument` error at emit time
/// - `remove_all` clears one event's list so a variant can replace a default
///   instead of layering on top of it
///
/// Emission is reentrant: a listener may emit on another bus (or this one)
/// while it runs. Registration needs `&mut self`, so the listener set cannot
/// change while an emission is in flight.
pub struct EventBus<C> {
    listeners: HashMap<&'static str, Vec<Box<dyn Any + Send + Sync>>>,
    _context: PhantomData<fn(&C)>,
}

impl<C: 'static> EventBus<C> {
    /// Create an empty bus
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            _context: PhantomData,
        }
    }

    /// Append `listener` to the list for `key`.
    pub fn on<E, F>(&mut self, key: EventKey<E>, listener: F)
    where
        E: 'static,
        F: Fn(&C, &mut E) -> Result<(), RouterError> + Send + Sync + 'static,
    {
        let listener: Listener<C, E> = Arc::new(listener);
        self.listeners
            .entry(key.name())
            .or_default()
            .push(Box::new(listener));
    }

    /// Invoke every listener registered for `key`, in registration order.
    pub fn emit<E: 'static>(
        &self,
        context: &C,
        key: EventKey<E>,
        event: &mut E,
    ) -> Result<(), RouterError> {
        let Some(listeners) = self.listeners.get(key.name()) else {
            trace!(event = key.name(), "No listeners registered");
            return Ok(());
        };

        for (idx, entry) in listeners.iter().enumerate() {
            let Some(listener) = entry.downcast_ref::<Listener<C, E>>() else {
                warn!(
                    event = key.name(),
                    listener_idx = idx,
                    expected_event = std::any::type_name::<E>(),
                    "Listener registered with a different event type"
                );
                return Err(RouterError::invalid_argument(format!(
                    "Listener {idx} of '{}' expects a different event type than {}",
                    key.name(),
                    std::any::type_name::<E>()
                )));
            };
            listener(context, &mut *event)?;
        }
        Ok(())
    }

    /// Drop every listener registered under `name`.
    pub fn remove_all(&mut self, name: &str) {
        self.listeners.remove(name);
    }

    /// Drop every listener of every event.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Number of listeners registered under `name`
    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }
}

impl<C: 'static> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<(&str, usize)> = self
            .listeners
            .iter()
            .map(|(name, list)| (*name, list.len()))
            .collect();
        names.sort_unstable();
        f.debug_struct("EventBus")
            .field("listeners", &names)
            .finish()
    }
}
