//! Name → factory registry.
//!
//! Stands in for "instantiate a type by its string name": the router asks the
//! registry whether an identifier exists and, if so, builds a fresh target
//! from the registered factory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds one target instance
pub type Factory<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Registry mapping target identifiers to factories.
pub struct FactoryRegistry<T> {
    factories: HashMap<String, Factory<T>>,
}

impl<T> FactoryRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register `factory` under `name`.
    ///
    /// **IMPORTANT**: an existing factory with the same name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            warn!(
                target_name = %name,
                total_factories = self.factories.len(),
                "Replaced existing factory"
            );
        } else {
            debug!(
                target_name = %name,
                total_factories = self.factories.len() + 1,
                "Factory registered"
            );
        }
        self.factories.insert(name, Arc::new(factory));
    }

    /// Whether a factory exists under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build a fresh instance, or `None` if nothing is registered under `name`
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<T> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.factories.remove(name).is_some()
    }

    /// Registered identifiers, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T> Default for FactoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FactoryRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            factories: self.factories.clone(),
        }
    }
}

impl<T> fmt::Debug for FactoryRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("names", &self.names())
            .finish()
    }
}
