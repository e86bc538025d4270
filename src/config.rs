//! # Router Configuration
//!
//! Declarative YAML description of a router tree. Controllers declared here
//! are backed by [`EchoController`], which makes a configuration file enough
//! to exercise routing decisions end to end (the `segrouter` CLI does exactly
//! that).
//!
//! ```yaml
//! flavor: mvc
//! controller_prefix: "App\\Controller"
//! controllers:
//!   "App\\Controller\\IndexController": [indexAction]
//!   "App\\Controller\\TestController": [indexAction, lolAction]
//! components:
//!   admin: admin_router
//! routers:
//!   admin_router:
//!     flavor: rest
//!     controller_prefix: Admin
//!     controllers:
//!       "Admin\\UsersController": [get, put]
//! ```
//!
//! Shape errors are reported as [`RouterError::InvalidArgument`] before any
//! router is built. Nested routers are built eagerly by [`RouterConfig::build`],
//! so a dangling component reference fails at build time rather than on the
//! first dispatch.

use crate::echo::EchoController;
use crate::error::RouterError;
use crate::router::{Flavor, Router, DEFAULT_CONTROLLER_PREFIX};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

fn default_prefix() -> String {
    DEFAULT_CONTROLLER_PREFIX.to_string()
}

/// One router of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Default listener set
    #[serde(default)]
    pub flavor: Flavor,

    /// Namespace prefix used by the controller naming policy
    #[serde(default = "default_prefix")]
    pub controller_prefix: String,

    /// Controller identifier → action method names
    #[serde(default)]
    pub controllers: BTreeMap<String, Vec<String>>,

    /// First path segment → name of an entry in `routers`
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    /// Nested router definitions, referenced from `components`
    #[serde(default)]
    pub routers: BTreeMap<String, RouterConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            controller_prefix: default_prefix(),
            controllers: BTreeMap::new(),
            components: BTreeMap::new(),
            routers: BTreeMap::new(),
        }
    }
}

impl RouterConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidArgument`] for malformed YAML or a wrongly shaped field.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RouterError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(yaml).map_err(|e| {
            RouterError::invalid_argument(format!("invalid router configuration: {e}"))
        })?;
        Self::from_value(value)
    }

    /// Parse an already loaded YAML value.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidArgument`] for a wrongly shaped field.
    pub fn from_value(value: Value) -> Result<Self, RouterError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        validate_shape(&value)?;
        serde_yaml::from_value(value).map_err(|e| {
            RouterError::invalid_argument(format!("invalid router configuration: {e}"))
        })
    }

    /// Load and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)
            .with_context(|| format!("Failed to parse router config {}", path.display()))?;
        info!(
            path = %path.display(),
            flavor = %config.flavor,
            controllers = config.controllers.len(),
            components = config.components.len(),
            "Router config loaded"
        );
        Ok(config)
    }

    /// Build the router, nested routers first.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidArgument`] when a component names a router that
    /// is not defined under `routers`.
    pub fn build(&self) -> Result<Router, RouterError> {
        let mut router = Router::new(self.flavor).with_controller_prefix(&self.controller_prefix);

        for (class, actions) in &self.controllers {
            let class = class.clone();
            let actions = actions.clone();
            router.register_controller(class.clone(), move || {
                EchoController::new(class.clone(), actions.iter().cloned()).into_handle()
            });
        }

        for (name, nested) in &self.routers {
            let handle = Arc::new(nested.build()?);
            router.register_component_factory(name.clone(), move || Arc::clone(&handle));
        }

        for (segment, target) in &self.components {
            if !router.component_factories().contains(target) {
                return Err(RouterError::invalid_argument(format!(
                    "component '{segment}' targets unknown router '{target}'"
                )));
            }
        }
        router.set_components(self.components.clone());

        debug!(
            flavor = %self.flavor,
            controllers = self.controllers.len(),
            routers = self.routers.len(),
            "Router built from config"
        );
        Ok(router)
    }
}

/// Check the fields whose shape carries a dedicated error message, recursing
/// into nested routers.
fn validate_shape(value: &Value) -> Result<(), RouterError> {
    let Some(root) = value.as_mapping() else {
        return Err(RouterError::invalid_argument(
            "router configuration must be a mapping",
        ));
    };

    if let Some(prefix) = root.get("controller_prefix") {
        if !prefix.is_string() {
            return Err(RouterError::invalid_argument("prefix must be a string"));
        }
    }

    if let Some(components) = root.get("components") {
        let Some(components) = components.as_mapping() else {
            return Err(RouterError::invalid_argument("components must be a mapping"));
        };
        if components.values().any(|target| !target.is_string()) {
            return Err(RouterError::invalid_argument(
                "component target must be a string",
            ));
        }
    }

    if let Some(routers) = root.get("routers").and_then(Value::as_mapping) {
        for nested in routers.values() {
            validate_shape(nested)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const TREE: &str = r#"
flavor: mvc
controller_prefix: "X"
controllers:
  "X\\IndexController": [indexAction]
  "X\\TestController": [indexAction, lolAction]
components:
  admin: admin_router
routers:
  admin_router:
    flavor: rest
    controller_prefix: Admin
    controllers:
      "Admin\\UsersController": [get, put]
"#;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.flavor, Flavor::Mvc);
        assert_eq!(config.controller_prefix, DEFAULT_CONTROLLER_PREFIX);
        assert!(config.controllers.is_empty());
        assert_eq!(RouterConfig::from_yaml_str("").unwrap(), RouterConfig::default());
    }

    #[test]
    fn test_build_tree_and_dispatch() {
        let router = RouterConfig::from_yaml_str(TREE).unwrap().build().unwrap();

        assert_eq!(
            router.dispatch("/test/lol/1").unwrap(),
            json!({"controller": "X\\TestController", "action": "lolAction", "args": ["1"]})
        );
        assert_eq!(
            router.dispatch("/admin/users/9").unwrap(),
            json!({"controller": "Admin\\UsersController", "action": "get", "args": ["9"]})
        );
    }

    #[test]
    fn test_components_must_be_mapping() {
        let err = RouterConfig::from_yaml_str("components: [a, b]").unwrap_err();
        assert_eq!(err.to_string(), "components must be a mapping");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_prefix_must_be_string() {
        let err = RouterConfig::from_yaml_str("controller_prefix: [X]").unwrap_err();
        assert_eq!(err.to_string(), "prefix must be a string");
    }

    #[test]
    fn test_component_target_must_be_string() {
        let err = RouterConfig::from_yaml_str("components: { admin: { a: 1 } }").unwrap_err();
        assert_eq!(err.to_string(), "component target must be a string");
    }

    #[test]
    fn test_nested_shape_errors_surface() {
        let yaml = "routers: { child: { components: 3 } }";
        let err = RouterConfig::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.to_string(), "components must be a mapping");
    }

    #[test]
    fn test_unknown_flavor_rejected() {
        let err = RouterConfig::from_yaml_str("flavor: soap").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_dangling_component_fails_build() {
        let config = RouterConfig::from_yaml_str("components: { admin: nowhere }").unwrap();
        let err = config.build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "component 'admin' targets unknown router 'nowhere'"
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TREE.as_bytes()).unwrap();

        let config = RouterConfig::from_path(file.path()).unwrap();
        assert_eq!(config.routers["admin_router"].flavor, Flavor::Rest);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RouterConfig::from_path(dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read router config"));
    }
}
