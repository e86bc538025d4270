use std::collections::HashMap;

/// Separator placed between the controller prefix and the type name
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Suffix appended to every conventionally named controller
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Turns a controller name (a path segment) into a target identifier.
pub trait ControllerNaming: Send + Sync {
    fn resolve(&self, prefix: &str, name: &str) -> String;
}

/// `prefix + "\" + Capitalize(name) + "Controller"`
///
/// ```rust
/// use segrouter::policy::{ControllerNaming, SuffixNaming};
///
/// assert_eq!(SuffixNaming.resolve("X", "test"), "X\\TestController");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixNaming;

impl ControllerNaming for SuffixNaming {
    fn resolve(&self, prefix: &str, name: &str) -> String {
        let mut class =
            String::with_capacity(prefix.len() + name.len() + CONTROLLER_SUFFIX.len() + 1);
        class.push_str(prefix);
        class.push_str(NAMESPACE_SEPARATOR);
        class.push_str(&capitalize(name));
        class.push_str(CONTROLLER_SUFFIX);
        class
    }
}

/// Upper-case the first character if it is an ASCII letter, leave the rest
/// untouched. The byte length never changes.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Explicit name → identifier table; names missing from the table fall back
/// to [`SuffixNaming`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, name: impl Into<String>, class: impl Into<String>) -> Self {
        self.routes.insert(name.into(), class.into());
        self
    }
}

impl ControllerNaming for RouteTable {
    fn resolve(&self, prefix: &str, name: &str) -> String {
        match self.routes.get(name) {
            Some(class) => class.clone(),
            None => SuffixNaming.resolve(prefix, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_naming() {
        assert_eq!(
            SuffixNaming.resolve("App\\Controller", "index"),
            "App\\Controller\\IndexController"
        );
        assert_eq!(SuffixNaming.resolve("X", "userProfile"), "X\\UserProfileController");
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        assert_eq!(capitalize("aBC"), "ABC");
        assert_eq!(capitalize("éclair"), "éclair");
        assert_eq!(capitalize("ßa"), "ßa");
        assert_eq!(capitalize("ǆx"), "ǆx");
        assert_eq!(capitalize("9lives"), "9lives");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_suffix_naming_keeps_non_ascii() {
        assert_eq!(SuffixNaming.resolve("X", "ßa"), "X\\ßaController");
        assert_eq!(SuffixNaming.resolve("X", "über"), "X\\überController");
    }

    #[test]
    fn test_route_table_falls_back() {
        let table = RouteTable::new().route("home", "Site\\Landing");
        assert_eq!(table.resolve("X", "home"), "Site\\Landing");
        assert_eq!(table.resolve("X", "about"), "X\\AboutController");
    }
}
