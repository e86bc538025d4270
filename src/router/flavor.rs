use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named combination of default resolution listeners installed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Naming, instantiation and invocation defaults only. No `dispatching`
    /// listener is installed; callers supply their own action policy.
    Base,
    /// Action taken from the first remaining segment (`<segment>Action`, default `indexAction`)
    #[default]
    Mvc,
    /// Action taken from the request verb (`get`, `put`, ...); the verb is
    /// threaded into nested routers
    Rest,
}

impl Flavor {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Base => "base",
            Flavor::Mvc => "mvc",
            Flavor::Rest => "rest",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Flavor::Base),
            "mvc" => Ok(Flavor::Mvc),
            "rest" => Ok(Flavor::Rest),
            other => Err(RouterError::invalid_argument(format!(
                "unknown router flavor '{other}'"
            ))),
        }
    }
}
