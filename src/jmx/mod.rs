//! JMX mappings for the Jolokia bridge.
//!
//! A [`JmxMapping`] names one MBean and binds its attributes to output
//! field names. [`build_request_body_and_mapping`] turns a list of mappings
//! into the bulk read request posted to Jolokia plus the table used to
//! rename values in the response:
//!
//! ```text
//! [JmxMapping] ──► [RequestBlock] ──► JSON payload
//!       │
//!       └────────► canonical key ──► field name
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

mod request;
mod validation;

pub use request::{build_request_body_and_mapping, RequestBlock, RequestType, TargetBlock};
pub use validation::{canonical_key, canonical_mbean, validate_mbean, BuildError};

/// One monitored MBean and the attributes to read from it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JmxMapping {
    /// Object name, e.g. `java.lang:type=GarbageCollector,name=PS MarkSweep`
    pub mbean: String,

    /// Attributes to read, in request order
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Proxy target; `None` polls the agent directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

/// Source attribute and the field its value is reported under.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub attr: String,
    pub field: String,
}

/// Remote JMX endpoint reached through a Jolokia proxy.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Target {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl JmxMapping {
    /// Convenience constructor for a direct (non-proxied) mapping.
    pub fn new(mbean: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            mbean: mbean.into(),
            attributes,
            target: None,
        }
    }

    /// Routes this mapping through a proxy target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }
}

impl Attribute {
    pub fn new(attr: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            field: field.into(),
        }
    }
}
