use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::validation::{canonical_mbean, validate_mbean, BuildError};
use super::{JmxMapping, Target};

/// Jolokia operation type. Only reads are issued.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Read,
}

/// One entry of a Jolokia bulk request:
///
/// ```json
/// {
///   "type": "read",
///   "mbean": "java.lang:type=GarbageCollector,name=ConcurrentMarkSweep",
///   "attribute": ["CollectionTime", "CollectionCount"],
///   "target": {"url": "", "user": "", "password": ""}
/// }
/// ```
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RequestBlock {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub mbean: String,
    pub attribute: Vec<String>,
    pub target: TargetBlock,
}

/// Serialized proxy target. Always present, empty strings when unset.
#[derive(Clone, Default, Serialize, PartialEq)]
pub struct TargetBlock {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for TargetBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetBlock")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl From<Option<&Target>> for TargetBlock {
    fn from(target: Option<&Target>) -> Self {
        match target {
            Some(t) => Self {
                url: t.url.clone(),
                user: t.user.clone(),
                password: t.password.clone(),
            },
            None => Self::default(),
        }
    }
}

impl From<&JmxMapping> for RequestBlock {
    fn from(mapping: &JmxMapping) -> Self {
        Self {
            request_type: RequestType::Read,
            mbean: mapping.mbean.clone(),
            attribute: mapping.attributes.iter().map(|a| a.attr.clone()).collect(),
            target: TargetBlock::from(mapping.target.as_ref()),
        }
    }
}

/// Builds the Jolokia bulk read request for `mappings` and the table that
/// maps each canonical response key to its output field.
///
/// Blocks follow input order, attributes follow declaration order. When two
/// attributes share a canonical key the later field wins.
///
/// Every bean identifier is validated before anything is built, so an error
/// never comes with a partial payload.
pub fn build_request_body_and_mapping(
    mappings: &[JmxMapping],
) -> Result<(Vec<u8>, HashMap<String, String>), BuildError> {
    for mapping in mappings {
        validate_mbean(&mapping.mbean)?;
    }

    let mut response_mapping = HashMap::new();
    let mut blocks = Vec::with_capacity(mappings.len());

    for mapping in mappings {
        let prefix = canonical_mbean(&mapping.mbean)?;
        for attribute in &mapping.attributes {
            let key = format!("{}_{}", prefix, attribute.attr);
            if let Some(previous) = response_mapping.insert(key.clone(), attribute.field.clone()) {
                warn!(
                    key = %key,
                    previous = %previous,
                    field = %attribute.field,
                    "Canonical key collision, keeping later field"
                );
            }
        }
        blocks.push(RequestBlock::from(mapping));
    }

    let content = serde_json::to_vec(&blocks)?;

    debug!(
        mappings = mappings.len(),
        blocks = blocks.len(),
        keys = response_mapping.len(),
        bytes = content.len(),
        "Built Jolokia request"
    );

    Ok((content, response_mapping))
}
