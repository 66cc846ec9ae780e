use std::fmt;

/// Errors raised while building a Jolokia request.
#[derive(Debug)]
pub enum BuildError {
    /// Bean identifier has no `domain:properties` separator
    MalformedMBean(String),
    Serialization(serde_json::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedMBean(mbean) => {
                write!(
                    f,
                    "malformed bean identifier '{}': expected 'domain:key=value[,key=value...]'",
                    mbean
                )
            }
            BuildError::Serialization(e) => write!(f, "failed to serialize request: {}", e),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Serialization(e) => Some(e),
            BuildError::MalformedMBean(_) => None,
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        BuildError::Serialization(e)
    }
}

/// Splits a bean identifier at its first `:` into domain and property list.
///
/// Only the separator is checked. Empty domains or property lists pass
/// through unchanged.
pub fn validate_mbean(mbean: &str) -> Result<(&str, &str), BuildError> {
    mbean
        .split_once(':')
        .ok_or_else(|| BuildError::MalformedMBean(mbean.to_string()))
}

/// Returns the bean identifier with its properties sorted.
///
/// Every property is followed by a `,`, the last one included:
/// `java.lang:type=GarbageCollector,name=PS MarkSweep` becomes
/// `java.lang:name=PS MarkSweep,type=GarbageCollector,`. Response
/// correlation depends on this exact shape.
pub fn canonical_mbean(mbean: &str) -> Result<String, BuildError> {
    let (domain, properties) = validate_mbean(mbean)?;

    let mut props: Vec<&str> = properties.split(',').collect();
    props.sort_unstable();

    let mut key = String::with_capacity(mbean.len() + 2);
    key.push_str(domain);
    key.push(':');
    for prop in props {
        key.push_str(prop);
        key.push(',');
    }
    Ok(key)
}

/// Key under which a polled attribute value is looked up:
/// `<canonical mbean>_<attr>`.
pub fn canonical_key(mbean: &str, attr: &str) -> Result<String, BuildError> {
    let mut key = canonical_mbean(mbean)?;
    key.push('_');
    key.push_str(attr);
    Ok(key)
}
