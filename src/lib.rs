// JMX mapping model, request builder and response key derivation
pub mod jmx;

// Module configuration (TOML)
pub mod config;

pub use jmx::{build_request_body_and_mapping, BuildError, JmxMapping};
