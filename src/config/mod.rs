use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::jmx::{build_request_body_and_mapping, validate_mbean, JmxMapping};

/// Jolokia module configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JolokiaConfig {
    /// Group name the polled fields are reported under (required)
    pub namespace: String,
    /// Jolokia agents to poll (`host:port` or full URL)
    #[serde(default = "default_hosts")]
    pub hosts: Vec<String>,
    /// Request path appended to each host
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub jmx: JmxConfig,
}

/// JMX section: the MBeans to read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JmxConfig {
    #[serde(default)]
    pub mappings: Vec<JmxMapping>,
}

fn default_hosts() -> Vec<String> {
    vec!["localhost:8778".to_string()]
}

fn default_path() -> String {
    "/jolokia/?ignoreErrors=true&canonicalNaming=false".to_string()
}

impl JolokiaConfig {
    /// Checks what the builder would otherwise only reject at poll time.
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            bail!("namespace is required");
        }
        for (i, mapping) in self.jmx.mappings.iter().enumerate() {
            validate_mbean(&mapping.mbean)
                .with_context(|| format!("invalid jmx.mappings[{}]", i))?;
        }
        Ok(())
    }

    /// Builds the bulk read request for all configured mappings.
    pub fn build_request(&self) -> Result<(Vec<u8>, HashMap<String, String>)> {
        build_request_body_and_mapping(&self.jmx.mappings)
            .context("Failed to build Jolokia request")
    }

    /// URL each host is polled at. Hosts without a scheme get `http://`.
    pub fn endpoint_urls(&self) -> Vec<String> {
        self.hosts
            .iter()
            .map(|host| {
                let base = if host.contains("://") {
                    host.trim_end_matches('/').to_string()
                } else {
                    format!("http://{}", host.trim_end_matches('/'))
                };
                if self.path.starts_with('/') {
                    format!("{}{}", base, self.path)
                } else {
                    format!("{}/{}", base, self.path)
                }
            })
            .collect()
    }
}

/// Load and validate configuration from a TOML file
pub fn load_config(path: &str) -> Result<JolokiaConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config: JolokiaConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path))?;
    config.validate()?;
    Ok(config)
}
