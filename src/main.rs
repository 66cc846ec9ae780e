use anyhow::{Context, Result};
use jolokia_jmx::config::load_config;
use std::collections::BTreeMap;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean payload
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jolokia_jmx=info,jmx_request=info".into()),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("JOLOKIA_CONFIG").ok())
        .unwrap_or_else(|| "jolokia.toml".to_string());

    let config = load_config(&config_path)?;
    info!(
        config = %config_path,
        namespace = %config.namespace,
        mappings = config.jmx.mappings.len(),
        "Configuration loaded"
    );

    for url in config.endpoint_urls() {
        info!(url = %url, "Jolokia endpoint");
    }

    let (payload, response_mapping) = config.build_request()?;
    info!(
        bytes = payload.len(),
        keys = response_mapping.len(),
        "Request built"
    );

    let payload = String::from_utf8(payload).context("Request payload is not UTF-8")?;
    println!("{}", payload);

    // Sorted for stable output
    let sorted: BTreeMap<_, _> = response_mapping.into_iter().collect();
    let rendered =
        serde_json::to_string_pretty(&sorted).context("Failed to render response mapping")?;
    println!("{}", rendered);

    Ok(())
}
