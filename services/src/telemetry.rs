use std::env;

use anyhow::Context;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing_stackdriver::CloudTraceConfiguration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

const DEFAULT_FILTER: &str = "info,userdesk_services=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Pretty logs locally. Elsewhere, Stackdriver JSON with Cloud Trace correlation and W3C
/// trace-context propagation.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if config.is_local() {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .init();
        return Ok(());
    }

    let project_id = env::var("GOOGLE_CLOUD_PROJECT").with_context(|| {
        format!(
            "GOOGLE_CLOUD_PROJECT is required in the {} environment",
            config.environment()
        )
    })?;

    opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_opentelemetry::layer())
        .with(tracing_stackdriver::layer().with_cloud_trace(CloudTraceConfiguration { project_id }))
        .init();

    Ok(())
}
