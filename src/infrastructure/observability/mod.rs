use crate::config::Config;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const APPOINTMENTS_CREATED: &str = "appointments_created_total";
pub const QUOTES_CREATED: &str = "quotes_created_total";
pub const NOTIFICATIONS_FAILED: &str = "notifications_failed_total";
pub const ADMIN_LOGINS_FAILED: &str = "admin_logins_failed_total";

const DEFAULT_FILTER: &str = "renodesk=debug,tower_http=debug,sqlx=warn";

/// Flushes pending spans when dropped at the end of `main`
pub struct TelemetryGuard {
    otlp_enabled: bool,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if self.otlp_enabled {
            global::shutdown_tracer_provider();
        }
    }
}

pub fn init(config: &Config) -> Result<TelemetryGuard, Box<dyn std::error::Error>> {
    let otlp_enabled = init_tracing(config)?;
    init_metrics(config.metrics_port)?;
    Ok(TelemetryGuard { otlp_enabled })
}

fn init_tracing(config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let otel_layer = match &config.otel_exporter_endpoint {
        Some(endpoint) => {
            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(
                    opentelemetry_otlp::new_exporter()
                        .tonic()
                        .with_endpoint(endpoint),
                )
                .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                    KeyValue::new("service.name", config.service_name.clone()),
                ])))
                .install_batch(runtime::Tokio)?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };
    let otlp_enabled = otel_layer.is_some();

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(otel_layer)
        .init();

    if otlp_enabled {
        tracing::info!("Exporting spans to OTLP collector");
    }
    Ok(otlp_enabled)
}

fn init_metrics(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;

    metrics::describe_counter!(APPOINTMENTS_CREATED, "Appointments booked through the public form");
    metrics::describe_counter!(QUOTES_CREATED, "Quote requests received");
    metrics::describe_counter!(NOTIFICATIONS_FAILED, "Notification sends that failed");
    metrics::describe_counter!(ADMIN_LOGINS_FAILED, "Rejected admin login attempts");

    tracing::info!("Prometheus metrics on port {}", port);
    Ok(())
}
