//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry and written as
//! OTLP JSON lines to a rotating file, since a Zellij plugin has no network
//! collector to talk to.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → RotatingFile
//! ```
//!
//! - **Location**: `~/.local/share/zellij/recipebox/recipebox-otlp.json`
//! - **Rotation**: 10 MB per file, 3 backups
//! - **Level**: `trace_level` plugin option, default `"info"`
//!
//! # Modules
//!
//! - `export`: OTLP JSON encoding and the span exporter
//! - `rotation`: size-rotated append-only file

mod export;
mod rotation;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "recipebox-otlp.json";

/// Installs the global subscriber.
///
/// Silently does nothing when the data directory cannot be created. Only the
/// first call takes effect.
///
/// # Example
///
/// ```rust
/// use recipebox::observability::init_tracing;
/// use recipebox::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        export::SCOPE_NAME,
    )]);

    let provider = export::file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(export::SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
