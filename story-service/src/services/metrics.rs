use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static STORIES_GENERATED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    // Prometheus registry for custom metrics
    let registry = Registry::new();

    let stories_counter = IntCounterVec::new(
        Opts::new(
            "stories_generated_total",
            "Total story generation requests by genre and outcome",
        ),
        &["genre", "status"],
    )
    .expect("Failed to create stories_generated_total metric");

    registry
        .register(Box::new(stories_counter.clone()))
        .expect("Failed to register stories_generated_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    STORIES_GENERATED_TOTAL
        .set(stories_counter)
        .expect("Failed to set stories_generated_total");
}

pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    // Append custom prometheus metrics
    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record the outcome of a story generation request.
pub fn record_story(genre: &str, status: &str) {
    if let Some(counter) = STORIES_GENERATED_TOTAL.get() {
        counter.with_label_values(&[genre, status]).inc();
    }
}
