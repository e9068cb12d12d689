//! Metrics sink
//!
//! Fire-and-forget usage events. The root controller reports one event per
//! route transition; failures to record are never surfaced.

/// Destination for usage events
pub trait MetricsSink: Send + Sync {
    fn track_metric(&self, event: &str);
}

/// Writes every event to the log
#[derive(Debug, Default)]
pub struct LogMetricsSink;

impl MetricsSink for LogMetricsSink {
    fn track_metric(&self, event: &str) {
        log::info!("metric: {}", event);
    }
}
