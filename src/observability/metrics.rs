//! Resolution metrics.
//!
//! # Metrics
//! - `resolver_resolutions_total` (counter): resolutions by outcome
//! - `resolver_resolution_duration_seconds` (histogram): time spent routing
//!
//! Outcomes: `matched`, `method_not_allowed`, `not_found`, `default`.

use std::time::Instant;

/// Record one routed request.
pub fn record_resolution(outcome: &'static str, started: Instant) {
    ::metrics::counter!("resolver_resolutions_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("resolver_resolution_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
