//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and config produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution counters and latency histogram)
//!
//! Consumers:
//!     → Log output (stderr, pretty or JSON)
//!     → Whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics go through the `metrics` facade; no exporter is installed here
//! - Metrics are cheap (no-ops without a recorder)

pub mod logging;
pub mod metrics;
