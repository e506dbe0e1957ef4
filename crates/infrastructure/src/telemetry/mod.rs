//! Logging infrastructure
//!
//! Console logging via `tracing-subscriber`, text or JSON.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_logging};
