// * Operations
// * Logging setup shared by the binary and host services

pub mod telemetry;

pub use telemetry::{init_tracing, init_tracing_pretty, init_tracing_with_level, DEFAULT_LOG_LEVEL};
