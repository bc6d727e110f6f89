/// Consistent-prefix tracing helpers
pub mod logging;
