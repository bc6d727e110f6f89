use tracing::{debug, warn};

/// Logs parse failures with consistent format
pub fn log_parse_error(operation: &str, input: &str, pattern: &str, error: &str) {
    warn!(
        "PARSE_ERROR: {} could not read '{}' with pattern '{}' - {}",
        operation, input, pattern, error
    );
}

/// Logs the date-only fallback taken for patterns that are not predefined
pub fn log_pattern_fallback(operation: &str, pattern: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("PATTERN_FALLBACK: {} parsing '{}' as a date - {}", operation, pattern, d),
        None => debug!("PATTERN_FALLBACK: {} parsing '{}' as a date", operation, pattern),
    }
}

/// Logs values that leave the representable date range
pub fn log_range_error(operation: &str, details: &str) {
    warn!("RANGE_ERROR: {} - {}", operation, details);
}
