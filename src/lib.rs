//! # Easy Time
//!
//! Conversions between instants, naive date-times and naive dates, plus string
//! and epoch-millisecond serialization, all pinned to UTC+08:00.
//!
//! ## Features
//! - Instant <-> naive date-time / date at a fixed +08:00 offset
//! - Epoch-millisecond timestamps in both directions
//! - Formatting and parsing with `yyyy-MM-dd` style patterns
//! - First and last moment of a month

/// Environment-driven settings
pub mod config;
/// The conversion functions
pub mod conversion;
/// Error type and result alias
pub mod error;
/// Format patterns and the predefined constants
pub mod pattern;
/// Logging helpers
pub mod utils;
/// The fixed UTC+8 offset
pub mod zone;

pub use conversion::*;
pub use error::{Result, TimeError};
pub use pattern::{Pattern, DAY_PATTERN, MONTH_PATTERN, SECOND_PATTERN};
