//! Common types used throughout Pagewise
//!
//! Shared type aliases used across multiple modules.

use std::collections::HashMap;

/// Generic key-value map with string keys and values, as produced by
/// HTTP query-string parsing
pub type StringMap = HashMap<String, String>;

/// Boxed error type raised by underlying data sources
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
