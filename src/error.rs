//! Error types for Pagewise
//!
//! This module defines the error surface for the entire crate.
//! All fallible public APIs return `Result<T, Error>` where Error is
//! defined here. Missing or malformed paging parameters are not errors;
//! they normalize to defaults before any of these variants can arise.

use crate::types::BoxError;
use thiserror::Error;

/// The main error type for Pagewise
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// The data source was registered without the pagination capability.
    ///
    /// A wiring mistake, not a transient condition: the same call will
    /// fail the same way until the source implements
    /// [`SupportsPagination`](crate::source::SupportsPagination).
    #[error("Data source for entity '{entity_type}' does not support pagination")]
    CapabilityNotSupported {
        /// Short name of the entity type the source serves
        entity_type: &'static str,
    },

    /// A next-link base URI could not be assembled
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Source Errors
    // ============================================================================
    /// The operation was canceled before producing a result
    #[error("Operation canceled")]
    Canceled,

    /// The underlying data source failed; carried through unmodified
    #[error("Data source error: {0}")]
    Source(#[source] BoxError),
}

impl Error {
    /// Create a capability error for the named entity type
    pub fn capability_not_supported(entity_type: &'static str) -> Self {
        Self::CapabilityNotSupported { entity_type }
    }

    /// Wrap an error raised by the underlying data source
    pub fn source(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }

    /// Check whether this error indicates a wiring mistake rather than a
    /// runtime failure of the source
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::CapabilityNotSupported { .. } | Self::InvalidUrl(_)
        )
    }
}

/// Result type alias using the Pagewise [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
