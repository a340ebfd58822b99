//! Error types for the shortcode catalog.
//!
//! Every variant is fatal to the index build that raised it. Missing
//! shortcodes and unknown language or database names are not errors.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building the shortcode index.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A codepoint sequence with no codepoints.
    #[error("Codepoint sequence must contain at least one codepoint")]
    InvalidSequence,

    /// A value outside the Unicode scalar range (or a surrogate).
    #[error("Invalid codepoint U+{0:04X}: not a Unicode scalar value")]
    InvalidCodepoint(u32),

    /// A codepoint group that is not a hexadecimal number.
    #[error("Invalid hexadecimal codepoint '{0}'")]
    InvalidHex(String),

    /// A resource line whose codepoint key could not be parsed.
    #[error("Invalid record in resource '{resource}' line {line}: {source}")]
    InvalidRecord {
        resource: String,
        line: usize,
        #[source]
        source: Box<CatalogError>,
    },

    /// Resource content is not UTF-8.
    #[error("Resource '{resource}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        resource: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A resource listed by its source could not be opened.
    #[error("Resource '{resource}' is unavailable: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource source could not list its resources.
    #[error("Failed to list shortcode resources: {source}")]
    ResourceListing {
        #[source]
        source: std::io::Error,
    },

    /// The resource name pattern does not compile.
    #[error("Invalid resource name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The resource name pattern lacks a required capture group.
    #[error("Resource name pattern is missing the '{0}' capture group")]
    MissingCaptureGroup(&'static str),
}

impl CatalogError {
    /// Returns the resource name involved, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            CatalogError::InvalidRecord { resource, .. }
            | CatalogError::InvalidUtf8 { resource, .. }
            | CatalogError::ResourceUnavailable { resource, .. } => Some(resource),
            _ => None,
        }
    }
}
