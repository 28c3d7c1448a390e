/*!
 * Error types for the pubmeta library.
 *
 * This module contains custom error types for construction-time validation,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Serialization itself has no error paths: it is total over well-typed
 * input. Every invalid value is rejected here, at the point where a field
 * is set or parsed, never deferred to serialization.
 */

use thiserror::Error;

/// Errors that can occur when building metadata values
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Error when an enumeration token is not part of its closed set
    #[error("Unknown {field} token: {token}")]
    UnknownToken {
        /// Name of the enumeration being parsed
        field: &'static str,
        /// The rejected input token
        token: String,
    },

    /// Error when a language tag is not a recognized ISO 639 code
    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),

    /// Error when a duration is negative or not a finite number
    #[error("Invalid duration in seconds: {0}")]
    InvalidDuration(f64),
}
