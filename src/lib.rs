/*!
 * # pubmeta - Publication metadata model
 *
 * A Rust library modeling the metadata of a digital publication and
 * serializing it to a canonical JSON representation.
 *
 * ## Features
 *
 * - Rich metadata model: titles, contributors, subjects, rendition hints,
 *   collection membership and a free-form extension bag
 * - Multilingual string values with a precise localized-over-default rule
 * - Canonical JSON projection: empty fields are omitted, `null` is never
 *   emitted, enumeration tokens and timestamps use fixed wire forms
 * - Closed enumerations (layout, flow, orientation, spread, direction)
 *   validated at construction time
 * - ISO 639-1 and ISO 639-2 language tag validation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `metadata`: The `Metadata` aggregate and its serialization rules
 * - `multilang`: `MultilangString`, a single or per-language string value
 * - `contributor`: Named-role entities (authors, editors, publishers, ...)
 * - `collection`: Series/collection membership (`Collection`, `BelongsTo`)
 * - `rendition`: Reading-experience hints and their closed enumerations
 * - `language_utils`: ISO language tag utilities
 * - `errors`: Custom error types for construction-time validation
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod collection;
pub mod contributor;
pub mod errors;
pub mod language_utils;
pub mod metadata;
pub mod multilang;
pub mod rendition;

// Re-export main types for easier usage
pub use collection::{BelongsTo, Collection};
pub use contributor::Contributor;
pub use errors::MetadataError;
pub use language_utils::{get_language_name, validate_language_tag};
pub use metadata::{Direction, Metadata, MetadataItem, Subject};
pub use multilang::MultilangString;
pub use rendition::{Flow, Layout, Orientation, Rendition, Spread};
