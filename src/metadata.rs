/*!
 * The publication metadata aggregate and its serialization rules.
 *
 * `Metadata` owns every nested structure exclusively; serialization is a
 * pure projection with no I/O and no mutation, so an unmodified document
 * serializes byte-identically every time.
 *
 * Presence rules: scalars appear iff non-empty, lists iff non-empty,
 * nested objects iff they carry at least one value. Three keys are always
 * emitted for backward compatibility with older readers: `languages`
 * (as `[]`), `title` and `subtitle` (as `""`). `null` is never emitted.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::collection::BelongsTo;
use crate::contributor::{non_empty, Contributor};
use crate::errors::MetadataError;
use crate::language_utils;
use crate::multilang::MultilangString;
use crate::rendition::Rendition;

/// Base reading progression direction of the publication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    // @token: ltr
    LeftToRight,
    // @token: rtl
    RightToLeft,
    // @token: auto
    Auto,
}

impl Direction {
    // @returns: Canonical wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "ltr",
            Self::RightToLeft => "rtl",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ltr" => Ok(Self::LeftToRight),
            "rtl" => Ok(Self::RightToLeft),
            "auto" => Ok(Self::Auto),
            _ => Err(MetadataError::UnknownToken {
                field: "direction",
                token: s.to_string(),
            }),
        }
    }
}

/// A classification subject attached to a publication
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subject {
    /// Subject display name
    pub name: String,

    /// Code within the scheme (e.g. a BISAC or THEMA code)
    pub code: Option<String>,

    /// Classification scheme the code belongs to
    pub scheme: Option<String>,
}

impl Subject {
    /// Create a subject with just a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Subject {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Project to a JSON object; only present fields appear.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(code) = non_empty(&self.code) {
            map.insert("code".to_string(), Value::String(code));
        }
        if let Some(scheme) = non_empty(&self.scheme) {
            map.insert("scheme".to_string(), Value::String(scheme));
        }
        Value::Object(map)
    }
}

impl Serialize for Subject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// A free-form property/value pair in the `otherMetadata` extension bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataItem {
    /// Property name, typically a vocabulary URI or reverse-domain token
    pub property: String,

    /// Property value
    pub value: String,
}

impl MetadataItem {
    pub fn new<P: Into<String>, V: Into<String>>(property: P, value: V) -> Self {
        MetadataItem {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("property".to_string(), Value::String(self.property.clone()));
        map.insert("value".to_string(), Value::String(self.value.clone()));
        Value::Object(map)
    }
}

impl Serialize for MetadataItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Complete metadata record for one publication.
///
/// Constructed empty, populated field-by-field (typically by a manifest
/// parser), then serialized. Fields are public; the setters below exist
/// for the values that need validation or normalization at assignment
/// time (language tags, timestamps, duration).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Publication title, possibly localized. Always serialized, as ""
    /// when unset.
    pub multilang_title: MultilangString,

    /// Publication subtitle, fully independent of the title. Always
    /// serialized, as "" when unset.
    pub multilang_subtitle: MultilangString,

    /// Stable identifier (URN, DOI, ISBN URI, ...)
    pub identifier: Option<String>,

    /// Publication languages, in order of precedence. Always serialized,
    /// as [] when empty.
    pub languages: Vec<String>,

    /// Base reading progression direction
    pub direction: Option<Direction>,

    /// Last-modification instant, normalized to UTC
    pub modified: Option<DateTime<Utc>>,

    /// Publication date, free-form (full or partial date), passed through
    /// verbatim
    pub published: Option<String>,

    /// Description or synopsis
    pub description: Option<String>,

    /// Source of the publication (e.g. the original ISBN)
    pub source: Option<String>,

    /// Rights statement
    pub rights: Option<String>,

    /// RDF type URI of the publication
    pub rdf_type: Option<String>,

    /// Total duration in seconds, for timed publications
    pub duration: Option<f64>,

    // Role-based contributor lists; each is omitted when empty.
    pub publishers: Vec<Contributor>,
    pub imprints: Vec<Contributor>,
    pub contributors: Vec<Contributor>,
    pub authors: Vec<Contributor>,
    pub translators: Vec<Contributor>,
    pub editors: Vec<Contributor>,
    pub artists: Vec<Contributor>,
    pub illustrators: Vec<Contributor>,
    pub letterers: Vec<Contributor>,
    pub pencilers: Vec<Contributor>,
    pub colorists: Vec<Contributor>,
    pub inkers: Vec<Contributor>,
    pub narrators: Vec<Contributor>,

    /// Classification subjects
    pub subjects: Vec<Subject>,

    /// Reading-experience hints; omitted when no hint is set
    pub rendition: Rendition,

    /// Free structural-semantics tags, serialized under the wire key
    /// `type`
    pub epub_type: Vec<String>,

    /// Open extension bag, insertion order preserved
    pub other_metadata: Vec<MetadataItem>,

    /// Series/collection membership; omitted when empty
    pub belongs_to: BelongsTo,
}

impl Metadata {
    /// Create an empty metadata record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved display title, empty when no title was set.
    pub fn title(&self) -> &str {
        self.multilang_title.resolve().unwrap_or("")
    }

    /// The resolved display subtitle, empty when no subtitle was set.
    pub fn subtitle(&self) -> &str {
        self.multilang_subtitle.resolve().unwrap_or("")
    }

    /// Append a language tag after validating it.
    pub fn add_language(&mut self, tag: &str) -> Result<()> {
        language_utils::validate_language_tag(tag)
            .with_context(|| format!("Cannot add language to metadata: {}", tag))?;
        self.languages.push(tag.trim().to_string());
        Ok(())
    }

    /// Set the last-modification instant, normalizing to UTC.
    pub fn set_modified<Tz: TimeZone>(&mut self, instant: DateTime<Tz>) {
        self.modified = Some(instant.with_timezone(&Utc));
    }

    /// Set the duration in seconds, rejecting negative or non-finite
    /// values.
    pub fn set_duration(&mut self, seconds: f64) -> Result<(), MetadataError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(MetadataError::InvalidDuration(seconds));
        }
        self.duration = Some(seconds);
        Ok(())
    }

    /// Project to a JSON object value.
    ///
    /// The key set is exactly the set of populated fields plus the three
    /// always-present keys. Keys are emitted in a fixed order: `languages`,
    /// `title`, `subtitle` first (the pinned legacy prefix), then the
    /// remaining present fields in declaration order. Consumers compare
    /// the result structurally, not byte-by-byte.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();

        map.insert(
            "languages".to_string(),
            Value::Array(self.languages.iter().cloned().map(Value::String).collect()),
        );
        map.insert(
            "title".to_string(),
            self.multilang_title
                .to_json()
                .unwrap_or_else(|| Value::String(String::new())),
        );
        map.insert(
            "subtitle".to_string(),
            self.multilang_subtitle
                .to_json()
                .unwrap_or_else(|| Value::String(String::new())),
        );

        if let Some(identifier) = non_empty(&self.identifier) {
            map.insert("identifier".to_string(), Value::String(identifier));
        }
        if let Some(direction) = self.direction {
            map.insert(
                "direction".to_string(),
                Value::String(direction.as_str().to_string()),
            );
        }
        if let Some(modified) = self.modified {
            map.insert(
                "modified".to_string(),
                Value::String(format_timestamp(&modified)),
            );
        }
        if let Some(published) = non_empty(&self.published) {
            map.insert("published".to_string(), Value::String(published));
        }
        if let Some(description) = non_empty(&self.description) {
            map.insert("description".to_string(), Value::String(description));
        }
        if let Some(source) = non_empty(&self.source) {
            map.insert("source".to_string(), Value::String(source));
        }
        if let Some(rights) = non_empty(&self.rights) {
            map.insert("rights".to_string(), Value::String(rights));
        }
        if let Some(rdf_type) = non_empty(&self.rdf_type) {
            map.insert("rdfType".to_string(), Value::String(rdf_type));
        }
        if let Some(duration) = self.duration {
            if let Some(number) = serde_json::Number::from_f64(duration) {
                map.insert("duration".to_string(), Value::Number(number));
            }
        }

        insert_contributors(&mut map, "publishers", &self.publishers);
        insert_contributors(&mut map, "imprints", &self.imprints);
        insert_contributors(&mut map, "contributors", &self.contributors);
        insert_contributors(&mut map, "authors", &self.authors);
        insert_contributors(&mut map, "translators", &self.translators);
        insert_contributors(&mut map, "editors", &self.editors);
        insert_contributors(&mut map, "artists", &self.artists);
        insert_contributors(&mut map, "illustrators", &self.illustrators);
        insert_contributors(&mut map, "letterers", &self.letterers);
        insert_contributors(&mut map, "pencilers", &self.pencilers);
        insert_contributors(&mut map, "colorists", &self.colorists);
        insert_contributors(&mut map, "inkers", &self.inkers);
        insert_contributors(&mut map, "narrators", &self.narrators);

        if !self.subjects.is_empty() {
            let subjects = self.subjects.iter().map(Subject::to_json).collect();
            map.insert("subjects".to_string(), Value::Array(subjects));
        }
        if !self.rendition.is_empty() {
            map.insert("rendition".to_string(), self.rendition.to_json());
        }
        if !self.epub_type.is_empty() {
            let tags = self.epub_type.iter().cloned().map(Value::String).collect();
            map.insert("type".to_string(), Value::Array(tags));
        }
        if !self.other_metadata.is_empty() {
            let items = self.other_metadata.iter().map(MetadataItem::to_json).collect();
            map.insert("otherMetadata".to_string(), Value::Array(items));
        }
        if !self.belongs_to.is_empty() {
            map.insert("belongsTo".to_string(), self.belongs_to.to_json());
        }

        Value::Object(map)
    }

    /// Serialize to a JSON string in the documented key order.
    pub fn to_json_string(&self) -> String {
        debug!("Serializing metadata for \"{}\"", self.title());
        self.to_json().to_string()
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Format an instant as ISO-8601 with seconds precision and an explicit
/// `+0000` offset, e.g. `2001-01-01T00:39:10+0000`.
fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}

fn insert_contributors(map: &mut serde_json::Map<String, Value>, key: &str, list: &[Contributor]) {
    if !list.is_empty() {
        let entries = list.iter().map(Contributor::to_json).collect();
        map.insert(key.to_string(), Value::Array(entries));
    }
}
