/*!
 * Multilingual string values.
 *
 * A `MultilangString` holds either one unlocalized string, a mapping from
 * language tag to localized string, or both. The serialization contract
 * collapses the two: localized variants win over the single string, so the
 * wire format never carries an ambiguous dual representation.
 */

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A metadata value that is either one unlocalized string or a set of
/// per-language-tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilangString {
    /// The unlocalized value, used when no localized variants exist
    pub single_string: Option<String>,

    /// Localized variants, keyed by language tag. Tags are unique; the
    /// map is ordered lexicographically so projection is deterministic.
    pub multi_string: BTreeMap<String, String>,
}

impl MultilangString {
    /// Create an empty value (serializes to nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value holding a single unlocalized string.
    pub fn from_single<S: Into<String>>(value: S) -> Self {
        MultilangString {
            single_string: Some(value.into()),
            multi_string: BTreeMap::new(),
        }
    }

    /// Add a localized variant, replacing any previous value for the tag.
    pub fn with_translation<T: Into<String>, V: Into<String>>(mut self, tag: T, value: V) -> Self {
        self.multi_string.insert(tag.into(), value.into());
        self
    }

    /// True iff the value carries no usable string at all: the single
    /// string is absent or empty and there are no localized variants.
    pub fn is_empty(&self) -> bool {
        self.single_string.as_deref().unwrap_or("").is_empty() && self.multi_string.is_empty()
    }

    /// Resolve to one display string.
    ///
    /// Prefers the single string when present and non-empty, otherwise the
    /// first localized variant in lexicographic tag order. No locale
    /// matching is attempted here; display layers that need it should pick
    /// from `multi_string` themselves.
    pub fn resolve(&self) -> Option<&str> {
        match self.single_string.as_deref() {
            Some(s) if !s.is_empty() => Some(s),
            _ => self.multi_string.values().next().map(String::as_str),
        }
    }

    /// Project to a JSON value, or `None` when the owning field should be
    /// omitted entirely.
    ///
    /// A non-empty localized map serializes as an object of tag/string
    /// pairs and supersedes the single string. Otherwise a non-empty
    /// single string serializes as a plain JSON string. An empty value
    /// yields `None`, never `null` or `{}`.
    pub fn to_json(&self) -> Option<Value> {
        if !self.multi_string.is_empty() {
            let mut map = serde_json::Map::new();
            for (tag, value) in &self.multi_string {
                map.insert(tag.clone(), Value::String(value.clone()));
            }
            return Some(Value::Object(map));
        }

        match self.single_string.as_deref() {
            Some(s) if !s.is_empty() => Some(Value::String(s.to_string())),
            _ => None,
        }
    }
}

impl Serialize for MultilangString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Empty values are normally omitted by the owning struct; when
        // serialized directly anyway, fall back to an empty string.
        self.to_json()
            .unwrap_or_else(|| Value::String(String::new()))
            .serialize(serializer)
    }
}

impl From<&str> for MultilangString {
    fn from(value: &str) -> Self {
        MultilangString::from_single(value)
    }
}

impl From<String> for MultilangString {
    fn from(value: String) -> Self {
        MultilangString::from_single(value)
    }
}
