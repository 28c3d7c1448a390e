/*!
 * Contributor entities.
 *
 * Authors, editors, illustrators, publishers and the other role-based
 * lists on `Metadata` all share this one shape: a (possibly localized)
 * name plus optional descriptors. The role name lives in the metadata
 * field key, not in a dedicated type per role.
 */

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::multilang::MultilangString;

/// A named-role entity attached to a publication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contributor {
    /// Display name, possibly localized
    pub multilang_name: MultilangString,

    /// Role qualifier (e.g. a MARC relator code)
    pub role: Option<String>,

    /// Sorting key for catalog display
    pub sort_as: Option<String>,

    /// Stable identifier (URI, ISNI, ...)
    pub identifier: Option<String>,

    /// Related resource hrefs
    pub links: Vec<String>,
}

impl Contributor {
    /// Create a contributor with just a name.
    pub fn from_name<S: Into<String>>(name: S) -> Self {
        Contributor {
            multilang_name: MultilangString::from_single(name),
            ..Default::default()
        }
    }

    /// The resolved display name, empty when no name was set.
    pub fn name(&self) -> &str {
        self.multilang_name.resolve().unwrap_or("")
    }

    /// Project to a JSON object.
    ///
    /// Only present fields appear; the minimal form is `{"name": ...}`.
    /// An anonymous contributor with nothing set yields `{}`, which the
    /// owning list never contains in practice.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(name) = self.multilang_name.to_json() {
            map.insert("name".to_string(), name);
        }
        if let Some(identifier) = non_empty(&self.identifier) {
            map.insert("identifier".to_string(), Value::String(identifier));
        }
        if let Some(sort_as) = non_empty(&self.sort_as) {
            map.insert("sortAs".to_string(), Value::String(sort_as));
        }
        if let Some(role) = non_empty(&self.role) {
            map.insert("role".to_string(), Value::String(role));
        }
        if !self.links.is_empty() {
            let links = self.links.iter().cloned().map(Value::String).collect();
            map.insert("links".to_string(), Value::Array(links));
        }
        Value::Object(map)
    }
}

impl Serialize for Contributor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// Clone an optional string, treating the empty string as absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}
