/*!
 * Series and collection membership.
 */

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::contributor::non_empty;

/// A reference to a series or collection a publication belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    /// Collection display name
    pub name: String,

    /// Stable identifier for the collection
    pub identifier: Option<String>,

    /// Sorting key for catalog display
    pub sort_as: Option<String>,

    /// Position of the publication inside the collection. Fractional
    /// positions are legal (e.g. 1.5 for an interleaved novella).
    pub position: Option<f64>,
}

impl Collection {
    /// Create a collection reference with just a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Collection {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Project to a JSON object; only present fields appear.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(identifier) = non_empty(&self.identifier) {
            map.insert("identifier".to_string(), Value::String(identifier));
        }
        if let Some(sort_as) = non_empty(&self.sort_as) {
            map.insert("sortAs".to_string(), Value::String(sort_as));
        }
        if let Some(position) = self.position {
            if let Some(number) = serde_json::Number::from_f64(position) {
                map.insert("position".to_string(), Value::Number(number));
            }
        }
        Value::Object(map)
    }
}

impl Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// The series and collections a publication is part of.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BelongsTo {
    /// Series membership, in order of relevance
    pub series: Vec<Collection>,

    /// Collection membership, in order of relevance
    pub collection: Vec<Collection>,
}

impl BelongsTo {
    /// True iff neither list has entries; the whole `belongsTo` field is
    /// then omitted by the owning document.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.collection.is_empty()
    }

    /// Project to a JSON object, omitting whichever list is empty.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        if !self.series.is_empty() {
            let series = self.series.iter().map(Collection::to_json).collect();
            map.insert("series".to_string(), Value::Array(series));
        }
        if !self.collection.is_empty() {
            let collection = self.collection.iter().map(Collection::to_json).collect();
            map.insert("collection".to_string(), Value::Array(collection));
        }
        Value::Object(map)
    }
}

impl Serialize for BelongsTo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
