/*!
 * Reading-experience hints.
 *
 * Layout, flow, orientation and spread are closed enumerations with fixed
 * lowercase wire tokens shared across implementations. Unknown tokens are
 * rejected at parse time; adding a token is a deliberate change to the
 * enum, never an implicit string pass-through.
 */

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::contributor::non_empty;
use crate::errors::MetadataError;

/// Page layout of the publication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    // @token: reflowable
    Reflowable,
    // @token: fixed
    Fixed,
}

impl Layout {
    // @returns: Canonical wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflowable => "reflowable",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reflowable" => Ok(Self::Reflowable),
            "fixed" => Ok(Self::Fixed),
            _ => Err(MetadataError::UnknownToken {
                field: "layout",
                token: s.to_string(),
            }),
        }
    }
}

/// Content flow within the reading surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Auto,
    Paginated,
    Continuous,
    Document,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Paginated => "paginated",
            Self::Continuous => "continuous",
            Self::Document => "document",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flow {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "paginated" => Ok(Self::Paginated),
            "continuous" => Ok(Self::Continuous),
            "document" => Ok(Self::Document),
            _ => Err(MetadataError::UnknownToken {
                field: "flow",
                token: s.to_string(),
            }),
        }
    }
}

/// Preferred device orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Auto,
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            _ => Err(MetadataError::UnknownToken {
                field: "orientation",
                token: s.to_string(),
            }),
        }
    }
}

/// Synthetic spread behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    Auto,
    Landscape,
    Portrait,
    Both,
    None,
}

impl Spread {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Both => "both",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Spread {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            "both" => Ok(Self::Both),
            "none" => Ok(Self::None),
            _ => Err(MetadataError::UnknownToken {
                field: "spread",
                token: s.to_string(),
            }),
        }
    }
}

/// Reading-experience hints for a publication.
///
/// All fields are optional; the whole object is omitted from the document
/// when nothing is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendition {
    /// Page layout
    pub layout: Option<Layout>,

    /// Content flow
    pub flow: Option<Flow>,

    /// Preferred orientation
    pub orientation: Option<Orientation>,

    /// Synthetic spread behavior
    pub spread: Option<Spread>,

    /// Viewport dimensions for fixed layouts, e.g. "1280x760"
    pub viewport: Option<String>,
}

impl Rendition {
    /// True iff no hint is set; the `rendition` field is then omitted.
    pub fn is_empty(&self) -> bool {
        self.layout.is_none()
            && self.flow.is_none()
            && self.orientation.is_none()
            && self.spread.is_none()
            && self.viewport.as_deref().unwrap_or("").is_empty()
    }

    /// Project to a JSON object; only present hints appear.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(viewport) = non_empty(&self.viewport) {
            map.insert("viewport".to_string(), Value::String(viewport));
        }
        if let Some(layout) = self.layout {
            map.insert("layout".to_string(), Value::String(layout.as_str().to_string()));
        }
        if let Some(flow) = self.flow {
            map.insert("flow".to_string(), Value::String(flow.as_str().to_string()));
        }
        if let Some(spread) = self.spread {
            map.insert("spread".to_string(), Value::String(spread.as_str().to_string()));
        }
        if let Some(orientation) = self.orientation {
            map.insert(
                "orientation".to_string(),
                Value::String(orientation.as_str().to_string()),
            );
        }
        Value::Object(map)
    }
}

impl Serialize for Rendition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
