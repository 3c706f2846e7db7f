//! Normalization of values coming from the headless CMS.
//!
//! A field value is either a plain string, a rich-text document (an object
//! carrying a `nodeType` string and a `content` array) or absent. The shape is
//! decided once, when the value enters the crate, and every page renders
//! through [`ContentValue::render`].

pub mod schema;
pub mod source;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

pub use schema::{ContentEntry, ContentType, FieldSchema, FieldShape, SchemaError, validate_entry};
pub use source::{ContentError, ContentResult, ContentSource, JsonFileContentSource};

/// True when `value` is an object whose `nodeType` is a string and whose `content` is an array.
///
/// Only the top level is inspected; nested nodes are the renderer's concern.
pub fn classify(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            matches!(map.get("nodeType"), Some(Value::String(_)))
                && matches!(map.get("content"), Some(Value::Array(_)))
        }
        _ => false,
    }
}

/// Displayable text for any value. Never fails.
pub fn to_plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Narrows a value already accepted by [`classify`] into a [`RichDocument`].
///
/// Returns `None` if the value does not pass [`classify`].
pub fn as_rich_document(value: &Value) -> Option<RichDocument> {
    let Value::Object(map) = value else {
        return None;
    };
    let node_type = map.get("nodeType")?.as_str()?.to_string();
    let content = map.get("content")?.as_array()?.clone();
    let attributes = map
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "nodeType" | "content"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Some(RichDocument {
        node_type,
        content,
        attributes,
    })
}

/// Top level of a rich-text tree. Children stay as raw JSON for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichDocument {
    pub node_type: String,
    pub content: Vec<Value>,
    /// Every other top-level key (`data` included), kept verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl RichDocument {
    /// The node's `data` object, if it has one.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.attributes.get("data").and_then(Value::as_object)
    }

    /// The document as it arrived, key for key.
    pub fn to_value(&self) -> Value {
        let mut map = self.attributes.clone();
        map.insert("nodeType".to_string(), Value::String(self.node_type.clone()));
        map.insert("content".to_string(), Value::Array(self.content.clone()));
        Value::Object(map)
    }

    /// Concatenated text of every `text` node, block children separated by newlines.
    ///
    /// Malformed children are skipped rather than reported.
    pub fn text_content(&self) -> String {
        let blocks: Vec<String> = self
            .content
            .iter()
            .map(collect_text)
            .filter(|text| !text.is_empty())
            .collect();
        blocks.join("\n")
    }
}

fn collect_text(node: &Value) -> String {
    let Value::Object(map) = node else {
        return String::new();
    };
    if let Some(Value::String(text)) = map.get("value") {
        return text.clone();
    }
    match map.get("content") {
        Some(Value::Array(children)) => children.iter().map(collect_text).collect(),
        _ => String::new(),
    }
}

/// A CMS field value with its shape resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContentValue {
    PlainText(String),
    RichDocument(RichDocument),
    #[default]
    Absent,
    /// Numbers, booleans, arrays and plain objects. Kept only so they can still be displayed.
    Other(Value),
}

/// What a page should do with a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering<'a> {
    Nothing,
    Rich(&'a RichDocument),
    Text(String),
}

impl ContentValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => ContentValue::Absent,
            Value::String(text) => ContentValue::PlainText(text),
            other if classify(&other) => match as_rich_document(&other) {
                Some(document) => ContentValue::RichDocument(document),
                None => ContentValue::Other(other),
            },
            other => ContentValue::Other(other),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ContentValue::PlainText(text) => Value::String(text.clone()),
            ContentValue::RichDocument(document) => document.to_value(),
            ContentValue::Absent => Value::Null,
            ContentValue::Other(value) => value.clone(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ContentValue::Absent)
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, ContentValue::RichDocument(_))
    }

    pub fn as_rich_document(&self) -> Option<&RichDocument> {
        match self {
            ContentValue::RichDocument(document) => Some(document),
            _ => None,
        }
    }

    pub fn to_plain_text(&self) -> String {
        match self {
            ContentValue::PlainText(text) => text.clone(),
            ContentValue::Absent => String::new(),
            ContentValue::RichDocument(document) => document.to_value().to_string(),
            ContentValue::Other(value) => to_plain_text(value),
        }
    }

    /// Absent renders nothing, rich documents go to the rich renderer, everything else as text.
    pub fn render(&self) -> Rendering<'_> {
        match self {
            ContentValue::Absent => Rendering::Nothing,
            ContentValue::RichDocument(document) => Rendering::Rich(document),
            other => Rendering::Text(other.to_plain_text()),
        }
    }

    /// Best plain-text form: the text itself, or the flattened text of a rich document.
    pub fn display_text(&self) -> String {
        match self {
            ContentValue::RichDocument(document) => document.text_content(),
            other => other.to_plain_text(),
        }
    }
}

impl From<Value> for ContentValue {
    fn from(value: Value) -> Self {
        ContentValue::from_json(value)
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        ContentValue::PlainText(text.to_string())
    }
}

impl Serialize for ContentValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ContentValue::from_json(value))
    }
}
