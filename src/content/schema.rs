use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ContentValue;

/// Content types the site pulls from the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Homepage,
    BlogPost,
    Partner,
    Sponsor,
    FeatureHighlight,
}

/// Shape a field is declared to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Text,
    RichText,
    TextOrRich,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub required: bool,
    pub shape: FieldShape,
}

const fn required(name: &'static str, shape: FieldShape) -> FieldSchema {
    FieldSchema {
        name,
        required: true,
        shape,
    }
}

const fn optional(name: &'static str, shape: FieldShape) -> FieldSchema {
    FieldSchema {
        name,
        required: false,
        shape,
    }
}

const HOMEPAGE_FIELDS: &[FieldSchema] = &[
    required("heroTitle", FieldShape::Text),
    optional("heroSubtitle", FieldShape::TextOrRich),
    optional("heroButtonText", FieldShape::Text),
    optional("heroButtonLink", FieldShape::Text),
    optional("aboutSection", FieldShape::TextOrRich),
];

const BLOG_POST_FIELDS: &[FieldSchema] = &[
    required("title", FieldShape::Text),
    required("slug", FieldShape::Text),
    optional("excerpt", FieldShape::Text),
    required("content", FieldShape::RichText),
    optional("author", FieldShape::Text),
    optional("publishedDate", FieldShape::Text),
];

const PARTNER_FIELDS: &[FieldSchema] = &[
    required("name", FieldShape::Text),
    optional("description", FieldShape::TextOrRich),
    optional("website", FieldShape::Text),
];

const SPONSOR_FIELDS: &[FieldSchema] = &[
    required("name", FieldShape::Text),
    optional("tier", FieldShape::Text),
    optional("description", FieldShape::TextOrRich),
    optional("website", FieldShape::Text),
];

const FEATURE_HIGHLIGHT_FIELDS: &[FieldSchema] = &[
    required("title", FieldShape::Text),
    required("description", FieldShape::TextOrRich),
    optional("linkText", FieldShape::Text),
    optional("linkUrl", FieldShape::Text),
];

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Homepage,
        ContentType::BlogPost,
        ContentType::Partner,
        ContentType::Sponsor,
        ContentType::FeatureHighlight,
    ];

    /// Identifier of the content type in the CMS.
    pub fn id(&self) -> &'static str {
        match self {
            ContentType::Homepage => "homepage",
            ContentType::BlogPost => "blogPost",
            ContentType::Partner => "partner",
            ContentType::Sponsor => "sponsor",
            ContentType::FeatureHighlight => "featureHighlight",
        }
    }

    pub fn fields(&self) -> &'static [FieldSchema] {
        match self {
            ContentType::Homepage => HOMEPAGE_FIELDS,
            ContentType::BlogPost => BLOG_POST_FIELDS,
            ContentType::Partner => PARTNER_FIELDS,
            ContentType::Sponsor => SPONSOR_FIELDS,
            ContentType::FeatureHighlight => FEATURE_HIGHLIGHT_FIELDS,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.id() == s.trim())
            .ok_or_else(|| format!("unknown content type '{s}'"))
    }
}

/// One CMS entry with its fields already classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub fields: BTreeMap<String, ContentValue>,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id: id.into(),
            content_type,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<ContentValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Missing fields read as [`ContentValue::Absent`].
    pub fn field(&self, name: &str) -> &ContentValue {
        static ABSENT: ContentValue = ContentValue::Absent;
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    pub fn text(&self, name: &str) -> String {
        self.field(name).to_plain_text()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub content_type: ContentType,
    pub entry_id: String,
    pub field: String,
    pub reason: String,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entry {} field '{}': {}",
            self.content_type, self.entry_id, self.field, self.reason
        )
    }
}

impl std::error::Error for SchemaError {}

/// Checks required fields are present and every declared field has its declared shape.
///
/// Fields the schema does not declare are ignored.
pub fn validate_entry(entry: &ContentEntry) -> Result<(), SchemaError> {
    let error = |field: &str, reason: String| SchemaError {
        content_type: entry.content_type,
        entry_id: entry.id.clone(),
        field: field.to_string(),
        reason,
    };

    for schema in entry.content_type.fields() {
        let value = entry.field(schema.name);
        if value.is_absent() {
            if schema.required {
                return Err(error(schema.name, "required field is missing".to_string()));
            }
            continue;
        }
        let ok = match (schema.shape, value) {
            (FieldShape::Text, ContentValue::PlainText(_)) => true,
            (FieldShape::RichText, ContentValue::RichDocument(_)) => true,
            (FieldShape::TextOrRich, ContentValue::PlainText(_))
            | (FieldShape::TextOrRich, ContentValue::RichDocument(_)) => true,
            _ => false,
        };
        if !ok {
            return Err(error(
                schema.name,
                format!("expected {:?}, found {}", schema.shape, describe(value)),
            ));
        }
    }
    Ok(())
}

fn describe(value: &ContentValue) -> &'static str {
    match value {
        ContentValue::PlainText(_) => "plain text",
        ContentValue::RichDocument(_) => "rich document",
        ContentValue::Absent => "nothing",
        ContentValue::Other(_) => "an unsupported value",
    }
}
