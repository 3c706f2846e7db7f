use serde::Deserialize;
use serde_json::Error as SerdeJsonError;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::schema::{ContentEntry, ContentType, SchemaError, validate_entry};
use super::ContentValue;

#[derive(Debug)]
pub enum ContentError {
    Io(io::Error),
    Serialization(SerdeJsonError),
    Schema(SchemaError),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(err) => write!(f, "io error: {err}"),
            ContentError::Serialization(err) => write!(f, "serialization error: {err}"),
            ContentError::Schema(err) => write!(f, "schema error: {err}"),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<io::Error> for ContentError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for ContentError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<SchemaError> for ContentError {
    fn from(value: SchemaError) -> Self {
        Self::Schema(value)
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Anything that can hand out entries of a content type.
pub trait ContentSource {
    fn fetch_entries(&self, content_type: ContentType) -> ContentResult<Vec<ContentEntry>>;
}

#[derive(Deserialize)]
struct DeliveryResponse {
    #[serde(default)]
    items: Vec<DeliveryItem>,
}

#[derive(Deserialize)]
struct DeliveryItem {
    sys: ItemSys,
    #[serde(default)]
    fields: BTreeMap<String, ContentValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemSys {
    id: String,
    content_type: Link,
}

#[derive(Deserialize)]
struct Link {
    sys: LinkSys,
}

#[derive(Deserialize)]
struct LinkSys {
    id: String,
}

/// Reads entries from a JSON export in the CMS delivery format.
///
/// Entries that fail their schema are skipped with a warning, or returned as
/// an error when `strict` is set.
#[derive(Debug, Clone)]
pub struct JsonFileContentSource {
    path: PathBuf,
    strict: bool,
}

impl JsonFileContentSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn read(&self) -> ContentResult<DeliveryResponse> {
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl ContentSource for JsonFileContentSource {
    fn fetch_entries(&self, content_type: ContentType) -> ContentResult<Vec<ContentEntry>> {
        let response = self.read()?;
        let mut entries = Vec::new();
        for item in response.items {
            if item.sys.content_type.sys.id != content_type.id() {
                continue;
            }
            let entry = ContentEntry {
                id: item.sys.id,
                content_type,
                fields: item.fields,
            };
            match validate_entry(&entry) {
                Ok(()) => entries.push(entry),
                Err(err) if self.strict => return Err(err.into()),
                Err(err) => log::warn!("skipping invalid entry: {err}"),
            }
        }
        log::debug!(
            "loaded {} {} entries from {}",
            entries.len(),
            content_type,
            self.path.display()
        );
        Ok(entries)
    }
}
