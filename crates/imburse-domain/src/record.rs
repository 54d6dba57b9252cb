//! Content record and kind models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of stored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Code,
    Image,
    Video,
    File,
    Link,
    Prompt,
    Script,
    Book,
}

impl ContentKind {
    /// Store string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Code => "code",
            Self::Image => "image",
            Self::Video => "video",
            Self::File => "file",
            Self::Link => "link",
            Self::Prompt => "prompt",
            Self::Script => "script",
            Self::Book => "book",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a kind string from the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content kind: {0}")]
pub struct ParseContentKindError(pub String);

impl FromStr for ContentKind {
    type Err = ParseContentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "code" => Ok(Self::Code),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "file" => Ok(Self::File),
            "link" => Ok(Self::Link),
            "prompt" => Ok(Self::Prompt),
            "script" => Ok(Self::Script),
            "book" => Ok(Self::Book),
            _ => Err(ParseContentKindError(s.to_string())),
        }
    }
}

/// A stored content item as the app layers exchange it.
///
/// `id` is the record's sole identity: opaque, unique, and stable for the
/// record's lifetime, assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Body text; absent for binary/file-only records.
    pub content: Option<String>,
    /// Single classification label.
    pub category: Option<String>,
    /// Labels, compared as a set.
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
    pub status: Option<String>,
}

impl ContentRecord {
    /// Create a record with the given identity; optional fields start empty.
    pub fn new(id: String, title: String, kind: ContentKind) -> Self {
        ContentRecord {
            id,
            title,
            kind,
            content: None,
            category: None,
            tags: Vec::new(),
            is_public: false,
            status: None,
        }
    }
}
