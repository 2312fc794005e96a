// src/model/bookmark.rs
use crate::constants::BOOKMARK_FILE_VERSION;
use serde::{Deserialize, Serialize};

/// One entry of a bookmark file.
///
/// A bookmark is either a link or a folder, never both, so the two shapes are
/// separate variants. Serialized untagged: `{"title", "url"}` for a link and
/// `{"title", "bookmarks"}` for a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bookmark {
    Link {
        title: String,
        url: String,
    },
    Folder {
        title: String,
        bookmarks: Vec<Bookmark>,
    },
}

impl Bookmark {
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Bookmark::Link {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn folder(title: impl Into<String>, bookmarks: Vec<Bookmark>) -> Self {
        Bookmark::Folder {
            title: title.into(),
            bookmarks,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Bookmark::Link { title, .. } | Bookmark::Folder { title, .. } => title,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Bookmark::Link { url, .. } => Some(url),
            Bookmark::Folder { .. } => None,
        }
    }

    pub fn bookmarks(&self) -> Option<&[Bookmark]> {
        match self {
            Bookmark::Link { .. } => None,
            Bookmark::Folder { bookmarks, .. } => Some(bookmarks),
        }
    }
}

/// The whole bookmark file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRoot {
    pub version: u32,
    pub bookmarks: Vec<Bookmark>,
}

impl BookmarkRoot {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            version: BOOKMARK_FILE_VERSION,
            bookmarks,
        }
    }

    /// Pretty-printed JSON, the form the service responds with.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
