use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub tags: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Bookmark {
    /// Case-insensitive substring match on title, tags or url.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.to_lowercase().contains(needle)
            || self.url.to_lowercase().contains(needle)
    }
}

/// Client-supplied fields of a bookmark. Any `id` or `createdAt` in the
/// payload is dropped during decoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub tags: String,
}

impl NewBookmark {
    pub fn new(url: &str, title: &str, tags: &str) -> Self {
        NewBookmark {
            url: url.to_owned(),
            title: title.to_owned(),
            tags: tags.to_owned(),
        }
    }
}
