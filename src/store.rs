//! In-memory bookmark store.
//!
//! Bookmarks live in insertion order next to the counter that issues their ids.
//! Both sit behind a single reader/writer lock: `list` and `search` share it,
//! `create` and `delete` take it exclusively. Ids are never reused, even after
//! the bookmark holding one has been deleted.

use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::{Bookmark, NewBookmark};

#[derive(Debug)]
struct Inner {
    bookmarks: Vec<Bookmark>,
    next_id: i64,
}

#[derive(Debug)]
pub struct BookmarkStore {
    inner: RwLock<Inner>,
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore {
    pub fn new() -> Self {
        BookmarkStore {
            inner: RwLock::new(Inner {
                bookmarks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store preloaded with the demo bookmarks, ids 1 through 3.
    pub async fn seeded() -> Self {
        let store = Self::new();
        for candidate in seed_bookmarks() {
            store.create(candidate).await;
        }
        store
    }

    pub async fn list(&self) -> Vec<Bookmark> {
        self.inner.read().await.bookmarks.clone()
    }

    pub async fn create(&self, candidate: NewBookmark) -> Bookmark {
        let mut inner = self.inner.write().await;
        let bookmark = Bookmark {
            id: inner.next_id,
            url: candidate.url,
            title: candidate.title,
            tags: candidate.tags,
            created_at: now_rfc3339(),
        };
        inner.bookmarks.push(bookmark.clone());
        inner.next_id += 1;
        bookmark
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        // Vec::remove shifts the tail left, keeping the remaining order.
        inner.bookmarks.remove(position);
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Vec<Bookmark> {
        if query.is_empty() {
            return self.list().await;
        }

        let needle = query.to_lowercase();
        self.inner
            .read()
            .await
            .bookmarks
            .iter()
            .filter(|b| b.matches(&needle))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.bookmarks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The id the next `create` will assign.
    pub async fn next_id(&self) -> i64 {
        self.inner.read().await.next_id
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn seed_bookmarks() -> Vec<NewBookmark> {
    vec![
        NewBookmark::new(
            "https://dotnet.microsoft.com/apps/aspire",
            ".NET Aspire",
            "dotnet,aspire,cloud",
        ),
        NewBookmark::new(
            "https://svelte.dev",
            "Svelte - Cybernetically enhanced web apps",
            "javascript,svelte,frontend",
        ),
        NewBookmark::new(
            "https://go.dev",
            "The Go Programming Language",
            "go,golang,backend",
        ),
    ]
}
