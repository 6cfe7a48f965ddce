//! Bookmark HTTP API
//!
//! Exposes the [`BookmarkStore`](crate::store::BookmarkStore) over JSON:
//!
//! - `GET    /api/bookmarks`            list every bookmark
//! - `POST   /api/bookmarks`            create from `{"url", "title", "tags"}`
//! - `GET    /api/bookmarks/search?q=`  case-insensitive search over title, tags and url
//! - `DELETE /api/bookmarks/:id`        remove a bookmark
//!
//! `search` is a static segment and always takes precedence over the `:id`
//! capture, so a search request is never parsed as an id. Every route also
//! answers `OPTIONS`, and any other verb gets a 405.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks::bookmarks;
//!
//! let app = Router::new()
//!     .merge(bookmarks::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod routes;

pub use routes::routes;
