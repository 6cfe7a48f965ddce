pub mod api;
pub mod bookmarks;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod server;
pub mod store;
