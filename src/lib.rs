//! # hacocms
//!
//! Rust client for the [hacoCMS](https://hacocms.com/) content API.
//!
//! ## Overview
//!
//! One [`HacoCmsClient`] owns two authenticated HTTP sessions — a public
//! one for published content and, when a Project-Draft-Token is supplied at
//! construction, a draft one that also sees unpublished content — and
//! exposes four retrieval operations on top of them: [`get_list`],
//! [`get_list_including_draft`], [`get_single`], and [`get_content`].
//! Every operation is a single stateless GET round trip; there is no
//! retrying, caching, or pagination traversal in this crate.
//!
//! Content types are caller-defined: anything implementing [`ApiContent`]
//! (deserializable from the raw JSON object, exposing the hacoCMS system
//! fields) can be fetched. [`SystemFields`] covers the system-field part so
//! a content type only has to add its own fields.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::{DateTime, Utc};
//! use hacocms::{ApiContent, HacoCmsClient, QueryParameters, SystemFields};
//!
//! #[derive(serde::Deserialize)]
//! struct Post {
//!     #[serde(flatten)]
//!     system: SystemFields,
//!     title: String,
//! }
//!
//! impl ApiContent for Post {
//!     fn id(&self) -> &str {
//!         &self.system.id
//!     }
//!     fn created_at(&self) -> DateTime<Utc> {
//!         self.system.created_at
//!     }
//!     fn updated_at(&self) -> DateTime<Utc> {
//!         self.system.updated_at
//!     }
//!     fn published_at(&self) -> Option<DateTime<Utc>> {
//!         self.system.published_at
//!     }
//!     fn closed_at(&self) -> Option<DateTime<Utc>> {
//!         self.system.closed_at
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> hacocms::Result<()> {
//!     let client = HacoCmsClient::builder()
//!         .base_url("https://example.hacocms.com")
//!         .access_token("YOUR_ACCESS_TOKEN")
//!         .build()?;
//!
//!     let query = QueryParameters::new().limit(10).sort("-publishedAt");
//!     let posts = client.get_list::<Post>("entries", Some(&query)).await?;
//!     for post in &posts.data {
//!         println!("{} {}", post.id(), post.title);
//!     }
//!
//!     let one = client.get_content::<Post>("entries", "abcdef", None).await?;
//!     println!("fetched {}", one.title);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The client, its builder, and the four retrieval operations |
//! | [`content`] | The [`ApiContent`] capability and [`SystemFields`] |
//! | [`response`] | The `{meta, data}` list envelope |
//! | [`query`] | Pagination, sort, and filter parameters |
//! | [`error`] | The crate's error taxonomy |
//!
//! [`get_list`]: HacoCmsClient::get_list
//! [`get_list_including_draft`]: HacoCmsClient::get_list_including_draft
//! [`get_single`]: HacoCmsClient::get_single
//! [`get_content`]: HacoCmsClient::get_content

pub mod client;
pub mod content;
pub mod error;
pub mod query;
pub mod response;

// Re-export main types for convenience
pub use client::{HacoCmsClient, HacoCmsClientBuilder};
pub use content::{ApiContent, SystemFields};
pub use error::Error;
pub use query::{QueryParameters, QueryValue};
pub use response::{ListApiResponse, ListMeta};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
