//! # blockhtml
//!
//! Render hosted block documents to HTML.
//!
//! The content provider delivers a page as a flat list of JSON block records,
//! each carrying a `type` and a payload stored under a key of the same name.
//! This crate decodes those records into the typed model of `blockhtml-core`
//! and renders them, wrapping consecutive list items into `<ul>`/`<ol>`.
//!
//! ## Design
//!
//! Fetching, caching and pagination are left to the caller. The service takes
//! already-retrieved records and is a pure transform, so a single instance can
//! be shared across threads.
//!
//! ## Example
//!
//! ```rust
//! use blockhtml::RenderService;
//!
//! let service = RenderService::new();
//! let json = r#"[
//!     {"type": "bulleted_list_item", "bulleted_list_item": {"rich_text": [{"plain_text": "a"}]}},
//!     {"type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "b"}]}}
//! ]"#;
//!
//! let html = service.render_json(json).unwrap();
//! assert_eq!(html, "<ul><li>a</li></ul><p>b</p>");
//! ```

mod convert;
pub mod page;
pub mod record;
mod rules;
mod service;

pub use blockhtml_core::{
    render_block, render_document, render_rich_text, Annotations, Block, BlockKind, Fragment,
    MediaSource, RenderOptions, RichText,
};
pub use convert::{convert_record, decode_blocks, decode_records};
pub use page::{PageLookup, PageSummary, PropertyNames};
pub use record::{BlockList, BlockRecord, RichTextRecord};
pub use rules::{Rule, Rules};
pub use service::RenderService;

/// Error type for blockhtml operations
#[derive(Debug, thiserror::Error)]
pub enum BlockHtmlError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind} block: {reason}")]
    InvalidRecord { kind: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BlockHtmlError>;
