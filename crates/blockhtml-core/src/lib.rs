//! blockhtml-core - Block model and HTML rendering
//!
//! This crate provides the typed block model for a hosted content document and
//! the renderers that turn it into HTML. It is used by `blockhtml` (which
//! decodes the content provider's JSON records) and by the CLI.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────┐   Fragment   ┌──────────────┐
//! [Block] ──────▶│ render_block │ ───────────▶ │ list grouping│ ──▶ HTML String
//!                └──────┬───────┘  (per block) └──────────────┘
//!                       │
//!                       ▼
//!              render_rich_text (inline runs)
//! ```
//!
//! Every function here is pure and infallible: unknown block kinds render to an
//! inert placeholder and unrecognized media URLs pass through unchanged.
//!
//! # Example
//!
//! ```rust
//! use blockhtml_core::{render_document, Block, RenderOptions, RichText};
//!
//! let blocks = vec![
//!     Block::BulletedListItem(vec![RichText::plain("a")]),
//!     Block::BulletedListItem(vec![RichText::plain("b")]),
//!     Block::Paragraph(vec![RichText::plain("c")]),
//! ];
//!
//! let html = render_document(&blocks, &RenderOptions::default());
//! assert_eq!(html, "<ul><li>a</li><li>b</li></ul><p>c</p>");
//! ```

mod block;
mod group;
mod inline;
mod media;
mod model;
mod options;

pub use block::render_block;
pub use group::{group_list_items, render_document};
pub use inline::{plain_text, render_rich_text};
pub use media::{
    embeddable_video_url, is_provider_url, is_safe_link, normalize_media_url, url_host,
};
pub use model::{Annotations, Block, BlockKind, Fragment, MediaSource, RichText};
pub use options::RenderOptions;
