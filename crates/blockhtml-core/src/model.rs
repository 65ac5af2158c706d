//! Block model
//!
//! This module defines the typed blocks of a content document. Each kind owns
//! exactly the payload it needs, so a renderer can never read fields that
//! belong to another kind.

/// Style flags of a rich text run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl Annotations {
    /// True when no flag is set
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough || self.code)
    }
}

/// A span of plain text with annotations and an optional link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

impl RichText {
    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a run with the given annotations
    pub fn styled(text: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            text: text.into(),
            annotations,
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Where an image or video lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Linked from a third-party host
    External(String),
    /// Uploaded to and served by the content provider
    Hosted(String),
}

impl MediaSource {
    pub fn url(&self) -> &str {
        match self {
            MediaSource::External(url) | MediaSource::Hosted(url) => url,
        }
    }
}

/// A block-level node of a content document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<RichText>),

    /// Heading with level 1-3
    Heading {
        level: u8,
        content: Vec<RichText>,
    },

    BulletedListItem(Vec<RichText>),

    NumberedListItem(Vec<RichText>),

    Quote(Vec<RichText>),

    /// Code block; `language` is the provider's language tag
    Code {
        content: Vec<RichText>,
        language: Option<String>,
    },

    Divider,

    Image {
        source: MediaSource,
        caption: Vec<RichText>,
    },

    /// Callout with an optional emoji icon
    Callout {
        icon: Option<String>,
        content: Vec<RichText>,
    },

    Video {
        source: MediaSource,
        caption: Vec<RichText>,
    },

    Embed {
        url: String,
    },

    Bookmark {
        url: String,
        title: Option<String>,
    },

    /// A kind this crate does not know how to render
    Unsupported {
        kind: String,
    },
}

impl Block {
    /// The discriminant of this block
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Heading { level, .. } => match (*level).clamp(1, 3) {
                1 => BlockKind::Heading1,
                2 => BlockKind::Heading2,
                _ => BlockKind::Heading3,
            },
            Block::BulletedListItem(_) => BlockKind::BulletedListItem,
            Block::NumberedListItem(_) => BlockKind::NumberedListItem,
            Block::Quote(_) => BlockKind::Quote,
            Block::Code { .. } => BlockKind::Code,
            Block::Divider => BlockKind::Divider,
            Block::Image { .. } => BlockKind::Image,
            Block::Callout { .. } => BlockKind::Callout,
            Block::Video { .. } => BlockKind::Video,
            Block::Embed { .. } => BlockKind::Embed,
            Block::Bookmark { .. } => BlockKind::Bookmark,
            Block::Unsupported { kind } => BlockKind::Other(kind.clone()),
        }
    }
}

/// Block discriminant, named after the provider's `type` strings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    Quote,
    Code,
    Divider,
    Image,
    Callout,
    Video,
    Embed,
    Bookmark,
    Other(String),
}

impl BlockKind {
    /// Wire name as used in the provider's block records
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading_1",
            BlockKind::Heading2 => "heading_2",
            BlockKind::Heading3 => "heading_3",
            BlockKind::BulletedListItem => "bulleted_list_item",
            BlockKind::NumberedListItem => "numbered_list_item",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::Divider => "divider",
            BlockKind::Image => "image",
            BlockKind::Callout => "callout",
            BlockKind::Video => "video",
            BlockKind::Embed => "embed",
            BlockKind::Bookmark => "bookmark",
            BlockKind::Other(kind) => kind,
        }
    }

    /// Parse a wire name; anything unknown becomes `Other`
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "paragraph" => BlockKind::Paragraph,
            "heading_1" => BlockKind::Heading1,
            "heading_2" => BlockKind::Heading2,
            "heading_3" => BlockKind::Heading3,
            "bulleted_list_item" => BlockKind::BulletedListItem,
            "numbered_list_item" => BlockKind::NumberedListItem,
            "quote" => BlockKind::Quote,
            "code" => BlockKind::Code,
            "divider" => BlockKind::Divider,
            "image" => BlockKind::Image,
            "callout" => BlockKind::Callout,
            "video" => BlockKind::Video,
            "embed" => BlockKind::Embed,
            "bookmark" => BlockKind::Bookmark,
            other => BlockKind::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Other(_))
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered HTML of one block, tagged with the block's kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: BlockKind,
    pub html: String,
}

impl Fragment {
    pub fn new(kind: BlockKind, html: impl Into<String>) -> Self {
        Self {
            kind,
            html: html.into(),
        }
    }
}
