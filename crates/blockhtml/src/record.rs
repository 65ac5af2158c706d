//! Wire records of the content provider's block API.
//!
//! These mirror the JSON shape closely and are deliberately loose: every
//! optional field defaults (an explicit `null` included), and unknown fields
//! are ignored. Typed validation
//! happens when a record is converted into a [`blockhtml_core::Block`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use blockhtml_core::{Annotations, RichText};

/// Missing and `null` both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Page of block records as returned by the provider's children listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<BlockRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One block record: a `type` tag plus a payload under the key of that name
#[derive(Debug, Clone, Deserialize)]
pub struct BlockRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_children: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BlockRecord {
    /// The kind-specific payload, if the record carries one
    pub fn payload(&self) -> Option<&Value> {
        self.fields.get(&self.kind)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnnotationsRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bold: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub italic: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strikethrough: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: bool,
}

impl From<AnnotationsRecord> for Annotations {
    fn from(a: AnnotationsRecord) -> Self {
        Annotations {
            bold: a.bold,
            italic: a.italic,
            strikethrough: a.strikethrough,
            code: a.code,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// A rich text run as sent by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextRecord {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub text: Option<TextContent>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: AnnotationsRecord,
}

impl From<RichTextRecord> for RichText {
    fn from(record: RichTextRecord) -> Self {
        let text = record
            .plain_text
            .or_else(|| record.text.map(|t| t.content))
            .unwrap_or_default();
        RichText {
            text,
            annotations: record.annotations.into(),
            href: record.href,
        }
    }
}

pub(crate) fn rich_text(records: Vec<RichTextRecord>) -> Vec<RichText> {
    records.into_iter().map(RichText::from).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<RichTextRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<RichTextRecord>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconRecord {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalloutPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<RichTextRecord>,
    #[serde(default)]
    pub icon: Option<IconRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlRecord {
    pub url: String,
}

/// Image or video payload
#[derive(Debug, Clone, Deserialize)]
pub struct MediaPayload {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub external: Option<UrlRecord>,
    #[serde(default)]
    pub file: Option<UrlRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: Vec<RichTextRecord>,
}

/// Embed or bookmark payload
#[derive(Debug, Clone, Deserialize)]
pub struct LinkPayload {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}
