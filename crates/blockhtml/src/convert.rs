//! Convert provider block records into the core block model

use serde::de::DeserializeOwned;
use serde_json::Value;

use blockhtml_core::{Block, BlockKind, MediaSource};

use crate::record::{
    rich_text, BlockList, BlockRecord, CalloutPayload, CodePayload, LinkPayload, MediaPayload,
    TextPayload,
};
use crate::{BlockHtmlError, Result};

/// Decode a JSON payload holding block records.
///
/// Accepts either a bare array of records or the provider's list object with a
/// `results` field. Pagination is not followed.
pub fn decode_records(json: &str) -> Result<BlockList> {
    let value: Value = serde_json::from_str(json)?;

    let list: BlockList = if value.is_array() {
        BlockList {
            results: serde_json::from_value(value)?,
            ..Default::default()
        }
    } else if value.get("results").is_some() {
        serde_json::from_value(value)?
    } else {
        return Err(BlockHtmlError::InvalidInput(
            "expected an array of blocks or an object with `results`".to_string(),
        ));
    };

    if list.has_more {
        log::warn!(
            "block list is truncated (next cursor {:?}); only the first page is rendered",
            list.next_cursor
        );
    }
    log::debug!("decoded {} block records", list.results.len());

    Ok(list)
}

/// Decode a JSON payload straight into typed blocks
pub fn decode_blocks(json: &str) -> Result<Vec<Block>> {
    decode_records(json)?
        .results
        .iter()
        .map(convert_record)
        .collect()
}

/// Convert one record into a typed block.
///
/// Unknown kinds become [`Block::Unsupported`] without their payload being
/// inspected. A known kind whose payload is missing or malformed is an error.
pub fn convert_record(record: &BlockRecord) -> Result<Block> {
    let kind = BlockKind::from_wire(&record.kind);

    let block = match kind {
        BlockKind::Paragraph => Block::Paragraph(text(record)?),
        BlockKind::Heading1 => heading(1, record)?,
        BlockKind::Heading2 => heading(2, record)?,
        BlockKind::Heading3 => heading(3, record)?,
        BlockKind::BulletedListItem => Block::BulletedListItem(text(record)?),
        BlockKind::NumberedListItem => Block::NumberedListItem(text(record)?),
        BlockKind::Quote => Block::Quote(text(record)?),
        BlockKind::Code => {
            let code: CodePayload = payload(record)?;
            Block::Code {
                content: rich_text(code.rich_text),
                language: code.language,
            }
        }
        BlockKind::Divider => Block::Divider,
        BlockKind::Image => {
            let (source, caption) = media(record)?;
            Block::Image { source, caption }
        }
        BlockKind::Callout => {
            let callout: CalloutPayload = payload(record)?;
            let icon = callout.icon.and_then(|icon| icon.emoji);
            Block::Callout {
                icon,
                content: rich_text(callout.rich_text),
            }
        }
        BlockKind::Video => {
            let (source, caption) = media(record)?;
            Block::Video { source, caption }
        }
        BlockKind::Embed => {
            let link: LinkPayload = payload(record)?;
            Block::Embed { url: link.url }
        }
        BlockKind::Bookmark => {
            let link: LinkPayload = payload(record)?;
            Block::Bookmark {
                url: link.url,
                title: link.title,
            }
        }
        BlockKind::Other(kind) => Block::Unsupported { kind },
    };

    if record.has_children {
        log::trace!(
            "block {:?} ({}) has children that are not rendered",
            record.id,
            record.kind
        );
    }

    Ok(block)
}

fn invalid(record: &BlockRecord, reason: impl ToString) -> BlockHtmlError {
    BlockHtmlError::InvalidRecord {
        kind: record.kind.clone(),
        reason: reason.to_string(),
    }
}

fn payload<T: DeserializeOwned>(record: &BlockRecord) -> Result<T> {
    let value = record
        .payload()
        .ok_or_else(|| invalid(record, "missing payload"))?;
    T::deserialize(value).map_err(|e| invalid(record, e))
}

fn text(record: &BlockRecord) -> Result<Vec<blockhtml_core::RichText>> {
    let text: TextPayload = payload(record)?;
    Ok(rich_text(text.rich_text))
}

fn heading(level: u8, record: &BlockRecord) -> Result<Block> {
    Ok(Block::Heading {
        level,
        content: text(record)?,
    })
}

fn media(record: &BlockRecord) -> Result<(MediaSource, Vec<blockhtml_core::RichText>)> {
    let media: MediaPayload = payload(record)?;

    let source = if media.kind == "external" {
        media
            .external
            .map(|u| MediaSource::External(u.url))
            .ok_or_else(|| invalid(record, "external source without url"))?
    } else {
        media
            .file
            .map(|u| MediaSource::Hosted(u.url))
            .ok_or_else(|| invalid(record, "file source without url"))?
    };

    Ok((source, rich_text(media.caption)))
}
