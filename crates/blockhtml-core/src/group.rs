//! List grouping
//!
//! Block records have no list container of their own: a list is simply a run
//! of consecutive list-item blocks. This pass wraps each maximal run in `<ul>`
//! or `<ol>` and passes every other fragment through untouched.

use crate::block::render_block;
use crate::model::{Block, BlockKind, Fragment};
use crate::options::RenderOptions;

fn list_container(kind: &BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::BulletedListItem => Some("ul"),
        BlockKind::NumberedListItem => Some("ol"),
        _ => None,
    }
}

/// Concatenate fragments, wrapping runs of list items in their container.
///
/// A change of list kind always closes the current container, even when no
/// other fragment sits between the two runs.
pub fn group_list_items<I>(fragments: I) -> String
where
    I: IntoIterator<Item = Fragment>,
{
    let mut out = String::new();
    let mut open: Option<&'static str> = None;

    for fragment in fragments {
        let container = list_container(&fragment.kind);
        if container != open {
            if let Some(tag) = open {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            if let Some(tag) = container {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            open = container;
        }
        out.push_str(&fragment.html);
    }

    if let Some(tag) = open {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    out
}

/// Render a whole document: every block, then list grouping, in one traversal
pub fn render_document(blocks: &[Block], options: &RenderOptions) -> String {
    group_list_items(blocks.iter().map(|block| render_block(block, options)))
}
