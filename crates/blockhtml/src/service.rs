//! RenderService - the main entry point for block records to HTML conversion.

use serde_json::Value;

use blockhtml_core::{
    group_list_items, render_block, render_document, render_rich_text, Block, BlockKind,
    Fragment, RenderOptions, RichText,
};

use crate::convert::{convert_record, decode_records};
use crate::record::BlockRecord;
use crate::rules::{Rule, Rules};
use crate::Result;

/// The main service for rendering block documents to HTML
pub struct RenderService {
    options: RenderOptions,
    rules: Rules,
    untitled: String,
}

impl RenderService {
    /// Create a new RenderService with default options
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a RenderService with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
            untitled: "Untitled".to_string(),
        }
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Render blocks of `kind` with a custom rule instead of a placeholder.
    ///
    /// Only kinds without a built-in renderer can be customised.
    pub fn add_rule(&mut self, kind: &str, rule: Rule) -> &mut Self {
        self.rules.add(kind, rule);
        self
    }

    /// Text shown by [`render_title`](Self::render_title) for an empty title
    pub fn set_untitled(&mut self, text: impl Into<String>) -> &mut Self {
        self.untitled = text.into();
        self
    }

    /// Render already-typed blocks
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        render_document(blocks, &self.options)
    }

    /// Render block records, applying custom rules to unknown kinds
    pub fn render_records(&self, records: &[BlockRecord]) -> Result<String> {
        let mut error = None;

        let fragments = records
            .iter()
            .map_while(|record| match self.render_record(record) {
                Ok(fragment) => Some(fragment),
                Err(e) => {
                    error = Some(e);
                    None
                }
            });
        let html = group_list_items(fragments);

        match error {
            Some(e) => Err(e),
            None => Ok(html),
        }
    }

    /// Decode a JSON block listing and render it
    pub fn render_json(&self, json: &str) -> Result<String> {
        let list = decode_records(json)?;
        self.render_records(&list.results)
    }

    /// Render a page title, falling back to the untitled text
    pub fn render_title(&self, title: &[RichText]) -> String {
        let html = render_rich_text(title);
        if html.trim().is_empty() {
            html_escape::encode_text(&self.untitled).into_owned()
        } else {
            html
        }
    }

    fn render_record(&self, record: &BlockRecord) -> Result<Fragment> {
        if let Some(rule) = self.rules.for_kind(&record.kind) {
            log::trace!("custom rule for block type {:?}", record.kind);
            let payload = record.payload().unwrap_or(&Value::Null);
            return Ok(Fragment::new(
                BlockKind::Other(record.kind.clone()),
                rule.replace(payload, &self.options),
            ));
        }

        let block = convert_record(record)?;
        Ok(render_block(&block, &self.options))
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new()
    }
}
