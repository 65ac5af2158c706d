//! Page metadata.
//!
//! A page object carries its title, date, tags and slug as named database
//! properties. Missing or oddly-shaped properties are treated as absent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use blockhtml_core::RichText;

use crate::record::{rich_text, RichTextRecord};

static PAGE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9a-f-]{36}$").expect("page id pattern is valid"));

/// Names of the database properties holding page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNames {
    pub title: String,
    pub date: String,
    pub tags: String,
    pub slug: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            date: "Date".to_string(),
            tags: "Tags".to_string(),
            slug: "Slug".to_string(),
        }
    }
}

/// Title, date, tags and slug of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSummary {
    pub id: Option<String>,
    pub title: Vec<RichText>,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub slug: Option<String>,
}

impl PageSummary {
    /// Read a page object using the default property names
    pub fn from_value(page: &Value) -> Self {
        Self::from_value_with(page, &PropertyNames::default())
    }

    pub fn from_value_with(page: &Value, names: &PropertyNames) -> Self {
        let properties = &page["properties"];

        let slug = runs(&properties[names.slug.as_str()]["rich_text"])
            .into_iter()
            .map(|run| run.text)
            .collect::<String>();

        Self {
            id: page["id"].as_str().map(str::to_string),
            title: runs(&properties[names.title.as_str()]["title"]),
            date: properties[names.date.as_str()]["date"]["start"]
                .as_str()
                .map(str::to_string),
            tags: properties[names.tags.as_str()]["multi_select"]
                .as_array()
                .map(|tags| {
                    tags.iter()
                        .filter_map(|tag| tag["name"].as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            slug: Some(slug).filter(|s| !s.is_empty()),
        }
    }

    /// Plain text of the title
    pub fn title_text(&self) -> String {
        blockhtml_core::plain_text(&self.title)
    }
}

fn runs(value: &Value) -> Vec<RichText> {
    let records = value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| RichTextRecord::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default();
    rich_text(records)
}

/// How to find a page from the path segment of a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    /// The segment is a page id and can be retrieved directly
    ById(String),
    /// The segment must be matched against the slug property
    BySlug(String),
}

impl PageLookup {
    pub fn parse(segment: &str) -> Self {
        if PAGE_ID.is_match(segment) {
            PageLookup::ById(segment.to_string())
        } else {
            PageLookup::BySlug(segment.to_string())
        }
    }
}
