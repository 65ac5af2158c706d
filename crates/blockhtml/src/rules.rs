//! Custom rendering rules for block kinds the core does not know.

use indexmap::IndexMap;
use serde_json::Value;

use blockhtml_core::{BlockKind, RenderOptions};

/// Type alias for replacement functions
pub type ReplacementFn = Box<dyn Fn(&Value, &RenderOptions) -> String + Send + Sync>;

/// A rule turns the raw payload of a block record into HTML
pub struct Rule {
    replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(replacement: F) -> Self
    where
        F: Fn(&Value, &RenderOptions) -> String + Send + Sync + 'static,
    {
        Self {
            replacement: Box::new(replacement),
        }
    }

    /// Apply this rule's replacement
    pub fn replace(&self, payload: &Value, options: &RenderOptions) -> String {
        (self.replacement)(payload, options)
    }
}

/// Collection of custom rules, keyed by wire kind in insertion order
#[derive(Default)]
pub struct Rules {
    custom_rules: IndexMap<String, Rule>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `kind`, replacing any earlier rule for it.
    ///
    /// Known kinds always use the built-in renderer, so a rule for one is
    /// dropped and `false` is returned.
    pub fn add(&mut self, kind: &str, rule: Rule) -> bool {
        if BlockKind::from_wire(kind).is_known() {
            log::warn!("ignoring custom rule for built-in block type {kind:?}");
            return false;
        }
        self.custom_rules.insert(kind.to_string(), rule);
        true
    }

    /// Find the rule for a kind
    pub fn for_kind(&self, kind: &str) -> Option<&Rule> {
        self.custom_rules.get(kind)
    }

    /// Registered kinds, in insertion order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.custom_rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.custom_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom_rules.is_empty()
    }
}
