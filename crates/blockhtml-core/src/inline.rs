//! Inline rendering of rich text runs

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::media::is_safe_link;
use crate::model::RichText;

/// Render a sequence of rich text runs to an HTML fragment.
///
/// Runs are rendered one by one and concatenated in order; adjacent runs with
/// identical styling are not merged. Annotations nest innermost first in the
/// order bold, italic, strikethrough, code, and a link always wraps the rest.
/// Links with a scripting or otherwise unsafe scheme render unlinked.
pub fn render_rich_text(runs: &[RichText]) -> String {
    let mut out = String::with_capacity(runs.iter().map(|r| r.text.len() + 16).sum());
    for run in runs {
        out.push_str(&render_run(run));
    }
    out
}

/// Concatenated unescaped text of the runs, without any markup
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

fn render_run(run: &RichText) -> String {
    let a = run.annotations;
    let wrappers = [
        (a.bold, "strong"),
        (a.italic, "em"),
        (a.strikethrough, "del"),
        (a.code, "code"),
    ];

    let content = wrappers
        .iter()
        .filter(|(active, _)| *active)
        .fold(encode_text(&run.text).into_owned(), |inner, (_, tag)| {
            format!("<{tag}>{inner}</{tag}>")
        });

    match run.href.as_deref().filter(|href| !href.is_empty()) {
        Some(href) if !is_safe_link(href) => {
            log::debug!("dropping link with unsafe scheme: {href:?}");
            content
        }
        Some(href) => format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(href),
            content
        ),
        None => content,
    }
}
