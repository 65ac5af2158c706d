//! Per-block HTML rendering
//!
//! Converts one block into an HTML fragment. Rendering is context free: list
//! items come out as bare `<li>` elements and are wrapped later by the
//! list-grouping pass.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::inline::{plain_text, render_rich_text};
use crate::media::{embeddable_video_url, is_provider_url, is_safe_link, normalize_media_url};
use crate::model::{Block, Fragment, MediaSource, RichText};
use crate::options::RenderOptions;

/// Render a single block to a fragment tagged with the block's kind.
///
/// This never fails. Kinds without a renderer produce an HTML comment naming
/// the kind, which displays as nothing.
pub fn render_block(block: &Block, options: &RenderOptions) -> Fragment {
    Fragment::new(block.kind(), render_html(block, options))
}

fn render_html(block: &Block, options: &RenderOptions) -> String {
    match block {
        Block::Paragraph(content) => wrap("p", content),

        Block::Heading { level, content } => {
            let tag = format!("h{}", (*level).clamp(1, 3));
            wrap(&tag, content)
        }

        Block::BulletedListItem(content) | Block::NumberedListItem(content) => wrap("li", content),

        Block::Quote(content) => wrap("blockquote", content),

        Block::Code { content, language } => {
            let class = language
                .as_deref()
                .filter(|lang| options.code_language_class && !lang.is_empty())
                .map(|lang| {
                    format!(
                        " class=\"language-{}\"",
                        encode_double_quoted_attribute(lang)
                    )
                })
                .unwrap_or_default();
            format!(
                "<pre><code{}>{}</code></pre>",
                class,
                render_rich_text(content)
            )
        }

        Block::Divider => "<hr />".to_string(),

        Block::Image { source, caption } => render_image(source, caption),

        Block::Callout { icon, content } => format!(
            "<div class=\"{}\">{} {}</div>",
            encode_double_quoted_attribute(&options.callout_class),
            encode_text(icon.as_deref().unwrap_or("")),
            render_rich_text(content)
        ),

        Block::Video { source, caption } => {
            let url = normalize_media_url(source.url());
            frame_figure(&url, &options.media_allow, &plain_text(caption), options)
        }

        Block::Embed { url } => {
            if is_provider_url(url, &options.provider_domains) {
                frame_figure(url, &options.provider_embed_allow, "", options)
            } else {
                let url = normalize_media_url(url);
                frame_figure(&url, &options.media_allow, "", options)
            }
        }

        Block::Bookmark { url, title } => match embeddable_video_url(url) {
            Some(embed) => frame_figure(&embed, &options.media_allow, "", options),
            None => {
                let text = title.as_deref().filter(|t| !t.is_empty()).unwrap_or(url);
                if !is_safe_link(url) {
                    log::debug!("bookmark with unsafe scheme rendered as text: {url:?}");
                    return encode_text(text).into_owned();
                }
                format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(url),
                    encode_text(text)
                )
            }
        },

        Block::Unsupported { kind } => {
            log::debug!("no renderer for block type {kind:?}, emitting placeholder");
            format!("<!-- unsupported block: {} -->", comment_safe(kind))
        }
    }
}

fn wrap(tag: &str, content: &[RichText]) -> String {
    format!("<{tag}>{}</{tag}>", render_rich_text(content))
}

fn figcaption(caption: &str) -> String {
    if caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{}</figcaption>", encode_text(caption))
    }
}

fn render_image(source: &MediaSource, caption: &[RichText]) -> String {
    let caption = plain_text(caption);
    format!(
        "<figure><img src=\"{}\" alt=\"{}\" />{}</figure>",
        encode_double_quoted_attribute(source.url()),
        encode_double_quoted_attribute(&caption),
        figcaption(&caption)
    )
}

fn frame_figure(src: &str, allow: &str, caption: &str, options: &RenderOptions) -> String {
    let loading = if options.lazy_frames {
        " loading=\"lazy\""
    } else {
        ""
    };
    format!(
        "<figure><iframe src=\"{}\" allow=\"{}\" allowfullscreen{}></iframe>{}</figure>",
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(allow),
        loading,
        figcaption(caption)
    )
}

/// Make text safe to place inside an HTML comment
fn comment_safe(text: &str) -> String {
    let mut out = encode_text(text).into_owned();
    while out.contains("--") {
        out = out.replace("--", "-");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotations, BlockKind};
    use pretty_assertions::assert_eq;

    const VIDEO_ALLOW: &str =
        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

    fn render(block: &Block) -> String {
        render_block(block, &RenderOptions::default()).html
    }

    fn text(s: &str) -> Vec<RichText> {
        vec![RichText::plain(s)]
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render(&Block::Paragraph(text("Hello"))), "<p>Hello</p>");
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(render(&Block::Paragraph(vec![])), "<p></p>");
    }

    #[test]
    fn test_headings() {
        for level in 1..=3u8 {
            let block = Block::Heading {
                level,
                content: text("Title"),
            };
            assert_eq!(render(&block), format!("<h{level}>Title</h{level}>"));
        }
    }

    #[test]
    fn test_list_items_are_bare() {
        let bulleted = render_block(&Block::BulletedListItem(text("a")), &RenderOptions::default());
        assert_eq!(bulleted.html, "<li>a</li>");
        assert_eq!(bulleted.kind, BlockKind::BulletedListItem);

        let numbered = render_block(&Block::NumberedListItem(text("b")), &RenderOptions::default());
        assert_eq!(numbered.html, "<li>b</li>");
        assert_eq!(numbered.kind, BlockKind::NumberedListItem);
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            render(&Block::Quote(text("wise words"))),
            "<blockquote>wise words</blockquote>"
        );
    }

    #[test]
    fn test_code_block() {
        let block = Block::Code {
            content: text("let x = 1 < 2;"),
            language: Some("rust".into()),
        };
        assert_eq!(render(&block), "<pre><code>let x = 1 &lt; 2;</code></pre>");

        let options = RenderOptions {
            code_language_class: true,
            ..Default::default()
        };
        assert_eq!(
            render_block(&block, &options).html,
            "<pre><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>"
        );
    }

    #[test]
    fn test_divider() {
        assert_eq!(render(&Block::Divider), "<hr />");
    }

    #[test]
    fn test_image_with_caption() {
        let block = Block::Image {
            source: MediaSource::External("https://img.example/a.png".into()),
            caption: vec![RichText::plain("A "), RichText::plain("cat")],
        };
        assert_eq!(
            render(&block),
            "<figure><img src=\"https://img.example/a.png\" alt=\"A cat\" />\
             <figcaption>A cat</figcaption></figure>"
        );
    }

    #[test]
    fn test_hosted_image_without_caption() {
        let block = Block::Image {
            source: MediaSource::Hosted("https://files.example/b.png".into()),
            caption: vec![],
        };
        assert_eq!(
            render(&block),
            "<figure><img src=\"https://files.example/b.png\" alt=\"\" /></figure>"
        );
    }

    #[test]
    fn test_callout() {
        let block = Block::Callout {
            icon: Some("💡".into()),
            content: text("Note"),
        };
        assert_eq!(render(&block), "<div class=\"callout\">💡 Note</div>");

        let bare = Block::Callout {
            icon: None,
            content: text("Note"),
        };
        assert_eq!(render(&bare), "<div class=\"callout\"> Note</div>");
    }

    #[test]
    fn test_video_short_link() {
        let block = Block::Video {
            source: MediaSource::External("https://youtu.be/abc123".into()),
            caption: vec![],
        };
        assert_eq!(
            render(&block),
            format!(
                "<figure><iframe src=\"https://www.youtube.com/embed/abc123\" \
                 allow=\"{VIDEO_ALLOW}\" allowfullscreen loading=\"lazy\"></iframe></figure>"
            )
        );
    }

    #[test]
    fn test_hosted_video_with_caption() {
        let block = Block::Video {
            source: MediaSource::Hosted("https://files.example/clip.mp4".into()),
            caption: text("Demo"),
        };
        let html = render(&block);
        assert!(html.contains("src=\"https://files.example/clip.mp4\""));
        assert!(html.ends_with("</iframe><figcaption>Demo</figcaption></figure>"));
    }

    #[test]
    fn test_frames_without_lazy_loading() {
        let options = RenderOptions {
            lazy_frames: false,
            ..Default::default()
        };
        let block = Block::Embed {
            url: "https://example.com/widget".into(),
        };
        let html = render_block(&block, &options).html;
        assert!(!html.contains("loading="));
    }

    #[test]
    fn test_provider_embed_is_not_normalized() {
        let block = Block::Embed {
            url: "https://www.notion.so/Page-abc".into(),
        };
        assert_eq!(
            render(&block),
            "<figure><iframe src=\"https://www.notion.so/Page-abc\" \
             allow=\"clipboard-write; encrypted-media; fullscreen; picture-in-picture\" \
             allowfullscreen loading=\"lazy\"></iframe></figure>"
        );
    }

    #[test]
    fn test_embed_video_is_normalized() {
        let block = Block::Embed {
            url: "https://www.youtube.com/watch?v=xyz".into(),
        };
        assert!(render(&block).contains("src=\"https://www.youtube.com/embed/xyz\""));
    }

    #[test]
    fn test_embed_other_url_passes_through() {
        let block = Block::Embed {
            url: "https://codepen.io/pen/1".into(),
        };
        let html = render(&block);
        assert!(html.contains("src=\"https://codepen.io/pen/1\""));
        assert!(html.contains(VIDEO_ALLOW));
    }

    #[test]
    fn test_bookmark_video_becomes_frame() {
        let block = Block::Bookmark {
            url: "https://youtu.be/abc123".into(),
            title: Some("ignored".into()),
        };
        let html = render(&block);
        assert!(html.starts_with("<figure><iframe src=\"https://www.youtube.com/embed/abc123\""));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_bookmark_link() {
        let titled = Block::Bookmark {
            url: "https://example.com".into(),
            title: Some("Example & Co".into()),
        };
        assert_eq!(
            render(&titled),
            "<a href=\"https://example.com\">Example &amp; Co</a>"
        );

        let untitled = Block::Bookmark {
            url: "https://example.com".into(),
            title: None,
        };
        assert_eq!(
            render(&untitled),
            "<a href=\"https://example.com\">https://example.com</a>"
        );
    }

    #[test]
    fn test_bookmark_with_unsafe_scheme_is_text() {
        let block = Block::Bookmark {
            url: "javascript:alert(1)".into(),
            title: Some("Click <me>".into()),
        };
        assert_eq!(render(&block), "Click &lt;me&gt;");

        let untitled = Block::Bookmark {
            url: " java\tscript:alert(1)".into(),
            title: None,
        };
        assert!(!render(&untitled).contains("<a"));
    }

    #[test]
    fn test_bookmark_on_video_host_without_id_is_link() {
        let block = Block::Bookmark {
            url: "https://www.youtube.com/@channel".into(),
            title: None,
        };
        assert!(render(&block).starts_with("<a href="));
    }

    #[test]
    fn test_unsupported_kind_placeholder() {
        let fragment = render_block(
            &Block::Unsupported {
                kind: "toggle".into(),
            },
            &RenderOptions::default(),
        );
        assert_eq!(fragment.html, "<!-- unsupported block: toggle -->");
        assert_eq!(fragment.kind, BlockKind::Other("toggle".into()));
    }

    #[test]
    fn test_placeholder_cannot_close_comment() {
        let html = render(&Block::Unsupported {
            kind: "x --><script>".into(),
        });
        assert_eq!(html, "<!-- unsupported block: x -&gt;&lt;script&gt; -->");
    }

    #[test]
    fn test_every_kind_renders() {
        let bold = Annotations {
            bold: true,
            ..Default::default()
        };
        let blocks = vec![
            Block::Paragraph(vec![RichText::styled("p", bold)]),
            Block::Heading {
                level: 7,
                content: text("h"),
            },
            Block::BulletedListItem(vec![]),
            Block::NumberedListItem(vec![]),
            Block::Quote(vec![]),
            Block::Code {
                content: vec![],
                language: None,
            },
            Block::Divider,
            Block::Image {
                source: MediaSource::Hosted(String::new()),
                caption: vec![],
            },
            Block::Callout {
                icon: None,
                content: vec![],
            },
            Block::Video {
                source: MediaSource::External("::::".into()),
                caption: vec![],
            },
            Block::Embed { url: String::new() },
            Block::Bookmark {
                url: String::new(),
                title: None,
            },
            Block::Unsupported {
                kind: String::new(),
            },
        ];
        for block in &blocks {
            let fragment = render_block(block, &RenderOptions::default());
            assert_eq!(fragment.kind, block.kind());
        }
        assert_eq!(render(&blocks[1]), "<h3>h</h3>");
    }
}
