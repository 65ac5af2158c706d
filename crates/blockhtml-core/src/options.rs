//! Configuration options for HTML rendering

/// Permissions granted to frames showing video players
pub const MEDIA_FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Permissions granted to frames showing the provider's own pages
pub const PROVIDER_FRAME_ALLOW: &str =
    "clipboard-write; encrypted-media; fullscreen; picture-in-picture";

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Class attribute of the callout container
    pub callout_class: String,

    /// `allow` attribute for video and third-party embed frames
    pub media_allow: String,

    /// `allow` attribute for frames pointing at the provider's domain
    pub provider_embed_allow: String,

    /// Hosts (and their subdomains) treated as the provider's own domain
    pub provider_domains: Vec<String>,

    /// Emit `loading="lazy"` on frames
    pub lazy_frames: bool,

    /// Tag code blocks with `class="language-…"`
    pub code_language_class: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            callout_class: "callout".to_string(),
            media_allow: MEDIA_FRAME_ALLOW.to_string(),
            provider_embed_allow: PROVIDER_FRAME_ALLOW.to_string(),
            provider_domains: vec!["notion.so".to_string()],
            lazy_frames: true,
            code_language_class: false,
        }
    }
}
