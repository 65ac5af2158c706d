//! Media URL normalization
//!
//! Rewrites links to a known video platform into the platform's embeddable
//! form. Anything unrecognized passes through unchanged.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

static HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://)?(?:[^/?#@]*@)?([^/?#:@]+)(?::[0-9]*)?")
        .expect("host pattern is valid")
});

static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("scheme pattern is valid")
});

/// Identifier patterns in priority order: watch page, short link, embed link.
///
/// They run against `host + path`, so each is anchored at the host and can
/// only match the path of the URL, never a query value.
static VIDEO_ID_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)^(?:[a-z0-9-]+\.)*youtube\.com/watch\?(?:[^#]*&)?v=([^?&#/]+)"),
        Regex::new(r"(?i)^(?:[a-z0-9-]+\.)*youtu\.be/([^?&#/]+)"),
        Regex::new(r"(?i)^(?:[a-z0-9-]+\.)*youtube\.com/embed/([^?&#/]+)"),
    ]
    .map(|re| re.expect("video id pattern is valid"))
});

/// Link schemes that are safe to emit in `href`
const SAFE_LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Lower-cased host and the remainder after host and port
fn split_host(url: &str) -> Option<(String, &str)> {
    let url = url.trim();
    let caps = HOST.captures(url)?;
    let host = caps.get(1)?.as_str().to_ascii_lowercase();
    let rest = &url[caps.get(0)?.end()..];
    Some((host, rest))
}

/// Lower-cased host of a URL, if one can be found.
///
/// The scheme is optional so that bare `youtu.be/ID` links are recognized.
pub fn url_host(url: &str) -> Option<String> {
    split_host(url).map(|(host, _)| host)
}

/// Whether a link target may be emitted as a clickable `href`.
///
/// Relative targets are allowed. Absolute ones need an http(s), mailto or
/// tel scheme; whitespace and control characters are ignored while reading
/// the scheme, as browsers do.
pub fn is_safe_link(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match SCHEME.captures(&compact).and_then(|caps| caps.get(1)) {
        Some(scheme) => SAFE_LINK_SCHEMES
            .iter()
            .any(|safe| scheme.as_str().eq_ignore_ascii_case(safe)),
        None => true,
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    let domain = domain.trim().trim_start_matches('.').to_ascii_lowercase();
    !domain.is_empty()
        && (host == domain
            || host
                .strip_suffix(domain.as_str())
                .is_some_and(|rest| rest.ends_with('.')))
}

fn is_video_host(host: &str) -> bool {
    host_matches(host, "youtube.com") || host_matches(host, "youtu.be")
}

/// Whether the URL points at one of the given domains or their subdomains
pub fn is_provider_url(url: &str, domains: &[String]) -> bool {
    url_host(url).is_some_and(|host| domains.iter().any(|d| host_matches(&host, d)))
}

/// Canonical embeddable URL for a recognized video link.
///
/// Returns `None` when the host is not the video platform or no identifier
/// pattern matches. Already-embeddable URLs map to themselves.
pub fn embeddable_video_url(url: &str) -> Option<String> {
    let (host, rest) = split_host(url)?;
    if !is_video_host(&host) {
        return None;
    }

    let target = format!("{host}{rest}");
    let id = VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(&target))
        .and_then(|caps| caps.get(1))?;

    let embed = format!("{EMBED_BASE}{}", id.as_str());
    log::trace!("normalized video url {url} -> {embed}");
    Some(embed)
}

/// Normalize a media URL, falling back to the input when nothing matches
pub fn normalize_media_url(url: &str) -> Cow<'_, str> {
    match embeddable_video_url(url) {
        Some(embed) => Cow::Owned(embed),
        None => Cow::Borrowed(url),
    }
}
