//! Display rendering of raw post content
//!
//! Two plain-text substitutions, applied fresh on every call:
//! `[youtube:<id>]` shortcodes become embedded players, and `<img>` tags whose
//! `src` points into a `/posts/` folder are rewritten to the CDN origin.
//! Everything else passes through verbatim.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::SiteConfig;

lazy_static! {
    static ref YOUTUBE_SHORTCODE: Regex = Regex::new(r"\[youtube:(.*?)\]").unwrap();
    static ref IMG_SRC: Regex = Regex::new(r#"<img[^>]*?src="([^"]+)""#).unwrap();
}

/// Path segment marking locally hosted post assets
const POSTS_SEGMENT: &str = "/posts/";

/// Renders stored post content into display HTML
#[derive(Debug, Clone, Default)]
pub struct ContentRenderer {
    cdn_url: String,
}

impl ContentRenderer {
    /// Create a renderer that rewrites post assets to `cdn_url`
    pub fn new(cdn_url: impl Into<String>) -> Self {
        Self {
            cdn_url: cdn_url.into(),
        }
    }

    /// Create from site configuration; a missing `blog:cdnUrl` means an empty origin
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.get_or_empty("blog:cdnUrl"))
    }

    pub fn cdn_url(&self) -> &str {
        &self.cdn_url
    }

    /// Render content for display
    pub fn render(&self, content: &str) -> String {
        let expanded = expand_shortcodes(content);
        self.rewrite_asset_origins(&expanded)
    }

    fn rewrite_asset_origins(&self, html: &str) -> String {
        IMG_SRC
            .replace_all(html, |caps: &Captures| {
                let (tag, src) = match (caps.get(0), caps.get(1)) {
                    (Some(tag), Some(src)) => (tag, src),
                    _ => return caps[0].to_string(),
                };

                let index = match src.as_str().find(POSTS_SEGMENT) {
                    Some(index) => index,
                    None => return tag.as_str().to_string(),
                };

                let rewritten = format!("{}{}", self.cdn_url, &src.as_str()[index..]);
                tracing::debug!("Rewriting {} to {}", src.as_str(), rewritten);

                // Splice only the src value; offsets are relative to the tag
                let whole = tag.as_str();
                let start = src.start() - tag.start();
                let end = src.end() - tag.start();
                format!("{}{}{}", &whole[..start], rewritten, &whole[end..])
            })
            .into_owned()
    }
}

/// Expand every `[youtube:<id>]` shortcode into an embedded player
pub fn expand_shortcodes(content: &str) -> String {
    YOUTUBE_SHORTCODE
        .replace_all(content, |caps: &Captures| video_embed(&caps[1]))
        .into_owned()
}

/// Embeddable player markup for a YouTube video id
pub fn video_embed(id: &str) -> String {
    format!(
        r#"<div class="video"><iframe src="//www.youtube.com/embed/{}?modestbranding=1&amp;theme=light" allowfullscreen></iframe></div>"#,
        id
    )
}
