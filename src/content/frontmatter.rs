//! Post documents: YAML front-matter followed by raw content

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::{Comment, Post};

/// Errors raised while reading a post document
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("document has no front-matter block")]
    MissingFrontMatter,

    #[error("invalid front-matter: {0}")]
    InvalidFrontMatter(#[from] serde_yaml::Error),

    #[error("unrecognized date: {0}")]
    InvalidDate(String),
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(s) => vec![s],
        StringOrVec::Many(v) => v,
        StringOrVec::Nothing(()) => Vec::new(),
    })
}

fn default_published() -> bool {
    true
}

/// Front-matter of a post document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(deserialize_with = "string_or_vec")]
    pub categories: Vec<String>,
    pub comments: Vec<Comment>,

    /// Present, even if empty, means the author overrode the derived value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_alt: Option<String>,
}

impl FrontMatter {
    /// Split a document into front-matter and the remaining content
    pub fn parse(document: &str) -> Result<(Self, &str), ContentError> {
        let document = document.trim_start_matches('\u{feff}').trim_start();
        let rest = document
            .strip_prefix("---")
            .ok_or(ContentError::MissingFrontMatter)?;
        let rest = rest.trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end = rest.find("\n---").ok_or(ContentError::MissingFrontMatter)?;
            (&rest[..end], &rest[end + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            let fm = FrontMatter {
                is_published: true,
                ..FrontMatter::default()
            };
            return Ok((fm, remaining));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, remaining))
    }

    /// Capture everything persistable about `post`.
    ///
    /// Metadata fields are written only when explicitly overridden.
    pub fn from_post(post: &Post) -> Self {
        let (seo_description, hero_image_src, hero_image_alt) = post.overrides();
        Self {
            id: Some(post.id.clone()),
            title: Some(post.title.clone()),
            author: Some(post.author.clone()),
            slug: Some(post.slug.clone()),
            excerpt: (!post.excerpt.is_empty()).then(|| post.excerpt.clone()),
            pub_date: Some(post.pub_date.to_rfc3339()),
            last_modified: Some(post.last_modified.to_rfc3339()),
            is_published: post.is_published,
            categories: post.categories.clone(),
            comments: post.comments.clone(),
            seo_description: seo_description.map(str::to_string),
            hero_image_src: hero_image_src.map(str::to_string),
            hero_image_alt: hero_image_alt.map(str::to_string),
        }
    }

    /// Render a complete post document
    pub fn to_document(&self, content: &str) -> Result<String, ContentError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}---\n{}\n", yaml, content))
    }

    pub fn parse_pub_date(&self) -> Result<Option<DateTime<Utc>>, ContentError> {
        self.pub_date.as_deref().map(parse_date_string).transpose()
    }

    pub fn parse_last_modified(&self) -> Result<Option<DateTime<Utc>>, ContentError> {
        self.last_modified
            .as_deref()
            .map(parse_date_string)
            .transpose()
    }
}

/// Parse a date string in various formats, treating naive values as UTC
fn parse_date_string(s: &str) -> Result<DateTime<Utc>, ContentError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Some(dt) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc());
        }
    }

    Err(ContentError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Caller;
    use chrono::TimeZone;

    #[test]
    fn test_parse_document() {
        let doc = r#"---
title: Hello World
slug: hello-world
pubDate: 2024-01-15 10:30:00
categories:
  - rust
  - web
seoDescription: ""
comments:
  - author: Ann
    content: First!
    isApproved: true
---
<p>This is the content.</p>
"#;
        let (fm, body) = FrontMatter::parse(doc).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.slug.as_deref(), Some("hello-world"));
        assert_eq!(fm.categories, vec!["rust", "web"]);
        assert_eq!(fm.seo_description.as_deref(), Some(""));
        assert_eq!(fm.hero_image_src, None);
        assert!(fm.is_published);
        assert_eq!(fm.comments.len(), 1);
        assert!(fm.comments[0].is_approved);
        assert_eq!(body.trim(), "<p>This is the content.</p>");
        assert_eq!(
            fm.parse_pub_date().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_single_string_category() {
        let doc = "---\ntitle: T\ncategories: news\n---\nbody";
        let (fm, _) = FrontMatter::parse(doc).unwrap();
        assert_eq!(fm.categories, vec!["news"]);
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(matches!(
            FrontMatter::parse("<p>just html</p>"),
            Err(ContentError::MissingFrontMatter)
        ));
        assert!(matches!(
            FrontMatter::parse("---\ntitle: never closed\n"),
            Err(ContentError::MissingFrontMatter)
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        let doc = "---\ntitle: [unclosed\n---\nbody";
        assert!(matches!(
            FrontMatter::parse(doc),
            Err(ContentError::InvalidFrontMatter(_))
        ));
    }

    #[test]
    fn test_empty_front_matter() {
        let (fm, body) = FrontMatter::parse("---\n---\nbody").unwrap();
        assert!(fm.title.is_none());
        assert!(fm.is_published);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(
            parse_date_string("2024-01-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_date_string("2024-01-15T10:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
        );
        assert!(matches!(
            parse_date_string("last tuesday"),
            Err(ContentError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_document_keeps_overrides_only() {
        let mut post = Post::new(&Caller::authenticated("ann"));
        post.slug = "x".to_string();
        post.content = r#"<meta itemprop="description" content="derived">"#.to_string();
        post.set_hero_image_alt("");

        let fm = FrontMatter::from_post(&post);
        let doc = fm.to_document(&post.content).unwrap();
        assert!(doc.contains("heroImageAlt: ''"));
        assert!(!doc.contains("seoDescription"));
        assert!(!doc.contains("heroImageSrc"));

        let (parsed, body) = FrontMatter::parse(&doc).unwrap();
        assert_eq!(parsed.id.as_deref(), Some(post.id.as_str()));
        assert_eq!(parsed.hero_image_alt.as_deref(), Some(""));
        assert_eq!(body.trim_end(), post.content);
    }
}
