//! Post and Comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metadata::DerivedField;
use super::render::ContentRenderer;
use crate::config::SiteConfig;
use crate::helpers::{full_url_for, url_for, RequestOrigin};

/// Placeholder title for freshly created posts
pub const DEFAULT_TITLE: &str = "My new post";

/// Placeholder content for freshly created posts
pub const DEFAULT_CONTENT: &str = "the content";

/// Identity of whoever is making the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub name: String,
    pub authenticated: bool,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authenticated: true,
        }
    }
}

/// A reader comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "Utc::now")]
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub is_approved: bool,
}

impl Comment {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            pub_date: Utc::now(),
            is_approved: false,
        }
    }
}

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Unique identifier, stable for the post's lifetime
    pub id: String,

    pub title: String,

    pub author: String,

    /// URL-friendly name
    pub slug: String,

    pub excerpt: String,

    /// Raw authored markup
    pub content: String,

    pub(crate) seo_description: DerivedField,
    pub(crate) hero_image_src: DerivedField,
    pub(crate) hero_image_alt: DerivedField,

    /// Publication date
    pub pub_date: DateTime<Utc>,

    pub last_modified: DateTime<Utc>,

    pub is_published: bool,

    pub categories: Vec<String>,

    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post authored by `caller`
    pub fn new(caller: &Caller) -> Self {
        Self::new_at(caller, Utc::now())
    }

    /// Create a new post authored by `caller`, stamped with `now`
    pub fn new_at(caller: &Caller, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            author: caller.name.clone(),
            slug: String::new(),
            excerpt: String::new(),
            content: DEFAULT_CONTENT.to_string(),
            seo_description: DerivedField::new(),
            hero_image_src: DerivedField::new(),
            hero_image_alt: DerivedField::new(),
            pub_date: now,
            last_modified: now,
            is_published: true,
            categories: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Relative URL of the post, e.g. `/post/hello-world`
    pub fn url(&self, config: &SiteConfig) -> String {
        url_for(config, &format!("post/{}", self.slug))
    }

    /// Absolute URL of the post.
    ///
    /// The scheme and host come from the current request when known,
    /// otherwise from the configured site URL.
    pub fn absolute_url(&self, config: &SiteConfig, origin: Option<&RequestOrigin>) -> String {
        let path = format!("post/{}", self.slug);
        match origin {
            Some(origin) => origin.absolute(&url_for(config, &path)),
            None => full_url_for(config, &path),
        }
    }

    /// Display HTML for the post content
    pub fn html_content(&self, renderer: &ContentRenderer) -> String {
        renderer.render(&self.content)
    }

    /// Set all three metadata override slots from optional values.
    /// `None` leaves the slot unset.
    pub fn set_overrides(
        &mut self,
        seo_description: Option<String>,
        hero_image_src: Option<String>,
        hero_image_alt: Option<String>,
    ) {
        self.seo_description = DerivedField::with_override(seo_description);
        self.hero_image_src = DerivedField::with_override(hero_image_src);
        self.hero_image_alt = DerivedField::with_override(hero_image_alt);
    }

    /// Explicit overrides only, in the order description, image src, image alt
    pub fn overrides(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            self.seo_description.override_value(),
            self.hero_image_src.override_value(),
            self.hero_image_alt.override_value(),
        )
    }
}
