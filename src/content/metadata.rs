//! Presentation metadata derived from post content
//!
//! SEO description, hero image source and hero image alt text are each backed
//! by a [`DerivedField`]. An explicit override always wins. Otherwise the value
//! is extracted from the post's markup on first read, falling back to a
//! site-wide default, and memoized for the lifetime of the instance.

use std::sync::OnceLock;

use super::markup::{find_first, ElementQuery};
use super::Post;
use crate::config::SiteConfig;

/// Marker carrying the SEO description in its `content` attribute
pub const DESCRIPTION_MARKER: ElementQuery<'static> =
    ElementQuery::new("meta", "itemprop", "description");

/// Marker for the hero image; `src` and `alt` are read from it
pub const HERO_IMAGE_MARKER: ElementQuery<'static> =
    ElementQuery::new("img", "itemprop", "image");

/// Observable state of a [`DerivedField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState<'a> {
    /// Neither overridden nor computed yet
    Unset,
    /// Explicitly set by an author, possibly to an empty string
    Overridden(&'a str),
    /// Derived from content and memoized
    Computed(&'a str),
}

/// A value that is either explicitly overridden or lazily derived once.
///
/// The override and the memoized value live in separate slots, so setting
/// an override after the value has been computed still takes effect.
#[derive(Debug, Clone, Default)]
pub struct DerivedField {
    overridden: Option<String>,
    computed: OnceLock<String>,
}

impl DerivedField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh field, overridden only when `value` is `Some`
    pub fn with_override(value: Option<String>) -> Self {
        Self {
            overridden: value,
            computed: OnceLock::new(),
        }
    }

    pub fn state(&self) -> FieldState<'_> {
        if let Some(value) = &self.overridden {
            FieldState::Overridden(value)
        } else if let Some(value) = self.computed.get() {
            FieldState::Computed(value)
        } else {
            FieldState::Unset
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }

    pub fn override_value(&self) -> Option<&str> {
        self.overridden.as_deref()
    }

    pub fn set_override(&mut self, value: impl Into<String>) {
        self.overridden = Some(value.into());
    }

    /// Drop the override so reads go back to the derived value
    pub fn clear_override(&mut self) {
        self.overridden = None;
    }

    /// Return the override, or derive the value with `derive` on first use.
    ///
    /// Concurrent first reads wait for a single `derive` to finish.
    pub fn get_or_derive<F>(&self, derive: F) -> &str
    where
        F: FnOnce() -> String,
    {
        if let Some(value) = &self.overridden {
            return value;
        }
        self.computed.get_or_init(derive)
    }
}

impl Post {
    /// SEO description: override, then `<meta itemprop="description">`,
    /// then `blog:description`.
    pub fn seo_description(&self, config: &SiteConfig) -> &str {
        self.seo_description.get_or_derive(|| {
            derive_or_default(&self.content, &DESCRIPTION_MARKER, "content", || {
                config.get_or_empty("blog:description")
            })
        })
    }

    /// Hero image source: override, then `<img itemprop="image">`'s `src`,
    /// then `blog:image`.
    pub fn hero_image_src(&self, config: &SiteConfig) -> &str {
        self.hero_image_src.get_or_derive(|| {
            derive_or_default(&self.content, &HERO_IMAGE_MARKER, "src", || {
                config.get_or_empty("blog:image")
            })
        })
    }

    /// Hero image alt text: override, then the hero image's `alt`.
    /// There is no site-wide default for this one.
    pub fn hero_image_alt(&self) -> &str {
        self.hero_image_alt.get_or_derive(|| {
            derive_or_default(&self.content, &HERO_IMAGE_MARKER, "alt", String::new)
        })
    }

    /// Current state of the description, image src and image alt fields
    pub fn metadata_state(&self) -> [FieldState<'_>; 3] {
        [
            self.seo_description.state(),
            self.hero_image_src.state(),
            self.hero_image_alt.state(),
        ]
    }

    pub fn set_seo_description(&mut self, value: impl Into<String>) {
        self.seo_description.set_override(value);
    }

    pub fn set_hero_image_src(&mut self, value: impl Into<String>) {
        self.hero_image_src.set_override(value);
    }

    pub fn set_hero_image_alt(&mut self, value: impl Into<String>) {
        self.hero_image_alt.set_override(value);
    }
}

/// Attribute of the first marker element, or `fallback()` if there is none.
///
/// A matching element without the attribute yields an empty string, not the
/// fallback.
fn derive_or_default<F>(
    content: &str,
    marker: &ElementQuery<'_>,
    attribute: &str,
    fallback: F,
) -> String
where
    F: FnOnce() -> String,
{
    match find_first(content, marker) {
        Some(element) => element.attr_or(attribute, ""),
        None => {
            tracing::debug!(
                "No {}[{}={}] in content, using site default",
                marker.tag,
                marker.attribute,
                marker.value
            );
            fallback()
        }
    }
}
