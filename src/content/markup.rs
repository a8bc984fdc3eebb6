//! Tolerant markup extraction
//!
//! Post content is free text with HTML mixed in. It is never guaranteed to be
//! well-formed, so everything here goes through an HTML5 parser that recovers
//! from broken input instead of failing. A query that cannot be answered
//! simply yields no match.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use std::borrow::Cow;
use std::collections::HashMap;

lazy_static! {
    static ref NOSCRIPT_TAG: Regex = Regex::new(r"(?i)</?noscript\b[^>]*>").unwrap();
}

/// Predicate of the form `tag[attribute=value]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementQuery<'a> {
    pub tag: &'a str,
    pub attribute: &'a str,
    pub value: &'a str,
}

impl<'a> ElementQuery<'a> {
    pub const fn new(tag: &'a str, attribute: &'a str, value: &'a str) -> Self {
        Self {
            tag,
            attribute,
            value,
        }
    }

    fn matches(&self, element: &scraper::node::Element) -> bool {
        element.attr(self.attribute) == Some(self.value)
    }
}

/// An element found in markup, detached from the parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl Element {
    /// Read an attribute, falling back to `default` when it is absent
    pub fn attr_or(&self, name: &str, default: &str) -> String {
        get_attribute(self, name, default)
    }
}

/// Find the first element in document order that matches `query`.
///
/// Returns `None` for unparsable fragments and for tag names that are not
/// valid selectors.
pub fn find_first(markup: &str, query: &ElementQuery<'_>) -> Option<Element> {
    if markup.is_empty() {
        return None;
    }

    let selector = Selector::parse(query.tag).ok()?;
    let document = Html::parse_document(&unwrap_noscript(markup));

    document
        .select(&selector)
        .find(|el| query.matches(el.value()))
        .map(|el| {
            let value = el.value();
            Element {
                name: value.name().to_string(),
                attributes: value
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        })
}

/// Drop `<noscript>` wrappers so their children parse as elements.
///
/// The parser runs with scripting enabled and would otherwise keep noscript
/// content as raw text, hiding lazy-load fallback images.
fn unwrap_noscript(markup: &str) -> Cow<'_, str> {
    NOSCRIPT_TAG.replace_all(markup, "")
}

/// Read attribute `name` from `element`, or `default` if it is missing
pub fn get_attribute(element: &Element, name: &str, default: &str) -> String {
    element
        .attributes
        .get(name)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}
