//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Default SEO description (`blog:description`)
    pub description: String,
    /// Default hero image (`blog:image`)
    pub image: String,

    // URL
    /// Public base URL, used when no request origin is known
    pub url: String,
    /// Virtual application root
    pub root: String,
    /// Content-delivery origin for post assets (`blog:cdnUrl`)
    pub cdn_url: String,

    // Directory
    pub posts_dir: String,

    // Comments
    pub days_to_comment: i64,
    pub moderate_comments: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "MiniBlog".to_string(),
            description: String::new(),
            image: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            cdn_url: String::new(),

            posts_dir: "posts".to_string(),

            days_to_comment: 10,
            moderate_comments: true,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Look up a setting by its `blog:*` key.
    ///
    /// Unknown keys fall through to the `extra` map; only scalar values
    /// are returned from there.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "blog:title" => Some(self.title.clone()),
            "blog:description" => Some(self.description.clone()),
            "blog:image" => Some(self.image.clone()),
            "blog:cdnUrl" => Some(self.cdn_url.clone()),
            "blog:daysToComment" => Some(self.days_to_comment.to_string()),
            "blog:moderateComments" => Some(self.moderate_comments.to_string()),
            _ => match self.extra.get(key)? {
                serde_yaml::Value::String(s) => Some(s.clone()),
                serde_yaml::Value::Number(n) => Some(n.to_string()),
                serde_yaml::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            },
        }
    }

    /// Like [`SiteConfig::get`], but a missing key becomes an empty string
    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}
