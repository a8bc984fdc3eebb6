//! miniblog-rs: content rendering and metadata derivation for a minimal blog
//!
//! Posts carry raw authored markup. This crate turns that markup into display
//! HTML (video shortcodes, CDN image paths), derives SEO and hero-image
//! metadata from it, and decides comment visibility.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{CommentPolicy, ContentRenderer};

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post documents
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a blog rooted at `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a blog with an already-built configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Renderer bound to the configured CDN origin
    pub fn renderer(&self) -> ContentRenderer {
        ContentRenderer::from_config(&self.config)
    }

    /// Comment policy from the configured window and moderation flag
    pub fn comment_policy(&self) -> CommentPolicy {
        CommentPolicy::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("posts"));
        assert_eq!(blog.renderer().cdn_url(), "");
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "cdn_url: https://cdn.example\ndays_to_comment: 3\nposts_dir: content\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("content"));
        assert_eq!(blog.renderer().cdn_url(), "https://cdn.example");
        assert_eq!(blog.comment_policy().days_to_comment, 3);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "days_to_comment: [nope\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
