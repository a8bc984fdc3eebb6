//! Print the presentation metadata of a post

use anyhow::Result;
use serde::Serialize;

use super::require_post;
use crate::content::Post;
use crate::helpers::RequestOrigin;
use crate::Blog;

/// Display metadata for a post page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub author: String,
    pub url: String,
    pub absolute_url: String,
    pub seo_description: String,
    pub hero_image_src: String,
    pub hero_image_alt: String,
}

impl PostMeta {
    pub fn from_post(blog: &Blog, post: &Post, origin: Option<&RequestOrigin>) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            url: post.url(&blog.config),
            absolute_url: post.absolute_url(&blog.config, origin),
            seo_description: post.seo_description(&blog.config).to_string(),
            hero_image_src: post.hero_image_src(&blog.config).to_string(),
            hero_image_alt: post.hero_image_alt().to_string(),
        }
    }
}

/// Run the meta command
pub fn run(blog: &Blog, slug: &str, origin: Option<&RequestOrigin>) -> Result<()> {
    let post = require_post(blog, slug)?;
    let meta = PostMeta::from_post(blog, &post, origin);
    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}
