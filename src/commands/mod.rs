//! CLI subcommands

pub mod comments;
pub mod list;
pub mod meta;
pub mod new;
pub mod render;

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::Blog;

/// Load the post with `slug` or fail with a readable message
pub(crate) fn require_post(blog: &Blog, slug: &str) -> Result<Post> {
    match ContentLoader::new(blog).find_by_slug(slug)? {
        Some(post) => Ok(post),
        None => anyhow::bail!("No post with slug '{}' in {:?}", slug, blog.posts_dir),
    }
}
