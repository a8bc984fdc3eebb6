//! Print the display HTML of a post

use anyhow::Result;

use super::require_post;
use crate::Blog;

/// Render the content of the post with `slug`
pub fn render_post(blog: &Blog, slug: &str) -> Result<String> {
    let post = require_post(blog, slug)?;
    Ok(post.html_content(&blog.renderer()))
}

/// Run the render command
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    println!("{}", render_post(blog, slug)?);
    Ok(())
}
