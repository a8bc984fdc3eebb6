//! List posts

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Caller;
use crate::Blog;

/// List posts, newest first. Unpublished posts are shown only to
/// authenticated callers.
pub fn run(blog: &Blog, caller: &Caller) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let policy = blog.comment_policy();

    let posts: Vec<_> = posts
        .into_iter()
        .filter(|p| p.is_published || caller.authenticated)
        .collect();

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}] ({} comments)",
            post.pub_date.format("%Y-%m-%d"),
            post.title,
            post.url(&blog.config),
            post.count_approved_comments(&policy, caller)
        );
    }

    Ok(())
}
