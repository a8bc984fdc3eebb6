//! Show comment visibility for a post

use anyhow::Result;

use super::require_post;
use crate::content::{Caller, CommentPolicy, Post};
use crate::Blog;

/// Comment status lines for `post` as `caller` sees them.
///
/// Only authenticated callers are shown the total including unapproved
/// comments.
pub fn summary(post: &Post, policy: &CommentPolicy, caller: &Caller) -> Vec<String> {
    let open = post.are_comments_open(policy, caller);
    let visible = post.count_approved_comments(policy, caller);

    let count = if caller.authenticated {
        format!("  visible comments: {} of {}", visible, post.comments.len())
    } else {
        format!("  visible comments: {}", visible)
    };

    vec![
        post.title.clone(),
        format!("  comments open: {}", if open { "yes" } else { "no" }),
        count,
    ]
}

/// Run the comments command
pub fn run(blog: &Blog, slug: &str, caller: &Caller) -> Result<()> {
    let post = require_post(blog, slug)?;

    for line in summary(&post, &blog.comment_policy(), caller) {
        println!("{}", line);
    }

    Ok(())
}
