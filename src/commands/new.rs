//! Create a new post

use anyhow::Result;
use std::path::PathBuf;

use crate::content::loader::ContentLoader;
use crate::content::{Caller, Post};
use crate::Blog;

/// Create a new post document authored by `caller`
pub fn create_post(
    blog: &Blog,
    caller: &Caller,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let mut post = Post::new(caller);
    post.title = title.to_string();
    post.slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };

    let path = ContentLoader::new(blog).create_post(&post)?;
    println!("Created: {:?}", path);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_create_post_slugifies_title() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());

        let caller = Caller::authenticated("ann");
        let path = create_post(&blog, &caller, "Hello, World!", None).unwrap();
        assert_eq!(path, blog.posts_dir.join("hello-world.html"));

        let post = ContentLoader::new(&blog).load_post(&path).unwrap();
        assert_eq!(post.title, "Hello, World!");
        assert_eq!(post.author, "ann");
        assert!(post.is_published);
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let caller = Caller::anonymous();

        create_post(&blog, &caller, "Same", Some("same")).unwrap();
        assert!(create_post(&blog, &caller, "Same again", Some("same")).is_err());
    }
}
