//! Content loader - reads post documents from the posts directory

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Caller, FrontMatter, Post};
use crate::Blog;

/// Loads posts from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load every readable post, newest first.
    ///
    /// Documents that fail to parse are logged and skipped.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));

        Ok(posts)
    }

    /// Find a single post by slug
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.load_posts()?.into_iter().find(|p| p.slug == slug))
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let document = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&document)?;

        let file_modified = fs::metadata(path)
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);

        let pub_date = fm
            .parse_pub_date()?
            .unwrap_or_else(|| file_modified.unwrap_or_else(Utc::now));
        let last_modified = fm.parse_last_modified()?.unwrap_or(pub_date);

        let file_stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let caller = Caller {
            name: fm.author.clone().unwrap_or_default(),
            authenticated: false,
        };
        let mut post = Post::new_at(&caller, pub_date);
        if let Some(id) = fm.id {
            post.id = id;
        }
        post.title = fm.title.unwrap_or_else(|| file_stem.clone());
        post.slug = fm.slug.unwrap_or(file_stem);
        post.excerpt = fm.excerpt.unwrap_or_default();
        post.content = body.trim_end_matches(['\n', '\r']).to_string();
        post.last_modified = last_modified;
        post.is_published = fm.is_published;
        post.categories = fm.categories;
        post.comments = fm.comments;
        post.set_overrides(fm.seo_description, fm.hero_image_src, fm.hero_image_alt);

        Ok(post)
    }

    /// Path a post with `slug` is stored at
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.blog.posts_dir.join(format!("{}.html", slug))
    }

    /// Write a post document, refusing to overwrite an existing one
    pub fn create_post(&self, post: &Post) -> Result<PathBuf> {
        if post.slug.is_empty() {
            anyhow::bail!("Post has no slug");
        }

        let path = self.post_path(&post.slug);
        if path.exists() {
            anyhow::bail!("File already exists: {:?}", path);
        }

        fs::create_dir_all(&self.blog.posts_dir)?;
        let document = FrontMatter::from_post(post).to_document(&post.content)?;
        fs::write(&path, document).with_context(|| format!("Failed to write {:?}", path))?;

        tracing::debug!("Wrote post {} to {:?}", post.id, path);
        Ok(path)
    }
}

/// Check if a file is a post document
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "html" || e == "htm")
        .unwrap_or(false)
}
