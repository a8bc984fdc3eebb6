//! Content module - posts, comments, and the display pipeline

mod frontmatter;
pub mod loader;
pub mod markup;
mod metadata;
mod post;
mod render;
mod visibility;

pub use frontmatter::{ContentError, FrontMatter};
pub use metadata::{DerivedField, FieldState, DESCRIPTION_MARKER, HERO_IMAGE_MARKER};
pub use post::{Caller, Comment, Post, DEFAULT_CONTENT, DEFAULT_TITLE};
pub use render::{expand_shortcodes, video_embed, ContentRenderer};
pub use visibility::CommentPolicy;
