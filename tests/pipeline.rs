//! End-to-end checks of the rendering, metadata and comment pipeline

use chrono::{Duration, Utc};
use miniblog_rs::config::SiteConfig;
use miniblog_rs::content::{Caller, Comment, CommentPolicy, ContentRenderer, FieldState, Post};

fn config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.description = "Configured description".to_string();
    config.image = "/img/site.png".to_string();
    config.cdn_url = "https://cdn.example".to_string();
    config
}

fn post_with(content: &str) -> Post {
    let mut post = Post::new(&Caller::authenticated("author"));
    post.content = content.to_string();
    post
}

#[test]
fn seo_description_without_marker_uses_configured_default() {
    let config = config();
    let contents = [
        "",
        "plain words",
        "<p>para</p>",
        r#"<meta name="description" content="x">"#,
    ];
    for content in contents {
        let post = post_with(content);
        assert_eq!(post.seo_description(&config), "Configured description");
    }
}

#[test]
fn seo_description_is_computed_once() {
    let config = config();
    let mut post = post_with(r#"<meta itemprop="description" content="X">"#);
    assert_eq!(post.metadata_state()[0], FieldState::Unset);
    assert_eq!(post.seo_description(&config), "X");
    assert_eq!(post.metadata_state()[0], FieldState::Computed("X"));

    post.content = r#"<meta itemprop="description" content="Y">"#.to_string();
    assert_eq!(post.seo_description(&config), "X");
}

#[test]
fn empty_override_beats_marker_and_default() {
    let config = config();
    let mut post = post_with(r#"<meta itemprop="description" content="X">"#);
    post.set_seo_description("");
    assert_eq!(post.seo_description(&config), "");
    assert_eq!(post.metadata_state()[0], FieldState::Overridden(""));
}

#[test]
fn clones_memoize_independently() {
    let config = config();
    let mut original = post_with(r#"<img itemprop="image" src="/posts/a.png">"#);
    let copy = original.clone();

    assert_eq!(original.hero_image_src(&config), "/posts/a.png");
    original.set_hero_image_src("/override.png");

    assert_eq!(copy.hero_image_src(&config), "/posts/a.png");
    assert_eq!(original.hero_image_src(&config), "/override.png");
}

#[test]
fn metadata_derivation_leaves_content_untouched() {
    let config = config();
    let content = r#"<img itemprop="image" src="/posts/a.png" alt="A">"#;
    let post = post_with(content);
    let _ = post.hero_image_src(&config);
    let _ = post.hero_image_alt();
    let _ = post.html_content(&ContentRenderer::from_config(&config));
    assert_eq!(post.content, content);
}

#[test]
fn render_youtube_shortcode() {
    let html = ContentRenderer::from_config(&config()).render("[youtube:abc123]");
    assert!(html.contains("<iframe"));
    assert_eq!(html.matches("abc123").count(), 1);
}

#[test]
fn render_rewrites_only_post_images() {
    let renderer = ContentRenderer::new("https://cdn.example");
    assert_eq!(
        renderer.render(r#"<img src="/images/posts/a.png">"#),
        r#"<img src="https://cdn.example/posts/a.png">"#
    );
    assert_eq!(
        renderer.render(r#"<img src="/images/other/a.png">"#),
        r#"<img src="/images/other/a.png">"#
    );
}

#[test]
fn render_is_stable_across_calls() {
    let renderer = ContentRenderer::from_config(&config());
    let post = post_with(r#"<p>[youtube:v]</p><img alt="a" src="/x/posts/y.jpg">"#);
    let first = post.html_content(&renderer);
    let second = post.html_content(&renderer);
    assert_eq!(first, second);
}

#[test]
fn comment_window() {
    let policy = CommentPolicy {
        days_to_comment: 30,
        moderate_comments: true,
    };
    let anonymous = Caller::anonymous();
    let admin = Caller::authenticated("admin");

    let mut post = post_with("x");
    post.pub_date = Utc::now() - Duration::days(1);
    assert!(post.are_comments_open(&policy, &anonymous));

    post.pub_date = Utc::now() - Duration::days(40);
    assert!(!post.are_comments_open(&policy, &anonymous));
    assert!(post.are_comments_open(&policy, &admin));
}

#[test]
fn approved_comment_count() {
    let mut post = post_with("x");
    for approved in [true, true, false] {
        let mut comment = Comment::new("reader", "hi");
        comment.is_approved = approved;
        post.comments.push(comment);
    }

    let moderated = CommentPolicy {
        days_to_comment: 30,
        moderate_comments: true,
    };
    let open = CommentPolicy {
        moderate_comments: false,
        ..moderated
    };

    assert_eq!(post.count_approved_comments(&moderated, &Caller::anonymous()), 2);
    assert_eq!(
        post.count_approved_comments(&moderated, &Caller::authenticated("admin")),
        3
    );
    assert_eq!(post.count_approved_comments(&open, &Caller::anonymous()), 3);
}

#[test]
fn new_post_falls_back_to_site_defaults() {
    let config = config();
    let post = Post::new(&Caller::anonymous());
    assert_eq!(post.overrides(), (None, None, None));
    assert_eq!(post.seo_description(&config), "Configured description");
    assert_eq!(post.hero_image_src(&config), "/img/site.png");
    assert_eq!(post.hero_image_alt(), "");
    assert_eq!(post.overrides(), (None, None, None));
}
