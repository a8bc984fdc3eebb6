//! URL helper functions

use crate::config::SiteConfig;

/// Scheme and authority of the request being served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    /// Host, with port when it is not the default
    pub authority: String,
}

impl RequestOrigin {
    pub fn new(scheme: impl Into<String>, authority: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
        }
    }

    /// Join an absolute path onto this origin
    pub fn absolute(&self, path: &str) -> String {
        format!(
            "{}://{}/{}",
            self.scheme,
            self.authority.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "post/hello") // -> "/blog/post/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the configured domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "post/hello") // -> "https://example.com/blog/post/hello"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}
