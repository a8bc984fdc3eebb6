//! Comment visibility policy

use chrono::{DateTime, TimeDelta, Utc};

use super::{Caller, Post};
use crate::config::SiteConfig;

/// Settings that decide who sees which comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPolicy {
    /// Days after publication during which anyone may comment
    pub days_to_comment: i64,
    /// Hide unapproved comments from anonymous readers
    pub moderate_comments: bool,
}

impl Default for CommentPolicy {
    fn default() -> Self {
        Self {
            days_to_comment: 10,
            moderate_comments: true,
        }
    }
}

impl CommentPolicy {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            days_to_comment: config.days_to_comment,
            moderate_comments: config.moderate_comments,
        }
    }

    /// Whether `caller` may comment on `post` right now
    pub fn comments_open(&self, post: &Post, caller: &Caller) -> bool {
        self.comments_open_at(post, caller, Utc::now())
    }

    /// Whether `caller` may comment on `post` at `now`.
    ///
    /// Open while the post is younger than the comment window; always open
    /// for authenticated callers. A window too large to represent never
    /// closes, and one too negative never opens.
    pub fn comments_open_at(&self, post: &Post, caller: &Caller, now: DateTime<Utc>) -> bool {
        if caller.authenticated {
            return true;
        }

        let cutoff = TimeDelta::try_days(self.days_to_comment)
            .and_then(|window| now.checked_sub_signed(window));
        match cutoff {
            Some(cutoff) => post.pub_date > cutoff,
            None => self.days_to_comment > 0,
        }
    }

    /// Number of comments `caller` gets to see
    pub fn visible_comment_count(&self, post: &Post, caller: &Caller) -> usize {
        if self.moderate_comments && !caller.authenticated {
            post.comments.iter().filter(|c| c.is_approved).count()
        } else {
            post.comments.len()
        }
    }
}

impl Post {
    pub fn are_comments_open(&self, policy: &CommentPolicy, caller: &Caller) -> bool {
        policy.comments_open(self, caller)
    }

    pub fn count_approved_comments(&self, policy: &CommentPolicy, caller: &Caller) -> usize {
        policy.visible_comment_count(self, caller)
    }
}
