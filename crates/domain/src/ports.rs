use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Comment, NewComment, Post, Tag};

/// Read side of the blog plus comment creation. Only published posts and
/// active comments are ever returned.
#[async_trait]
pub trait BlogRepo: Send + Sync {
    async fn find_tag(&self, slug: &str) -> anyhow::Result<Option<Tag>>;

    async fn count_published(&self, tag_id: Option<i64>) -> anyhow::Result<i64>;

    /// Newest first.
    async fn list_published(
        &self,
        tag_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Post>>;

    /// `None` unless exactly one published post matches.
    async fn find_published_by_date(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> anyhow::Result<Option<Post>>;

    async fn find_published(&self, id: i64) -> anyhow::Result<Option<Post>>;

    /// Oldest first.
    async fn active_comments(&self, post_id: i64) -> anyhow::Result<Vec<Comment>>;

    async fn similar_posts(&self, post_id: i64, limit: i64) -> anyhow::Result<Vec<Post>>;

    async fn insert_comment(&self, comment: NewComment) -> anyhow::Result<Comment>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: Vec<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()>;
}
