mod authoring;
mod comments;
mod posts;

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{BlogRepo, Comment, NewComment, Post, Tag};

use crate::Db;

#[async_trait]
impl BlogRepo for Db {
    async fn find_tag(&self, slug: &str) -> anyhow::Result<Option<Tag>> {
        self.get_tag_by_slug(slug).await
    }

    async fn count_published(&self, tag_id: Option<i64>) -> anyhow::Result<i64> {
        self.count_published_posts(tag_id).await
    }

    async fn list_published(
        &self,
        tag_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Post>> {
        self.list_published_posts(tag_id, limit, offset).await
    }

    async fn find_published_by_date(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> anyhow::Result<Option<Post>> {
        self.get_published_post_by_date(date, slug).await
    }

    async fn find_published(&self, id: i64) -> anyhow::Result<Option<Post>> {
        self.get_published_post(id).await
    }

    async fn active_comments(&self, post_id: i64) -> anyhow::Result<Vec<Comment>> {
        self.list_active_comments(post_id).await
    }

    async fn similar_posts(&self, post_id: i64, limit: i64) -> anyhow::Result<Vec<Post>> {
        self.list_similar_posts(post_id, limit).await
    }

    async fn insert_comment(&self, comment: NewComment) -> anyhow::Result<Comment> {
        self.create_comment(comment).await
    }
}
