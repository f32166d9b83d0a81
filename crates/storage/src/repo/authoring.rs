use chrono::Utc;
use domain::{slugify, NewPost};

use crate::Db;

impl Db {
    pub async fn create_author(&self, username: &str) -> anyhow::Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO authors (username) VALUES (?)
            ON CONFLICT(username) DO UPDATE SET username = excluded.username
            RETURNING id
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Inserts the post and links its tags, creating missing tags by slug.
    pub async fn create_post(&self, post: &NewPost) -> anyhow::Result<i64> {
        let now = Utc::now().naive_utc();
        let mut tx = self.pool.begin().await?;

        let post_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (title, slug, author_id, body, publish, created, updated, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(post.author_id)
        .bind(&post.body)
        .bind(post.publish)
        .bind(now)
        .bind(now)
        .bind(post.status.code())
        .fetch_one(&mut *tx)
        .await?;

        for name in &post.tags {
            let slug = slugify(name);
            if slug.is_empty() {
                continue;
            }
            let tag_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO tags (name, slug) VALUES (?, ?)
                ON CONFLICT(slug) DO UPDATE SET name = tags.name
                RETURNING id
                "#,
            )
            .bind(name.trim())
            .bind(&slug)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(post_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::debug!(post_id, slug = %post.slug, "post created");
        Ok(post_id)
    }
}
