use chrono::Utc;
use domain::{Comment, NewComment};

use crate::{models::SqlComment, Db};

impl Db {
    pub async fn list_active_comments(&self, post_id: i64) -> anyhow::Result<Vec<Comment>> {
        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT id, post_id, name, email, body, created, updated, active
            FROM comments
            WHERE post_id = ? AND active = TRUE
            ORDER BY created ASC, id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create_comment(&self, c: NewComment) -> anyhow::Result<Comment> {
        let now = Utc::now().naive_utc();

        let row = sqlx::query_as::<_, SqlComment>(
            r#"
            INSERT INTO comments (post_id, name, email, body, created, updated, active)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, post_id, name, email, body, created, updated, active
            "#,
        )
        .bind(c.post_id)
        .bind(&c.name)
        .bind(&c.email)
        .bind(&c.body)
        .bind(now)
        .bind(now)
        .bind(c.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// All comments of a post, moderated or not.
    pub async fn count_comments(&self, post_id: i64) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
