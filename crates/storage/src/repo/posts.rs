use std::collections::HashMap;

use chrono::NaiveDate;
use domain::{Post, Tag};
use sqlx::{QueryBuilder, Sqlite};

use crate::models::{SqlPost, SqlPostTag, SqlTag, POST_COLUMNS};
use crate::Db;

impl Db {
    pub async fn get_tag_by_slug(&self, slug: &str) -> anyhow::Result<Option<Tag>> {
        let row = sqlx::query_as::<_, SqlTag>("SELECT id, name, slug FROM tags WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    pub async fn count_published_posts(&self, tag_id: Option<i64>) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts p
            WHERE p.status = 'PB'
              AND (? IS NULL OR EXISTS (
                    SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = ?
              ))
            "#,
        )
        .bind(tag_id)
        .bind(tag_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn list_published_posts(
        &self,
        tag_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Post>> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'PB'
              AND (? IS NULL OR EXISTS (
                    SELECT 1 FROM post_tags pt WHERE pt.post_id = p.id AND pt.tag_id = ?
              ))
            ORDER BY p.publish DESC, p.id DESC
            LIMIT ? OFFSET ?
            "#
        );
        let rows = sqlx::query_as::<_, SqlPost>(&sql)
            .bind(tag_id)
            .bind(tag_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        self.attach_tags(rows).await
    }

    pub async fn get_published_post_by_date(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> anyhow::Result<Option<Post>> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'PB' AND p.slug = ? AND date(p.publish) = ?
            LIMIT 2
            "#
        );
        let rows = sqlx::query_as::<_, SqlPost>(&sql)
            .bind(slug)
            .bind(date.format("%Y-%m-%d").to_string())
            .fetch_all(&self.pool)
            .await?;
        if rows.len() != 1 {
            if rows.len() > 1 {
                tracing::warn!(%date, slug, "ambiguous date/slug lookup");
            }
            return Ok(None);
        }
        Ok(self.attach_tags(rows).await?.pop())
    }

    pub async fn get_published_post(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            WHERE p.status = 'PB' AND p.id = ?
            "#
        );
        let row = sqlx::query_as::<_, SqlPost>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(self.attach_tags(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Published posts sharing at least one tag with `post_id`, most shared
    /// tags first, then newest first.
    pub async fn list_similar_posts(&self, post_id: i64, limit: i64) -> anyhow::Result<Vec<Post>> {
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS}, COUNT(pt.tag_id) AS same_tags
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            JOIN post_tags pt ON pt.post_id = p.id
            WHERE p.status = 'PB'
              AND p.id != ?
              AND pt.tag_id IN (SELECT tag_id FROM post_tags WHERE post_id = ?)
            GROUP BY p.id
            ORDER BY same_tags DESC, p.publish DESC, p.id DESC
            LIMIT ?
            "#
        );
        let rows = sqlx::query_as::<_, SqlPost>(&sql)
            .bind(post_id)
            .bind(post_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        self.attach_tags(rows).await
    }

    async fn attach_tags(&self, rows: Vec<SqlPost>) -> anyhow::Result<Vec<Post>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT pt.post_id, t.id, t.name, t.slug \
             FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.post_id IN (",
        );
        let mut ids = qb.separated(", ");
        for row in &rows {
            ids.push_bind(row.id);
        }
        ids.push_unseparated(") ORDER BY t.name ASC");

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for t in qb.build_query_as::<SqlPostTag>().fetch_all(&self.pool).await? {
            by_post.entry(t.post_id).or_default().push(Tag {
                id: t.id,
                name: t.name,
                slug: t.slug,
            });
        }

        rows.into_iter()
            .map(|row| {
                let tags = by_post.remove(&row.id).unwrap_or_default();
                row.into_post(tags)
            })
            .collect()
    }
}
