use chrono::NaiveDateTime;
use domain::{Author, Comment, Post, PostStatus, Tag};
use sqlx::FromRow;

/// Shared column list for post queries; expects `posts p JOIN authors a`.
pub(crate) const POST_COLUMNS: &str = "p.id, p.title, p.slug, p.author_id, \
     a.username AS author_username, p.body, p.publish, p.created, p.updated, p.status";

#[derive(FromRow)]
pub struct SqlPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub author_username: String,
    pub body: String,
    pub publish: NaiveDateTime,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub status: String,
}

impl SqlPost {
    pub fn into_post(self, tags: Vec<Tag>) -> anyhow::Result<Post> {
        let status = self
            .status
            .parse::<PostStatus>()
            .map_err(anyhow::Error::msg)?;
        Ok(Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            author: Author {
                id: self.author_id,
                username: self.author_username,
            },
            body: self.body,
            publish: self.publish,
            created: self.created,
            updated: self.updated,
            status,
            tags,
        })
    }
}

#[derive(FromRow)]
pub struct SqlTag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<SqlTag> for Tag {
    fn from(sql: SqlTag) -> Self {
        Tag {
            id: sql.id,
            name: sql.name,
            slug: sql.slug,
        }
    }
}

// post_tags joined with tags
#[derive(FromRow)]
pub struct SqlPostTag {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(FromRow)]
pub struct SqlComment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub active: bool,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.id,
            post_id: sql.post_id,
            name: sql.name,
            email: sql.email,
            body: sql.body,
            created: sql.created,
            updated: sql.updated,
            active: sql.active,
        }
    }
}
