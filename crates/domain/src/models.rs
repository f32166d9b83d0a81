use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Two-letter code stored in the `posts.status` column.
    pub fn code(self) -> &'static str {
        match self {
            PostStatus::Draft => "DF",
            PostStatus::Published => "PB",
        }
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DF" => Ok(PostStatus::Draft),
            "PB" => Ok(PostStatus::Published),
            other => Err(format!("unknown post status code: {}", other)),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "Draft"),
            PostStatus::Published => write!(f, "Published"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: Author,
    pub body: String,
    pub publish: NaiveDateTime,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub status: PostStatus,
    pub tags: Vec<Tag>,
}

impl Post {
    /// Canonical path of the detail page, keyed by publish date and slug.
    pub fn absolute_url(&self) -> String {
        format!(
            "/blog/{}/{}/{}/{}/",
            self.publish.year(),
            self.publish.month(),
            self.publish.day(),
            self.slug
        )
    }

    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t.slug == slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub active: bool,
}

/// A comment that has passed form validation and is ready to be stored.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub active: bool,
}

/// Authoring input. Posts are written outside the reader-facing site; this is
/// used by the seeding tool and by tests.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub body: String,
    pub publish: NaiveDateTime,
    pub status: PostStatus,
    pub tags: Vec<String>,
}

/// Lowercases and collapses everything that is not ASCII alphanumeric into
/// single hyphens.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push('_');
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_post() -> Post {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        Post {
            id: 1,
            title: "Who was Django Reinhardt?".into(),
            slug: "who-was-django-reinhardt".into(),
            author: Author {
                id: 1,
                username: "admin".into(),
            },
            body: "A guitarist.".into(),
            publish: ts,
            created: ts,
            updated: ts,
            status: PostStatus::Published,
            tags: vec![Tag {
                id: 3,
                name: "Music".into(),
                slug: "music".into(),
            }],
        }
    }

    #[test]
    fn absolute_url_uses_unpadded_date_parts() {
        assert_eq!(
            sample_post().absolute_url(),
            "/blog/2024/3/7/who-was-django-reinhardt/"
        );
    }

    #[test]
    fn status_codes_round_trip_through_the_column_format() {
        assert_eq!("PB".parse::<PostStatus>(), Ok(PostStatus::Published));
        assert_eq!("DF".parse::<PostStatus>(), Ok(PostStatus::Draft));
        assert!("XX".parse::<PostStatus>().is_err());
        assert_eq!(PostStatus::Published.code(), "PB");
    }

    #[test]
    fn has_tag_matches_by_slug() {
        let post = sample_post();
        assert!(post.has_tag("music"));
        assert!(!post.has_tag("Music"));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Hello,  World! "), "hello-world");
        assert_eq!(slugify("Rust & Web"), "rust-web");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("---"), "");
    }
}
