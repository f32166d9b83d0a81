//! Request-independent view logic.
//!
//! Each function takes its collaborators as trait objects and returns a view
//! model; the HTTP layer only extracts input and renders the result.

use chrono::NaiveDate;
use domain::{
    BlogError, BlogRepo, BoundForm, Comment, CommentForm, EmailPostForm, Mailer, NewComment,
    OutgoingMail, Page, Paginator, Post, Result, Tag, POSTS_PER_PAGE, SIMILAR_POSTS_LIMIT,
};
use tracing::info;

pub struct PostList {
    pub page: Page<Post>,
    pub tag: Option<Tag>,
}

pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub form: BoundForm<CommentForm>,
    pub similar_posts: Vec<Post>,
}

pub struct CommentOutcome {
    pub post: Post,
    pub form: BoundForm<CommentForm>,
    pub comment: Option<Comment>,
}

pub struct ShareOutcome {
    pub post: Post,
    pub form: BoundForm<EmailPostForm>,
    pub sent: bool,
}

pub async fn post_list(
    repo: &dyn BlogRepo,
    tag_slug: Option<&str>,
    page_token: Option<&str>,
) -> Result<PostList> {
    let tag = match tag_slug {
        Some(slug) => Some(
            repo.find_tag(slug)
                .await?
                .ok_or_else(|| BlogError::NotFound(format!("tag `{}`", slug)))?,
        ),
        None => None,
    };
    let tag_id = tag.as_ref().map(|t| t.id);

    let paginator = Paginator::new(repo.count_published(tag_id).await?, POSTS_PER_PAGE);
    let number = paginator.resolve(page_token);
    let (limit, offset) = paginator.window(number);
    let items = repo.list_published(tag_id, limit, offset).await?;

    Ok(PostList {
        page: Page::new(items, number, &paginator),
        tag,
    })
}

pub async fn post_detail(
    repo: &dyn BlogRepo,
    year: i32,
    month: u32,
    day: u32,
    slug: &str,
) -> Result<PostDetail> {
    let not_found = || BlogError::NotFound(format!("post {}/{}/{}/{}", year, month, day, slug));

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(not_found)?;
    let post = repo
        .find_published_by_date(date, slug)
        .await?
        .ok_or_else(not_found)?;

    let comments = repo.active_comments(post.id).await?;
    let similar_posts = if post.tags.is_empty() {
        Vec::new()
    } else {
        repo.similar_posts(post.id, SIMILAR_POSTS_LIMIT).await?
    };

    Ok(PostDetail {
        post,
        comments,
        form: BoundForm::unbound(),
        similar_posts,
    })
}

async fn published_post(repo: &dyn BlogRepo, post_id: i64) -> Result<Post> {
    repo.find_published(post_id)
        .await?
        .ok_or_else(|| BlogError::NotFound(format!("post {}", post_id)))
}

pub async fn post_comment(
    repo: &dyn BlogRepo,
    post_id: i64,
    data: CommentForm,
    auto_approve: bool,
) -> Result<CommentOutcome> {
    let post = published_post(repo, post_id).await?;
    let form = BoundForm::bind(data);

    let comment = if form.is_valid() {
        let saved = repo
            .insert_comment(NewComment {
                post_id: post.id,
                name: form.data.name.clone(),
                email: form.data.email.clone(),
                body: form.data.body.clone(),
                active: auto_approve,
            })
            .await?;
        info!(post_id = post.id, comment_id = saved.id, active = saved.active, "comment added");
        Some(saved)
    } else {
        None
    };

    Ok(CommentOutcome {
        post,
        form,
        comment,
    })
}

/// `submission` is `None` for a plain GET of the share form.
pub async fn post_share(
    repo: &dyn BlogRepo,
    mailer: &dyn Mailer,
    post_id: i64,
    submission: Option<EmailPostForm>,
    base_url: &str,
) -> Result<ShareOutcome> {
    let post = published_post(repo, post_id).await?;

    let Some(data) = submission else {
        return Ok(ShareOutcome {
            post,
            form: BoundForm::unbound(),
            sent: false,
        });
    };

    let form = BoundForm::bind(data);
    if !form.is_valid() {
        return Ok(ShareOutcome {
            post,
            form,
            sent: false,
        });
    }

    mailer.send(share_mail(&post, &form.data, base_url)).await?;
    info!(post_id = post.id, "post shared by email");

    Ok(ShareOutcome {
        post,
        form,
        sent: true,
    })
}

fn share_mail(post: &Post, cd: &EmailPostForm, base_url: &str) -> OutgoingMail {
    let post_url = format!("{}{}", base_url.trim_end_matches('/'), post.absolute_url());
    OutgoingMail {
        subject: format!("{} recommends you read {}", cd.name, post.title),
        body: format!(
            "Read {} at {}\n\n{}'s comments: {}",
            post.title, post_url, cd.name, cd.comments
        ),
        from: cd.email.clone(),
        to: vec![cd.to.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDateTime;
    use domain::{NewPost, PostStatus};
    use std::sync::Mutex;
    use storage::Db;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _mail: OutgoingMail) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    async fn seeded() -> (Db, Vec<i64>) {
        let db = Db::new("sqlite::memory:").await.unwrap();
        let author = db.create_author("admin").await.unwrap();
        let specs: [(&str, u32, PostStatus, &[&str]); 6] = [
            ("first", 1, PostStatus::Published, &["rust"]),
            ("second", 2, PostStatus::Published, &["rust", "web"]),
            ("third", 3, PostStatus::Published, &["web"]),
            ("fourth", 4, PostStatus::Published, &["rust"]),
            ("fifth", 5, PostStatus::Published, &[]),
            ("sketch", 6, PostStatus::Draft, &["rust"]),
        ];
        let mut ids = Vec::new();
        for (slug, day, status, tags) in specs {
            let id = db
                .create_post(&NewPost {
                    title: format!("The {} post", slug),
                    slug: slug.into(),
                    author_id: author,
                    body: "Lorem ipsum".into(),
                    publish: at(2024, 6, day),
                    status,
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                })
                .await
                .unwrap();
            ids.push(id);
        }
        (db, ids)
    }

    fn comment_form(name: &str, email: &str, body: &str) -> CommentForm {
        CommentForm {
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }

    fn share_form(to: &str) -> EmailPostForm {
        EmailPostForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            to: to.into(),
            comments: "worth it".into(),
        }
    }

    #[tokio::test]
    async fn list_paginates_by_three() {
        let (db, _) = seeded().await;
        let list = post_list(&db, None, None).await.unwrap();
        assert_eq!(list.page.number, 1);
        assert_eq!(list.page.num_pages, 2);
        assert_eq!(list.page.count, 5);
        assert_eq!(list.page.items.len(), 3);
        assert_eq!(list.page.items[0].slug, "fifth");
        assert!(list.tag.is_none());
    }

    #[tokio::test]
    async fn list_clamps_page_tokens() {
        let (db, _) = seeded().await;
        let junk = post_list(&db, None, Some("abc")).await.unwrap();
        assert_eq!(junk.page.number, 1);

        let far = post_list(&db, None, Some("40")).await.unwrap();
        assert_eq!(far.page.number, 2);
        assert_eq!(far.page.items.len(), 2);
    }

    #[tokio::test]
    async fn list_by_tag_filters_and_resolves_tag() {
        let (db, _) = seeded().await;
        let list = post_list(&db, Some("rust"), None).await.unwrap();
        assert_eq!(list.tag.as_ref().map(|t| t.slug.as_str()), Some("rust"));
        assert_eq!(list.page.count, 3);
        assert!(list.page.items.iter().all(|p| p.has_tag("rust")));
    }

    #[tokio::test]
    async fn list_by_unknown_tag_is_not_found() {
        let (db, _) = seeded().await;
        let err = post_list(&db, Some("cobol"), None).await.err().unwrap();
        assert!(matches!(err, BlogError::NotFound(_)));
    }

    #[tokio::test]
    async fn detail_collects_active_comments_and_similar_posts() {
        let (db, ids) = seeded().await;
        let second = ids[1];
        for (name, active) in [("a", true), ("b", false), ("c", true)] {
            db.create_comment(NewComment {
                post_id: second,
                name: name.into(),
                email: format!("{}@example.com", name),
                body: "hi".into(),
                active,
            })
            .await
            .unwrap();
        }

        let detail = post_detail(&db, 2024, 6, 2, "second").await.unwrap();
        assert_eq!(detail.post.id, second);
        assert_eq!(detail.comments.len(), 2);
        assert!(!detail.form.is_bound());
        let similar: Vec<_> = detail.similar_posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(similar, ["fourth", "third", "first"]);
    }

    #[tokio::test]
    async fn detail_misses_are_not_found() {
        let (db, _) = seeded().await;
        for (y, m, d, slug) in [
            (2024, 6, 3, "second"),
            (2024, 6, 6, "sketch"),
            (2024, 13, 1, "first"),
            (2024, 2, 30, "first"),
        ] {
            let res = post_detail(&db, y, m, d, slug).await;
            assert!(matches!(res, Err(BlogError::NotFound(_))), "{}/{}/{} {}", y, m, d, slug);
        }
    }

    #[tokio::test]
    async fn valid_comment_is_stored_with_moderation_default() {
        let (db, ids) = seeded().await;
        let before = db.count_comments(ids[0]).await.unwrap();

        let out = post_comment(&db, ids[0], comment_form("Ana", "ana@example.com", "Great"), false)
            .await
            .unwrap();
        let saved = out.comment.expect("comment created");
        assert_eq!(saved.name, "Ana");
        assert_eq!(saved.body, "Great");
        assert!(!saved.active);
        assert_eq!(db.count_comments(ids[0]).await.unwrap(), before + 1);
    }

    #[tokio::test]
    async fn invalid_comment_stores_nothing() {
        let (db, ids) = seeded().await;
        let out = post_comment(&db, ids[0], comment_form("Ana", "ana@example.com", ""), true)
            .await
            .unwrap();
        assert!(out.comment.is_none());
        assert!(!out.form.errors_for("body").is_empty());
        assert_eq!(db.count_comments(ids[0]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn comment_on_draft_is_not_found() {
        let (db, ids) = seeded().await;
        let res = post_comment(&db, ids[5], comment_form("Ana", "ana@example.com", "hi"), true).await;
        assert!(matches!(res, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn share_get_renders_unbound_form() {
        let (db, ids) = seeded().await;
        let mailer = RecordingMailer::default();
        let out = post_share(&db, &mailer, ids[0], None, "http://blog.test").await.unwrap();
        assert!(!out.sent);
        assert!(!out.form.is_bound());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn share_sends_exactly_one_mail() {
        let (db, ids) = seeded().await;
        let mailer = RecordingMailer::default();
        let out = post_share(&db, &mailer, ids[0], Some(share_form("bo@example.com")), "http://blog.test/")
            .await
            .unwrap();
        assert!(out.sent);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let mail = &sent[0];
        assert_eq!(mail.subject, "Ana recommends you read The first post");
        assert_eq!(
            mail.body,
            "Read The first post at http://blog.test/blog/2024/6/1/first/\n\nAna's comments: worth it"
        );
        assert_eq!(mail.from, "ana@example.com");
        assert_eq!(mail.to, ["bo@example.com"]);
    }

    #[tokio::test]
    async fn share_with_bad_recipient_sends_nothing() {
        let (db, ids) = seeded().await;
        let mailer = RecordingMailer::default();
        let out = post_share(&db, &mailer, ids[0], Some(share_form("bo-at-example")), "")
            .await
            .unwrap();
        assert!(!out.sent);
        assert!(!out.form.errors_for("to").is_empty());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn share_propagates_transport_failure() {
        let (db, ids) = seeded().await;
        let res = post_share(&db, &FailingMailer, ids[0], Some(share_form("bo@example.com")), "").await;
        assert!(matches!(res, Err(BlogError::Internal(_))));
    }
}
