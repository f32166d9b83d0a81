//! Fills the configured database with a few sample posts, tags and comments.

use anyhow::Context;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use domain::{NewComment, NewPost, PostStatus};
use server::config::Settings;
use storage::Db;

struct SamplePost {
    title: &'static str,
    days_ago: i64,
    status: PostStatus,
    tags: &'static [&'static str],
    body: &'static str,
}

const SAMPLES: &[SamplePost] = &[
    SamplePost {
        title: "Hello world",
        days_ago: 30,
        status: PostStatus::Published,
        tags: &["News"],
        body: "Welcome to the blog.\n\nPosts are grouped by tag and paginated three at a time.",
    },
    SamplePost {
        title: "Ownership in practice",
        days_ago: 21,
        status: PostStatus::Published,
        tags: &["Rust", "Programming"],
        body: "Moves, borrows and lifetimes.\n\nA short tour with examples.",
    },
    SamplePost {
        title: "Async without tears",
        days_ago: 14,
        status: PostStatus::Published,
        tags: &["Rust", "Async"],
        body: "Futures are lazy.\n\nNothing happens until something polls them.",
    },
    SamplePost {
        title: "Serving HTML from axum",
        days_ago: 7,
        status: PostStatus::Published,
        tags: &["Rust", "Web", "Programming"],
        body: "Templates compiled into the binary.\n\nNo runtime template lookup.",
    },
    SamplePost {
        title: "SQLite is enough",
        days_ago: 2,
        status: PostStatus::Published,
        tags: &["Databases", "Web"],
        body: "One file, WAL mode and a single writer.",
    },
    SamplePost {
        title: "Half-written thoughts",
        days_ago: 0,
        status: PostStatus::Draft,
        tags: &["Rust"],
        body: "Not ready yet.",
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new().context("Failed to load configuration")?;
    let db = Db::new(&settings.database.url)
        .await
        .with_context(|| format!("Failed to open database: {}", settings.database.url))?;

    let author_id = db.create_author("admin").await?;
    let now = Utc::now().naive_utc();

    let mut created = 0;
    for sample in SAMPLES {
        let post = NewPost {
            title: sample.title.to_string(),
            slug: domain::slugify(sample.title),
            author_id,
            body: sample.body.to_string(),
            publish: now - Duration::days(sample.days_ago),
            status: sample.status,
            tags: sample.tags.iter().map(|t| t.to_string()).collect(),
        };

        match db.create_post(&post).await {
            Ok(post_id) => {
                created += 1;
                if post.status == PostStatus::Published {
                    db.create_comment(NewComment {
                        post_id,
                        name: "Reader".into(),
                        email: "reader@example.com".into(),
                        body: format!("Thanks for writing about {}.", post.title.to_lowercase()),
                        active: true,
                    })
                    .await?;
                }
            }
            Err(e) => warn!(slug = %post.slug, "skipping sample post: {:#}", e),
        }
    }

    info!(created, total = SAMPLES.len(), "seeding finished");
    Ok(())
}
