mod error;
pub mod forms;
mod models;
pub mod paging;
mod ports;

pub use error::{BlogError, Result};
pub use forms::{BoundForm, CommentForm, EmailPostForm, FieldErrors, FormInput};
pub use models::{slugify, Author, Comment, NewComment, NewPost, Post, PostStatus, Tag};
pub use paging::{Page, Paginator, POSTS_PER_PAGE};
pub use ports::{BlogRepo, Mailer, OutgoingMail};

/// Maximum number of recommendations on a post's detail page.
pub const SIMILAR_POSTS_LIMIT: i64 = 4;
