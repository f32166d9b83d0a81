use axum::{
    extract::{Path, State},
    Form,
};
use domain::{BlogError, CommentForm};
use maud::Markup;

use crate::http::error::HttpError;
use crate::render::render_comment_outcome;
use crate::state::AppState;
use crate::views;

pub async fn post_comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Form(payload): Form<CommentForm>,
) -> Result<Markup, HttpError> {
    let view = views::post_comment(
        state.repo.as_ref(),
        post_id,
        payload,
        state.site.auto_approve_comments,
    )
    .await?;
    Ok(render_comment_outcome(&view))
}

pub async fn method_not_allowed() -> HttpError {
    HttpError(BlogError::MethodNotAllowed)
}
