use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Form,
};
use domain::EmailPostForm;
use maud::Markup;

use crate::http::error::HttpError;
use crate::render::render_share;
use crate::state::AppState;
use crate::views;

pub async fn share_form(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Markup, HttpError> {
    let view = views::post_share(state.repo.as_ref(), state.mailer.as_ref(), post_id, None, "").await?;
    Ok(render_share(&view))
}

pub async fn share_submit(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    Form(payload): Form<EmailPostForm>,
) -> Result<Markup, HttpError> {
    let base_url = absolute_base(&state.site.base_url, &headers);
    let view = views::post_share(
        state.repo.as_ref(),
        state.mailer.as_ref(),
        post_id,
        Some(payload),
        &base_url,
    )
    .await?;
    Ok(render_share(&view))
}

fn absolute_base(configured: &str, headers: &HeaderMap) -> String {
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{}", host)
}
